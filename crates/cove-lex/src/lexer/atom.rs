//! Atom and section header lexing.
//!
//! An unquoted name is an atom unless it is followed (possibly after
//! spaces) by `:` or `{`, in which case the whole stretch including the
//! delimiter is one section header. The header's name is the lexeme with
//! the delimiter and any whitespace before it removed; indentation ahead
//! of the name is not part of the lexeme and survives in the token's
//! position.

use cove_util::{Located, Symbol};

use crate::lexer::Lexer;
use crate::token::Token;
use crate::unicode::is_atom_continue;

impl<'a> Lexer<'a> {
    /// Lexes an atom, upgrading it to a section header when the section
    /// delimiter follows.
    pub(crate) fn scan_atom_or_section(&mut self) -> Located<Token> {
        let start = self.cursor.position();
        let mark = self.cursor.remaining();

        self.cursor.advance();
        while is_atom_continue(self.cursor.current_char()) && !self.cursor.is_at_end() {
            self.cursor.advance();
        }

        // Longest match: probe past horizontal space for the section
        // delimiter, keeping the probe only if it lands on one. `{-` is a
        // comment opener, not a delimiter.
        let mut probe = self.cursor;
        while matches!(probe.current_char(), ' ' | '\t') {
            probe.advance();
        }
        let delimited = match probe.current_char() {
            ':' => true,
            '{' => probe.peek_char(1) != '-',
            _ => false,
        };
        if delimited {
            probe.advance();
            self.cursor = probe;
            let lexeme = self.cursor.consumed_since(mark);
            let name = section_name(lexeme);
            return Located::new(start, Token::Section(Symbol::intern(name)));
        }

        let name = self.cursor.consumed_since(mark);
        Located::new(start, Token::Atom(Symbol::intern(name)))
    }
}

/// Strips the trailing delimiter from a section header lexeme and trims
/// the whitespace ahead of it.
fn section_name(lexeme: &str) -> &str {
    lexeme[..lexeme.len() - 1].trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::LexError;

    fn first(source: &str) -> Token {
        Lexer::new(source).next_token().value
    }

    #[test]
    fn test_simple_atom() {
        assert_eq!(first("yes"), Token::Atom(Symbol::intern("yes")));
    }

    #[test]
    fn test_atom_with_continuations() {
        assert_eq!(
            first("listen-address_v4.2"),
            Token::Atom(Symbol::intern("listen-address_v4.2"))
        );
    }

    #[test]
    fn test_unicode_atom() {
        assert_eq!(first("größe"), Token::Atom(Symbol::intern("größe")));
    }

    #[test]
    fn test_colon_section() {
        assert_eq!(first("server:"), Token::Section(Symbol::intern("server")));
    }

    #[test]
    fn test_section_with_space_before_colon() {
        assert_eq!(first("server  :"), Token::Section(Symbol::intern("server")));
    }

    #[test]
    fn test_brace_section() {
        assert_eq!(first("server {"), Token::Section(Symbol::intern("server")));
    }

    #[test]
    fn test_atom_before_comment_stays_atom() {
        // `{-` opens a comment, so no section delimiter follows the atom.
        let tokens: Vec<Token> = Lexer::new("name {- c -}").map(|t| t.value).collect();
        assert_eq!(tokens, vec![Token::Atom(Symbol::intern("name")), Token::Eof]);
    }

    #[test]
    fn test_atom_then_newline_is_not_section() {
        // The delimiter probe does not cross line boundaries.
        let tokens: Vec<Token> = Lexer::new("name\n:").map(|t| t.value).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Atom(Symbol::intern("name")),
                Token::Error(LexError::NoMatch(':')),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_section_position_is_name_start() {
        let tok = Lexer::new("   server:").next_token();
        assert_eq!(tok.position.column, 4);
        assert_eq!(tok.value, Token::Section(Symbol::intern("server")));
    }
}
