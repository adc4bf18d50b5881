//! Core lexer implementation.
//!
//! This module contains the main [`Lexer`] struct, the normal-mode rule
//! dispatch, and the end-of-input action. The per-construct scanners live
//! in the sibling modules and are driven from here through the mode
//! machine.

use std::mem;

use cove_util::{Located, Position};

use crate::cursor::Cursor;
use crate::lexer::mode::LexerMode;
use crate::token::{LexError, Token};
use crate::unicode::is_atom_start;

/// Lexer for Cove configuration text.
///
/// The lexer owns exactly two pieces of state: an input [`Cursor`] and the
/// current [`LexerMode`]. Each call to [`Lexer::next_token`] consumes input
/// until one token is produced; errors are produced as in-stream
/// [`Token::Error`] values, never panics.
///
/// # Example
///
/// ```
/// use cove_lex::{Lexer, Token};
/// use cove_util::Symbol;
///
/// let mut lexer = Lexer::new("server:");
/// let tok = lexer.next_token();
/// assert_eq!(tok.value, Token::Section(Symbol::intern("server")));
/// assert_eq!(lexer.next_token().value, Token::Eof);
/// ```
pub struct Lexer<'a> {
    /// Input cursor.
    pub(crate) cursor: Cursor<'a>,

    /// Current mode.
    pub(crate) mode: LexerMode<'a>,

    /// Set once the final `Eof` token has been produced.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer at the start of the given text.
    pub fn new(source: &'a str) -> Self {
        Self::with_position(source, Position::START)
    }

    /// Creates a lexer with an explicit starting position, for lexing a
    /// buffer that begins mid-file.
    pub fn with_position(source: &'a str, position: Position) -> Self {
        Self {
            cursor: Cursor::with_position(source, position),
            mode: LexerMode::Normal,
            finished: false,
        }
    }

    /// Returns the next token.
    ///
    /// At end of input this yields any pending unterminated-construct
    /// error first and then `Eof` at the finalized position; further calls
    /// keep returning `Eof`. The [`Iterator`] impl stops after yielding
    /// `Eof` once.
    pub fn next_token(&mut self) -> Located<Token> {
        loop {
            if self.cursor.is_at_end() {
                return self.eof_token();
            }
            let emitted = match self.mode {
                LexerMode::Normal => self.scan_normal(),
                LexerMode::InComment { .. } => {
                    self.scan_block_comment();
                    None
                }
                LexerMode::InCommentString { .. } => {
                    self.scan_comment_string();
                    None
                }
                LexerMode::InString { .. } => self.scan_string(),
            };
            if let Some(token) = emitted {
                return token;
            }
        }
    }

    /// The end-of-input action.
    ///
    /// An open sub-mode reports its unterminated construct at the position
    /// where the construct opened; once the mode is back to normal, `Eof`
    /// is emitted at the finalized position.
    fn eof_token(&mut self) -> Located<Token> {
        match mem::replace(&mut self.mode, LexerMode::Normal) {
            LexerMode::Normal => {
                self.finished = true;
                Located::new(self.cursor.position().finalize(), Token::Eof)
            }
            LexerMode::InString { opened, .. } => {
                Located::new(opened, Token::Error(LexError::UntermString))
            }
            LexerMode::InComment { opened, .. } | LexerMode::InCommentString { opened, .. } => {
                Located::new(opened, Token::Error(LexError::UntermComment))
            }
        }
    }

    /// Normal-mode dispatch: selects and runs one rule at the current
    /// character, longest match first.
    ///
    /// Returns `None` when the rule only changed mode (comment and string
    /// openers emit no token themselves).
    fn scan_normal(&mut self) -> Option<Located<Token>> {
        self.skip_blanks();
        if self.cursor.is_at_end() {
            return None;
        }

        let start = self.cursor.position();
        match self.cursor.current_char() {
            '[' => Some(self.punct(start, Token::OpenList)),
            ']' => Some(self.punct(start, Token::CloseList)),
            ',' => Some(self.punct(start, Token::Comma)),
            '*' => Some(self.punct(start, Token::Bullet)),
            '}' => Some(self.punct(start, Token::CloseBrace)),
            '{' if self.cursor.peek_char(1) == '-' => {
                self.cursor.advance();
                self.cursor.advance();
                self.enter_comment(start);
                None
            }
            '{' => Some(self.punct(start, Token::OpenBrace)),
            '"' => {
                // Retain the input from the opening quote onward; the
                // completed literal is re-sliced from it and decoded as a
                // single span when the closing quote is matched.
                let literal = self.cursor.remaining();
                self.cursor.advance();
                self.mode = LexerMode::InString {
                    opened: start,
                    literal,
                };
                None
            }
            c @ ('+' | '-') => {
                if self.cursor.peek_char(1).is_ascii_digit() {
                    Some(self.scan_number())
                } else {
                    self.cursor.advance();
                    Some(Located::new(start, Token::Error(LexError::NoMatch(c))))
                }
            }
            c if c.is_ascii_digit() => Some(self.scan_number()),
            c if is_atom_start(c) => Some(self.scan_atom_or_section()),
            c => {
                // No rule matches. Report the offending character, consume
                // it, and let lexing continue from the next one.
                self.cursor.advance();
                Some(Located::new(start, Token::Error(LexError::NoMatch(c))))
            }
        }
    }

    /// Emits a single-character punctuation token.
    fn punct(&mut self, start: Position, token: Token) -> Located<Token> {
        self.cursor.advance();
        Located::new(start, token)
    }

    /// Pushes a block-comment mode that resumes the current mode on exit.
    pub(crate) fn enter_comment(&mut self, opened: Position) {
        let resume = Box::new(mem::replace(&mut self.mode, LexerMode::Normal));
        self.mode = LexerMode::InComment { opened, resume };
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Located<Token>;

    /// Yields every token including the final `Eof`, then fuses.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}
