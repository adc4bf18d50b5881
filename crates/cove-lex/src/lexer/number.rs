//! Numeric lexeme scanning.
//!
//! The scanner consumes the longest well-formed numeric lexeme: an
//! optional sign, a base prefix with its digits, or a decimal form with
//! optional fraction and exponent. Prefixes, the decimal point, and the
//! exponent marker are only consumed when a valid digit follows, so `0x`
//! lexes as the number `0` followed by the atom `x` rather than a
//! malformed literal.
//!
//! The matched lexeme is upper-cased and handed to [`crate::number::parse`];
//! the scanner guarantees its shape, so the only possible parse failure is
//! an out-of-range value, which surfaces in the token stream.

use cove_util::Located;

use crate::lexer::Lexer;
use crate::number;
use crate::token::{LexError, Token};

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal.
    pub(crate) fn scan_number(&mut self) -> Located<Token> {
        let start = self.cursor.position();
        let mark = self.cursor.remaining();

        if matches!(self.cursor.current_char(), '+' | '-') {
            self.cursor.advance();
        }

        if self.cursor.current_char() == '0'
            && matches!(self.cursor.peek_char(1), 'x' | 'X')
            && self.cursor.peek_char(2).is_ascii_hexdigit()
        {
            self.cursor.advance();
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_hexdigit() {
                self.cursor.advance();
            }
        } else if self.cursor.current_char() == '0'
            && matches!(self.cursor.peek_char(1), 'o' | 'O')
            && self.cursor.peek_char(2).is_digit(8)
        {
            self.cursor.advance();
            self.cursor.advance();
            while self.cursor.current_char().is_digit(8) {
                self.cursor.advance();
            }
        } else if self.cursor.current_char() == '0'
            && matches!(self.cursor.peek_char(1), 'b' | 'B')
            && matches!(self.cursor.peek_char(2), '0' | '1')
        {
            self.cursor.advance();
            self.cursor.advance();
            while matches!(self.cursor.current_char(), '0' | '1') {
                self.cursor.advance();
            }
        } else {
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }

            if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
                self.cursor.advance();
                while self.cursor.current_char().is_ascii_digit() {
                    self.cursor.advance();
                }
            }

            let exponent_follows = matches!(self.cursor.current_char(), 'e' | 'E')
                && (self.cursor.peek_char(1).is_ascii_digit()
                    || (matches!(self.cursor.peek_char(1), '+' | '-')
                        && self.cursor.peek_char(2).is_ascii_digit()));
            if exponent_follows {
                self.cursor.advance();
                if matches!(self.cursor.current_char(), '+' | '-') {
                    self.cursor.advance();
                }
                while self.cursor.current_char().is_ascii_digit() {
                    self.cursor.advance();
                }
            }
        }

        let lexeme = self.cursor.consumed_since(mark);
        let token = match number::parse(&lexeme.to_ascii_uppercase()) {
            Ok(value) => Token::Number(value),
            Err(reason) => Token::Error(LexError::BadEscape(reason.to_string())),
        };
        Located::new(start, token)
    }
}
