//! String literal lexing.
//!
//! String mode scans to the matching close quote without interpreting
//! content: escape pairs are consumed blindly (so `\"` cannot terminate
//! the literal) and line gaps atomically (so a gap's closing backslash is
//! not mistaken for the start of an escape). Once the close quote is
//! matched, the whole span from the opening quote is re-sliced out of the
//! retained input and decoded in one pass by [`crate::escape::decode`].
//!
//! Decoding may fail; the mode still exits, reporting the failure as an
//! in-stream error at the opening quote.

use std::mem;

use cove_util::Located;

use crate::escape;
use crate::lexer::mode::LexerMode;
use crate::lexer::Lexer;
use crate::token::{LexError, Token};

impl<'a> Lexer<'a> {
    /// Scans string mode until the literal closes.
    ///
    /// Returns `None` when input ran out first; the EOF action then
    /// reports the unterminated literal at its opening quote.
    pub(crate) fn scan_string(&mut self) -> Option<Located<Token>> {
        loop {
            if self.cursor.is_at_end() {
                return None;
            }
            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    return Some(self.end_string());
                }
                '\\' => {
                    self.cursor.advance();
                    if self.cursor.current_char().is_whitespace() {
                        // A line gap: consume it whole, closing backslash
                        // included.
                        while self.cursor.current_char().is_whitespace() {
                            self.cursor.advance();
                        }
                        self.cursor.match_char('\\');
                    } else if !self.cursor.is_at_end() {
                        self.cursor.advance();
                    }
                }
                _ => self.cursor.advance(),
            }
        }
    }

    /// Ends string mode: slices the completed literal, decodes it, and
    /// returns to normal mode.
    fn end_string(&mut self) -> Located<Token> {
        let LexerMode::InString { opened, literal } =
            mem::replace(&mut self.mode, LexerMode::Normal)
        else {
            unreachable!("string scan outside string mode");
        };
        let span = &literal[..literal.len() - self.cursor.remaining().len()];
        let token = match escape::decode(span) {
            Ok(text) => Token::String(text),
            Err(reason) => Token::Error(LexError::BadEscape(reason.to_string())),
        };
        Located::new(opened, token)
    }
}
