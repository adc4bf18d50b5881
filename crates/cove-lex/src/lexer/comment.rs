//! Comment handling.
//!
//! `--` comments run to end of line and are consumed together with
//! whitespace between tokens. `{- -}` comments nest: each `{-` pushes a
//! comment mode remembering where it opened and which mode to resume, and
//! each `-}` pops one level. A quoted stretch inside a block comment gets
//! its own sub-mode so a `-}` inside the quotes does not close the
//! comment.

use std::mem;

use crate::lexer::mode::LexerMode;
use crate::lexer::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and `--` line comments between tokens.
    pub(crate) fn skip_blanks(&mut self) {
        loop {
            let c = self.cursor.current_char();
            if c.is_whitespace() && !self.cursor.is_at_end() {
                self.cursor.advance();
            } else if c == '-' && self.cursor.peek_char(1) == '-' {
                while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                    self.cursor.advance();
                }
            } else {
                return;
            }
        }
    }

    /// Scans block-comment mode up to the next mode transition.
    pub(crate) fn scan_block_comment(&mut self) {
        loop {
            if self.cursor.is_at_end() {
                return;
            }
            if self.cursor.starts_with("{-") {
                let opened = self.cursor.position();
                self.cursor.advance();
                self.cursor.advance();
                self.enter_comment(opened);
                return;
            }
            if self.cursor.starts_with("-}") {
                self.cursor.advance();
                self.cursor.advance();
                self.leave_nested_mode();
                return;
            }
            if self.cursor.current_char() == '"' {
                let opened = self.cursor.position();
                self.cursor.advance();
                let resume = Box::new(mem::replace(&mut self.mode, LexerMode::Normal));
                self.mode = LexerMode::InCommentString { opened, resume };
                return;
            }
            self.cursor.advance();
        }
    }

    /// Scans a quoted stretch inside a block comment up to its close
    /// quote.
    pub(crate) fn scan_comment_string(&mut self) {
        loop {
            if self.cursor.is_at_end() {
                return;
            }
            match self.cursor.current_char() {
                '\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_at_end() {
                        self.cursor.advance();
                    }
                }
                '"' => {
                    self.cursor.advance();
                    self.leave_nested_mode();
                    return;
                }
                _ => self.cursor.advance(),
            }
        }
    }

    /// Pops one level of the mode chain, restoring the carried resume
    /// mode.
    fn leave_nested_mode(&mut self) {
        let mode = mem::replace(&mut self.mode, LexerMode::Normal);
        self.mode = match mode {
            LexerMode::InComment { resume, .. } | LexerMode::InCommentString { resume, .. } => {
                *resume
            }
            other => other,
        };
    }
}
