//! Token type definitions.
//!
//! The lexer turns source text into a stream of [`Token`]s, each wrapped in
//! a [`cove_util::Located`] carrying the position where it begins. Lexical
//! failures travel the same stream as [`Token::Error`] values rather than
//! unwinding the driver, so the downstream parser consumes valid tokens and
//! diagnostics uniformly.

use crate::number::Number;
use cove_util::Symbol;
use std::fmt;
use thiserror::Error;

/// One lexical token of a Cove document.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A section header: `name:` or `name {`. Carries the header name with
    /// the trailing delimiter and any whitespace before it removed.
    Section(Symbol),

    /// An unquoted name such as `yes` or `listen-address`.
    Atom(Symbol),

    /// A quoted string literal, fully decoded.
    String(String),

    /// A numeric literal, parsed.
    Number(Number),

    /// `[`
    OpenList,

    /// `]`
    CloseList,

    /// `{`
    OpenBrace,

    /// `}`
    CloseBrace,

    /// `,`
    Comma,

    /// `*`, introducing one bulleted list item.
    Bullet,

    /// A lexical error, in-stream.
    Error(LexError),

    /// End of input. Emitted exactly once, always last.
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Section(name) => write!(f, "section `{}`", name),
            Token::Atom(name) => write!(f, "atom `{}`", name),
            Token::String(_) => f.write_str("string literal"),
            Token::Number(_) => f.write_str("number"),
            Token::OpenList => f.write_str("`[`"),
            Token::CloseList => f.write_str("`]`"),
            Token::OpenBrace => f.write_str("`{`"),
            Token::CloseBrace => f.write_str("`}`"),
            Token::Comma => f.write_str("`,`"),
            Token::Bullet => f.write_str("`*`"),
            Token::Error(e) => write!(f, "error: {}", e),
            Token::Eof => f.write_str("end of input"),
        }
    }
}

/// A lexical error, carried in the token stream as data.
///
/// Unterminated constructs are positioned at their opening delimiter,
/// decode failures at the start of the literal, and `NoMatch` at the
/// offending (unconsumed) character.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// End of input inside a block comment.
    #[error("unterminated block comment")]
    UntermComment,

    /// End of input inside a string literal.
    #[error("unterminated string literal")]
    UntermString,

    /// A string or numeric literal that failed to decode; carries the
    /// decoder's reason.
    #[error("invalid literal: {0}")]
    BadEscape(String),

    /// No lexical rule matches at this character.
    #[error("unexpected character {0:?}")]
    NoMatch(char),
}
