//! cove-lex - Lexical Analyzer for the Cove Configuration Language
//!
//! This crate turns Cove source text into a stream of positioned tokens
//! for the grammar parser. Cove is a human-writable configuration
//! language: sections introduced by `name:` or `name {`, lists written
//! `[a, b]` or as `*`-bulleted items, unquoted atoms, quoted strings, and
//! numbers. Comments are `--` to end of line and nestable `{- -}` blocks.
//!
//! # Example Usage
//!
//! ```
//! use cove_lex::{lex, Lexer, Token};
//!
//! let source = "server:\n  port [8080, 8081]";
//!
//! // Iterate tokens one at a time
//! let mut lexer = Lexer::new(source);
//! assert!(matches!(lexer.next_token().value, Token::Section(_)));
//!
//! // Or collect the whole stream; the final token is always Eof
//! let tokens = lex(source);
//! assert_eq!(tokens.last().unwrap().value, Token::Eof);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation and mode machine
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classification
//! - [`escape`] - String literal escape decoding
//! - [`number`] - Numeric literal values
//!
//! # Positions
//!
//! Every token carries the [`Position`] at which it begins: character
//! index, 1-based line, and 1-based column with 8-column tab stops. Errors
//! are positioned where a human wants to look: unterminated constructs at
//! their opening delimiter, bad literals at the literal's start, and
//! unmatched characters at the character itself.
//!
//! # Errors
//!
//! Lexical failures never unwind: they are ordinary [`Token::Error`]
//! values in the stream, and lexing continues in normal mode after each
//! one. The stream always ends with exactly one [`Token::Eof`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod escape;
pub mod lexer;
pub mod number;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{Lexer, LexerMode};
pub use number::Number;
pub use token::{LexError, Token};

// Foundation types, re-exported so consumers need only this crate
pub use cove_util::{Located, Position, Symbol};

/// Lexes a complete source text into a vector of positioned tokens.
///
/// The result always contains exactly one [`Token::Eof`], as its last
/// element.
///
/// # Example
///
/// ```
/// use cove_lex::{lex, Token};
///
/// let tokens = lex("timeout 30");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[2].value, Token::Eof);
/// ```
pub fn lex(source: &str) -> Vec<Located<Token>> {
    Lexer::new(source).collect()
}
