//! The lexer's mode machine.

use cove_util::Position;

/// The lexer's current sub-state, determining which scan rules are active.
///
/// Sub-modes carry the position at which they began, so unterminated
/// constructs report at their opening delimiter rather than at end of
/// input. Comment modes also carry the mode to resume on exit; because the
/// resumed mode may itself be a comment, the chain of `resume` boxes forms
/// a stack of unbounded depth without an explicit array.
#[derive(Clone, Debug, PartialEq)]
pub enum LexerMode<'a> {
    /// Ordinary tokenization.
    Normal,

    /// Inside a `{- ... -}` block comment.
    InComment {
        /// Where the comment opened.
        opened: Position,
        /// Mode to restore once the comment closes.
        resume: Box<LexerMode<'a>>,
    },

    /// Inside a quoted string that itself occurs inside a block comment;
    /// a `-}` in here does not close the comment.
    InCommentString {
        /// Where the quoted stretch opened.
        opened: Position,
        /// Mode to restore once the quote closes.
        resume: Box<LexerMode<'a>>,
    },

    /// Inside a string literal.
    InString {
        /// Where the literal opened.
        opened: Position,
        /// Remaining input as of the opening quote. The completed literal
        /// is re-sliced out of this and decoded as one span.
        literal: &'a str,
    },
}

impl LexerMode<'_> {
    /// Returns true for the initial, top-level mode.
    pub fn is_normal(&self) -> bool {
        matches!(self, LexerMode::Normal)
    }
}
