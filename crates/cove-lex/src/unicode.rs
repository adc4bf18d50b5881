//! Character classification for the Cove lexer.
//!
//! The scanner operates over a small finite alphabet: ASCII characters keep
//! their own byte value (so rules can match exact punctuation), and every
//! code point above ASCII collapses into one of seven buckets. This keeps
//! the rule set finite while still letting any Unicode letter appear in an
//! unquoted name.

/// The lexer's input alphabet.
///
/// # Example
///
/// ```
/// use cove_lex::unicode::{classify, CharClass};
///
/// assert_eq!(classify('['), CharClass::Byte(b'['));
/// assert_eq!(classify('Ä'), CharClass::Upper);
/// assert_eq!(classify('λ'), CharClass::Lower);
/// assert_eq!(classify('→'), CharClass::Symbol);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// An ASCII character, carrying its own value.
    Byte(u8),

    /// Control and other non-printable code points.
    NonGraphic,

    /// An upper- or title-case letter above ASCII.
    Upper,

    /// A lower-case or caseless letter above ASCII.
    Lower,

    /// A numeric code point above ASCII.
    Digit,

    /// Punctuation and symbols above ASCII.
    Symbol,

    /// Whitespace above ASCII.
    Space,

    /// Recognized but uncommon code points that may continue a name, such
    /// as combining marks.
    Other,
}

/// Maps a code point to its lexer input class.
///
/// Code points `<= 6` are reserved and always non-graphic; the remaining
/// ASCII range maps to itself.
pub fn classify(c: char) -> CharClass {
    if (c as u32) <= 6 {
        return CharClass::NonGraphic;
    }
    if c.is_ascii() {
        return CharClass::Byte(c as u8);
    }
    if c.is_control() {
        CharClass::NonGraphic
    } else if c.is_uppercase() {
        CharClass::Upper
    } else if c.is_alphabetic() {
        // Lower-case letters plus caseless scripts; all usable in names.
        CharClass::Lower
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_whitespace() {
        CharClass::Space
    } else if unicode_ident::is_xid_continue(c) {
        CharClass::Other
    } else {
        CharClass::Symbol
    }
}

/// Checks if a character can start an unquoted atom or section name.
///
/// # Example
///
/// ```
/// use cove_lex::unicode::is_atom_start;
///
/// assert!(is_atom_start('a'));
/// assert!(is_atom_start('_'));
/// assert!(is_atom_start('δ'));
/// assert!(!is_atom_start('1'));
/// assert!(!is_atom_start('['));
/// ```
pub fn is_atom_start(c: char) -> bool {
    c.is_ascii_alphabetic()
        || c == '_'
        || matches!(classify(c), CharClass::Upper | CharClass::Lower)
}

/// Checks if a character can continue an unquoted atom or section name.
///
/// Continuation additionally admits digits, `-`, and `.`, so names like
/// `listen-address` and versions like `tls1.3` lex as single atoms.
///
/// # Example
///
/// ```
/// use cove_lex::unicode::is_atom_continue;
///
/// assert!(is_atom_continue('a'));
/// assert!(is_atom_continue('3'));
/// assert!(is_atom_continue('-'));
/// assert!(!is_atom_continue(':'));
/// assert!(!is_atom_continue(' '));
/// ```
pub fn is_atom_continue(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '_' | '-' | '.')
        || matches!(
            classify(c),
            CharClass::Upper | CharClass::Lower | CharClass::Digit | CharClass::Other
        )
}
