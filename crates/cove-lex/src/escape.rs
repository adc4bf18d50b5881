//! String literal escape decoding.
//!
//! A string literal reaches the decoder as one complete span, opening and
//! closing quote included. [`decode`] replays that span against the escape
//! grammar and produces the literal's content, or a reason why it is
//! malformed.
//!
//! The grammar recognizes:
//!
//! - single-character escapes: `\a \b \f \n \r \t \v \\ \" \'`
//! - the empty escape `\&`, which decodes to nothing and exists to split
//!   adjacent pieces of a literal (`"a\&b"` is `ab`)
//! - code point escapes: decimal `\10`, hex `\x1F600`, octal `\o177`
//! - ASCII control mnemonics `\NUL` through `\DEL`, longest match first so
//!   `\SOH` is U+0001 and not `\SO` followed by `H`
//! - caret escapes `\^@` through `\^_`
//! - line gaps: a backslash, whitespace (which may include newlines), and a
//!   closing backslash decode to nothing, letting a literal span lines
//!
//! Raw control characters outside a gap are rejected; their escaped
//! spellings are the supported forms.

use cove_util::FxHashMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Why a string literal failed to decode.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EscapeError {
    /// The span does not begin with a quote.
    #[error("not a quoted literal")]
    MissingQuote,

    /// The span ended before the closing quote.
    #[error("unterminated literal")]
    Unterminated,

    /// Content followed the closing quote.
    #[error("content after closing quote")]
    TrailingInput,

    /// The character after a backslash starts no known escape.
    #[error("unknown escape `\\{0}`")]
    UnknownEscape(char),

    /// A `\x` or `\o` escape with no digits.
    #[error("numeric escape has no digits")]
    EmptyNumeric,

    /// A numeric escape beyond U+10FFFF or naming a surrogate.
    #[error("escaped code point out of range")]
    OutOfRange,

    /// A line gap that is not closed by a backslash.
    #[error("unterminated line gap")]
    UnterminatedGap,

    /// A raw control character in the literal.
    #[error("unescaped control character {0:?}")]
    NonGraphic(char),
}

/// ASCII control mnemonics, by name.
static MNEMONICS: LazyLock<FxHashMap<&'static str, char>> = LazyLock::new(|| {
    [
        ("NUL", '\u{00}'),
        ("SOH", '\u{01}'),
        ("STX", '\u{02}'),
        ("ETX", '\u{03}'),
        ("EOT", '\u{04}'),
        ("ENQ", '\u{05}'),
        ("ACK", '\u{06}'),
        ("BEL", '\u{07}'),
        ("BS", '\u{08}'),
        ("HT", '\u{09}'),
        ("LF", '\u{0a}'),
        ("VT", '\u{0b}'),
        ("FF", '\u{0c}'),
        ("CR", '\u{0d}'),
        ("SO", '\u{0e}'),
        ("SI", '\u{0f}'),
        ("DLE", '\u{10}'),
        ("DC1", '\u{11}'),
        ("DC2", '\u{12}'),
        ("DC3", '\u{13}'),
        ("DC4", '\u{14}'),
        ("NAK", '\u{15}'),
        ("SYN", '\u{16}'),
        ("ETB", '\u{17}'),
        ("CAN", '\u{18}'),
        ("EM", '\u{19}'),
        ("SUB", '\u{1a}'),
        ("ESC", '\u{1b}'),
        ("FS", '\u{1c}'),
        ("GS", '\u{1d}'),
        ("RS", '\u{1e}'),
        ("US", '\u{1f}'),
        ("SP", '\u{20}'),
        ("DEL", '\u{7f}'),
    ]
    .into_iter()
    .collect()
});

/// Decodes a complete quoted literal, quotes included.
///
/// The whole span must be consumed: a missing closing quote or content
/// after it is an error, as is any malformed escape.
///
/// # Example
///
/// ```
/// use cove_lex::escape::decode;
///
/// assert_eq!(decode(r#""a\tb""#).unwrap(), "a\tb");
/// assert_eq!(decode(r#""a\&b""#).unwrap(), "ab");
/// assert!(decode(r#""a\qb""#).is_err());
/// ```
pub fn decode(raw: &str) -> Result<String, EscapeError> {
    let mut rest = raw.strip_prefix('"').ok_or(EscapeError::MissingQuote)?;
    let mut out = String::with_capacity(rest.len().saturating_sub(1));

    loop {
        match next_char(&mut rest)? {
            '"' => {
                return if rest.is_empty() {
                    Ok(out)
                } else {
                    Err(EscapeError::TrailingInput)
                };
            }
            '\\' => decode_escape(&mut rest, &mut out)?,
            c if c.is_control() => return Err(EscapeError::NonGraphic(c)),
            c => out.push(c),
        }
    }
}

/// Consumes one character, failing at end of span.
fn next_char(rest: &mut &str) -> Result<char, EscapeError> {
    let c = rest.chars().next().ok_or(EscapeError::Unterminated)?;
    *rest = &rest[c.len_utf8()..];
    Ok(c)
}

/// Decodes the escape following a consumed backslash.
fn decode_escape(rest: &mut &str, out: &mut String) -> Result<(), EscapeError> {
    let first = rest.chars().next().ok_or(EscapeError::Unterminated)?;

    if first.is_whitespace() {
        // Line gap: whitespace bracketed by backslashes, decoding to
        // nothing.
        while rest.chars().next().is_some_and(char::is_whitespace) {
            next_char(rest)?;
        }
        return match rest.strip_prefix('\\') {
            Some(after) => {
                *rest = after;
                Ok(())
            }
            None => Err(EscapeError::UnterminatedGap),
        };
    }

    next_char(rest)?;
    match first {
        '&' => Ok(()),
        'a' => push(out, '\u{07}'),
        'b' => push(out, '\u{08}'),
        'f' => push(out, '\u{0c}'),
        'n' => push(out, '\n'),
        'r' => push(out, '\r'),
        't' => push(out, '\t'),
        'v' => push(out, '\u{0b}'),
        '\\' => push(out, '\\'),
        '"' => push(out, '"'),
        '\'' => push(out, '\''),
        '^' => {
            let control = next_char(rest)?;
            if ('@'..='_').contains(&control) {
                push(out, char::from_u32(control as u32 - 64).unwrap_or('\u{0}'))
            } else {
                Err(EscapeError::UnknownEscape(control))
            }
        }
        'x' => numeric(rest, 16, None, out),
        'o' => numeric(rest, 8, None, out),
        c if c.is_ascii_digit() => numeric(rest, 10, c.to_digit(10), out),
        c if c.is_ascii_uppercase() => mnemonic(c, rest, out),
        c => Err(EscapeError::UnknownEscape(c)),
    }
}

fn push(out: &mut String, c: char) -> Result<(), EscapeError> {
    out.push(c);
    Ok(())
}

/// Decodes a run of digits in the given radix into one code point.
fn numeric(
    rest: &mut &str,
    radix: u32,
    first: Option<u32>,
    out: &mut String,
) -> Result<(), EscapeError> {
    let mut seen = first.is_some();
    let mut value = first.unwrap_or(0);

    loop {
        let Some(c) = rest.chars().next() else { break };
        let Some(digit) = c.to_digit(radix) else {
            break;
        };
        next_char(rest)?;
        seen = true;
        value = value
            .checked_mul(radix)
            .and_then(|v| v.checked_add(digit))
            .ok_or(EscapeError::OutOfRange)?;
        if value > 0x10FFFF {
            return Err(EscapeError::OutOfRange);
        }
    }

    if !seen {
        return Err(EscapeError::EmptyNumeric);
    }
    match char::from_u32(value) {
        Some(c) => push(out, c),
        None => Err(EscapeError::OutOfRange),
    }
}

/// Resolves a control mnemonic, longest name first.
fn mnemonic(first: char, rest: &mut &str, out: &mut String) -> Result<(), EscapeError> {
    let mut name = [0u8; 3];
    name[0] = first as u8;
    for extra in (0..=2usize).rev() {
        let Some(tail) = rest.get(..extra) else {
            continue;
        };
        if !tail.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()) {
            continue;
        }
        name[1..1 + extra].copy_from_slice(tail.as_bytes());
        let candidate = std::str::from_utf8(&name[..1 + extra]).expect("ascii mnemonic");
        if let Some(&c) = MNEMONICS.get(candidate) {
            *rest = &rest[extra..];
            return push(out, c);
        }
    }
    Err(EscapeError::UnknownEscape(first))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(raw: &str) -> String {
        decode(raw).unwrap()
    }

    #[test]
    fn test_plain_literal() {
        assert_eq!(ok(r#""hello""#), "hello");
        assert_eq!(ok(r#""""#), "");
    }

    #[test]
    fn test_single_char_escapes() {
        assert_eq!(ok(r#""a\tb\nc""#), "a\tb\nc");
        assert_eq!(ok(r#""\\\"\'""#), "\\\"'");
        assert_eq!(ok(r#""\a\v""#), "\u{7}\u{b}");
    }

    #[test]
    fn test_empty_escape_joins() {
        assert_eq!(ok(r#""a\&b""#), "ab");
        assert_eq!(ok(r#""\&""#), "");
    }

    #[test]
    fn test_numeric_escapes() {
        assert_eq!(ok(r#""\65""#), "A");
        assert_eq!(ok(r#""\x41""#), "A");
        assert_eq!(ok(r#""\o101""#), "A");
        assert_eq!(ok(r#""\x1F600""#), "\u{1F600}");
    }

    #[test]
    fn test_numeric_escape_consumes_all_digits() {
        // \499 is one escape naming code point 499, not \49 then "9".
        assert_eq!(ok(r#""\499""#), "\u{1F3}");
        // The empty escape stops digit consumption.
        assert_eq!(ok(r#""\52\&2""#), "42");
    }

    #[test]
    fn test_mnemonics() {
        assert_eq!(ok(r#""\NUL""#), "\u{0}");
        assert_eq!(ok(r#""\SOH""#), "\u{1}");
        assert_eq!(ok(r#""\SOx""#), "\u{e}x");
        assert_eq!(ok(r#""\DEL""#), "\u{7f}");
        assert_eq!(ok(r#""\DC1""#), "\u{11}");
    }

    #[test]
    fn test_caret_escapes() {
        assert_eq!(ok(r#""\^@""#), "\u{0}");
        assert_eq!(ok(r#""\^A""#), "\u{1}");
        assert_eq!(ok(r#""\^_""#), "\u{1f}");
        assert_eq!(decode(r#""\^a""#), Err(EscapeError::UnknownEscape('a')));
    }

    #[test]
    fn test_line_gap() {
        assert_eq!(ok("\"a\\ \n  \\b\""), "ab");
        assert_eq!(ok("\"a\\\n\\b\""), "ab");
        assert_eq!(
            decode("\"a\\   b\""),
            Err(EscapeError::UnterminatedGap)
        );
    }

    #[test]
    fn test_unknown_escape() {
        assert_eq!(decode(r#""\q""#), Err(EscapeError::UnknownEscape('q')));
        assert_eq!(decode(r#""\Q""#), Err(EscapeError::UnknownEscape('Q')));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(decode(r#""\x110000""#), Err(EscapeError::OutOfRange));
        assert_eq!(decode(r#""\xD800""#), Err(EscapeError::OutOfRange));
        assert_eq!(decode(r#""\1114112""#), Err(EscapeError::OutOfRange));
    }

    #[test]
    fn test_empty_numeric() {
        assert_eq!(decode(r#""\x""#), Err(EscapeError::EmptyNumeric));
        assert_eq!(decode(r#""\xg""#), Err(EscapeError::EmptyNumeric));
    }

    #[test]
    fn test_span_must_be_exact() {
        assert_eq!(decode(r#"abc"#), Err(EscapeError::MissingQuote));
        assert_eq!(decode(r#""abc"#), Err(EscapeError::Unterminated));
        assert_eq!(decode("\"a\"b"), Err(EscapeError::TrailingInput));
    }

    #[test]
    fn test_raw_control_rejected() {
        assert_eq!(decode("\"a\tb\""), Err(EscapeError::NonGraphic('\t')));
        assert_eq!(decode("\"a\nb\""), Err(EscapeError::NonGraphic('\n')));
    }
}
