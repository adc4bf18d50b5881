//! Numeric literal values.
//!
//! The scanner matches the shape of a numeric lexeme (sign, base prefix,
//! digits); this module turns the matched text into a structured value.
//! [`parse`] expects its input upper-cased, which normalizes hex digits,
//! base prefixes, and the exponent marker in one step, so `0xff` and `0XFF`
//! produce identical values.

use std::num::IntErrorKind;
use thiserror::Error;

/// A parsed numeric literal.
///
/// Integers keep the radix they were written in so a later renderer can
/// reproduce the author's notation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// An integer literal, in radix 2, 8, 10, or 16.
    Integer {
        /// The radix the literal was written in.
        radix: u32,
        /// The literal's value, sign applied.
        value: i128,
    },

    /// A decimal literal with a fractional part or exponent.
    Real(f64),
}

/// Failure to turn a numeric lexeme into a value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NumberError {
    /// The value does not fit the integer representation.
    #[error("numeric literal out of range")]
    OutOfRange,

    /// The text is not a numeric lexeme. The scanner never produces such
    /// input; this arises only when calling [`parse`] directly.
    #[error("malformed numeric literal {0:?}")]
    Malformed(String),
}

/// Parses an upper-cased numeric lexeme.
///
/// # Example
///
/// ```
/// use cove_lex::number::{parse, Number};
///
/// assert_eq!(parse("0XFF"), Ok(Number::Integer { radix: 16, value: 255 }));
/// assert_eq!(parse("-12"), Ok(Number::Integer { radix: 10, value: -12 }));
/// assert_eq!(parse("2.5E-3"), Ok(Number::Real(2.5e-3)));
/// ```
pub fn parse(text: &str) -> Result<Number, NumberError> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    if let Some(hex) = digits.strip_prefix("0X") {
        return integer(hex, 16, negative, text);
    }
    if let Some(oct) = digits.strip_prefix("0O") {
        return integer(oct, 8, negative, text);
    }
    if let Some(bin) = digits.strip_prefix("0B") {
        return integer(bin, 2, negative, text);
    }

    if digits.contains(['.', 'E']) {
        return match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Number::Real(value)),
            Ok(_) => Err(NumberError::OutOfRange),
            Err(_) => Err(NumberError::Malformed(text.to_owned())),
        };
    }

    integer(digits, 10, negative, text)
}

fn integer(digits: &str, radix: u32, negative: bool, text: &str) -> Result<Number, NumberError> {
    match i128::from_str_radix(digits, radix) {
        Ok(value) => Ok(Number::Integer {
            radix,
            value: if negative { -value } else { value },
        }),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(NumberError::OutOfRange),
            _ => Err(NumberError::Malformed(text.to_owned())),
        },
    }
}
