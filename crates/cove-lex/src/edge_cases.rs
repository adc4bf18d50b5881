//! Edge case tests for cove-lex

use crate::number::Number;
use crate::{lex, LexError, Token};
use cove_util::Symbol;
use proptest::prelude::*;

fn values(source: &str) -> Vec<Token> {
    lex(source).into_iter().map(|t| t.value).collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert_eq!(values(""), vec![Token::Eof]);
}

#[test]
fn test_edge_whitespace_only() {
    assert_eq!(values("   \n\t  \n  "), vec![Token::Eof]);
}

#[test]
fn test_edge_comments_only() {
    assert_eq!(values("-- line\n{- block -}\n-- another"), vec![Token::Eof]);
}

#[test]
fn test_edge_single_char_atom() {
    assert_eq!(values("x")[0], Token::Atom(Symbol::intern("x")));
}

#[test]
fn test_edge_long_atom() {
    let name = "a".repeat(10_000);
    assert_eq!(values(&name)[0], Token::Atom(Symbol::intern(&name)));
}

#[test]
fn test_edge_underscore_atom() {
    assert_eq!(values("_")[0], Token::Atom(Symbol::intern("_")));
}

#[test]
fn test_edge_empty_string_literal() {
    assert_eq!(values("\"\"")[0], Token::String(String::new()));
}

#[test]
fn test_edge_adjacent_literals() {
    assert_eq!(
        values("\"a\"\"b\""),
        vec![
            Token::String("a".into()),
            Token::String("b".into()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_edge_deeply_nested_comments() {
    let mut source = String::new();
    for _ in 0..64 {
        source.push_str("{- ");
    }
    for _ in 0..64 {
        source.push_str("-} ");
    }
    source.push('x');
    assert_eq!(
        values(&source),
        vec![Token::Atom(Symbol::intern("x")), Token::Eof]
    );
}

#[test]
fn test_edge_nested_lists() {
    let tokens = values("[[[]]]");
    assert_eq!(
        tokens.iter().filter(|t| **t == Token::OpenList).count(),
        3
    );
    assert_eq!(
        tokens.iter().filter(|t| **t == Token::CloseList).count(),
        3
    );
}

#[test]
fn test_edge_zero_variants() {
    assert_eq!(
        values("0 0.0"),
        vec![
            Token::Number(Number::Integer { radix: 10, value: 0 }),
            Token::Number(Number::Real(0.0)),
            Token::Eof,
        ]
    );
}

#[test]
fn test_edge_max_i128() {
    let tokens = values("170141183460469231731687303715884105727");
    assert_eq!(
        tokens[0],
        Token::Number(Number::Integer {
            radix: 10,
            value: i128::MAX
        })
    );
}

#[test]
fn test_edge_leading_zeros() {
    assert_eq!(
        values("007")[0],
        Token::Number(Number::Integer { radix: 10, value: 7 })
    );
}

#[test]
fn test_edge_crlf_line_endings() {
    let tokens = lex("a\r\nb");
    assert_eq!(tokens[1].position.line, 2);
    assert_eq!(tokens[1].position.column, 1);
}

#[test]
fn test_edge_unicode_atoms_and_strings() {
    assert_eq!(
        values("größe \"héllo\""),
        vec![
            Token::Atom(Symbol::intern("größe")),
            Token::String("héllo".into()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_edge_section_like_but_comment() {
    // `--` wins over an atom's section probe reaching a colon later.
    assert_eq!(
        values("a -- :\nb"),
        vec![
            Token::Atom(Symbol::intern("a")),
            Token::Atom(Symbol::intern("b")),
            Token::Eof,
        ]
    );
}

// ==================== ERROR CASES ====================

#[test]
fn test_err_stray_colon() {
    assert_eq!(values(":")[0], Token::Error(LexError::NoMatch(':')));
}

#[test]
fn test_err_unterminated_everywhere() {
    assert_eq!(values("\"x")[0], Token::Error(LexError::UntermString));
    assert_eq!(values("{- x")[0], Token::Error(LexError::UntermComment));
    assert_eq!(values("{- \"x")[0], Token::Error(LexError::UntermComment));
}

#[test]
fn test_err_several_no_match_in_a_row() {
    let tokens = values("\u{1}\u{2}\u{3}");
    assert_eq!(
        tokens,
        vec![
            Token::Error(LexError::NoMatch('\u{1}')),
            Token::Error(LexError::NoMatch('\u{2}')),
            Token::Error(LexError::NoMatch('\u{3}')),
            Token::Eof,
        ]
    );
}

#[test]
fn test_err_raw_tab_in_string() {
    let tokens = values("\"a\tb\"");
    assert!(matches!(tokens[0], Token::Error(LexError::BadEscape(_))));
}

#[test]
fn test_err_mixed_valid_invalid() {
    let tokens = values("port \u{5} 80");
    assert_eq!(tokens[0], Token::Atom(Symbol::intern("port")));
    assert_eq!(tokens[1], Token::Error(LexError::NoMatch('\u{5}')));
    assert_eq!(
        tokens[2],
        Token::Number(Number::Integer {
            radix: 10,
            value: 80
        })
    );
}

// ==================== STREAM PROPERTIES ====================

proptest! {
    #[test]
    fn prop_exactly_one_eof_always_last(source in ".*") {
        let tokens = lex(&source);
        let eof_count = tokens
            .iter()
            .filter(|t| t.value == Token::Eof)
            .count();
        prop_assert_eq!(eof_count, 1);
        prop_assert!(matches!(tokens.last().unwrap().value, Token::Eof));
    }

    #[test]
    fn prop_positions_never_decrease(source in ".*") {
        let tokens = lex(&source);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].position.index <= pair[1].position.index);
        }
    }

    #[test]
    fn prop_lexing_is_deterministic(source in ".*") {
        prop_assert_eq!(lex(&source), lex(&source));
    }

    #[test]
    fn prop_clean_text_positions_are_dense(words in "[a-z]{1,8}( [a-z]{1,8}){0,6}") {
        // For comment- and string-free single-line input, token start
        // indices are exactly the character offsets of the words.
        let tokens = lex(&words);
        let mut expected = Vec::new();
        let mut offset = 0;
        for word in words.split(' ') {
            expected.push(offset);
            offset += word.chars().count() + 1;
        }
        expected.push(words.chars().count());
        let indices: Vec<usize> = tokens.iter().map(|t| t.position.index).collect();
        prop_assert_eq!(indices, expected);
    }
}
