use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};

use quickcheck_macros::quickcheck;
use rstest::rstest;

use crate::{TokenValue, tokenize};

fn values(text: &str) -> Vec<TokenValue> {
    tokenize(text)
        .unwrap()
        .into_iter()
        .map(|t| t.value)
        .collect()
}

#[test]
fn punctuation_with_offsets() {
    let tokens = tokenize("{}[]:,").unwrap();
    let expected = [
        (TokenValue::BraceOpen, 0),
        (TokenValue::BraceClose, 1),
        (TokenValue::BracketOpen, 2),
        (TokenValue::BracketClose, 3),
        (TokenValue::Colon, 4),
        (TokenValue::Comma, 5),
    ];
    assert_eq!(tokens.len(), expected.len());
    for (token, (value, offset)) in tokens.into_iter().zip(expected) {
        assert_eq!(token.value, value);
        assert_eq!(token.offset, offset);
    }
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(
        values(" \t\r\n{ }\n"),
        vec![TokenValue::BraceOpen, TokenValue::BraceClose]
    );
    assert_eq!(values("   "), vec![]);
}

#[rstest]
#[case("true", TokenValue::Boolean(true))]
#[case("false", TokenValue::Boolean(false))]
#[case("null", TokenValue::Null)]
fn bare_keywords(#[case] text: &str, #[case] expected: TokenValue) {
    assert_eq!(values(text), vec![expected]);
}

#[rstest]
#[case(r#""true""#, "true")]
#[case(r#""false""#, "false")]
#[case(r#""null""#, "null")]
fn quoted_keywords_stay_strings(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(values(text), vec![TokenValue::String(expected.to_string())]);
}

#[rstest]
#[case("0", 0.0)]
#[case("-1", -1.0)]
#[case("10", 10.0)]
#[case("3.14", 3.14)]
#[case("-0.5", -0.5)]
#[case("1e3", 1000.0)]
#[case("1E+3", 1000.0)]
#[case("2.5e-2", 0.025)]
fn numbers_decode_to_their_value(#[case] text: &str, #[case] expected: f64) {
    assert_eq!(values(text), vec![TokenValue::Number(expected)]);
}

#[test]
fn number_terminator_is_redispatched() {
    assert_eq!(
        values("[1,25]"),
        vec![
            TokenValue::BracketOpen,
            TokenValue::Number(1.0),
            TokenValue::Comma,
            TokenValue::Number(25.0),
            TokenValue::BracketClose,
        ]
    );
}

#[rstest]
#[case(r#""""#, "")]
#[case(r#""hello""#, "hello")]
#[case(r#""a\"b""#, "a\"b")]
#[case(r#""c\\""#, "c\\")]
#[case(r#""a\\\"b""#, "a\\\"b")]
#[case(r#""\/\b\f\n\r\t""#, "/\u{0008}\u{000C}\n\r\t")]
#[case(r#""\u0041""#, "A")]
#[case(r#""\u00E9""#, "é")]
#[case(r#""\uD83D\uDE00""#, "😀")]
#[case(r#""é""#, "é")]
#[case(r#""😀""#, "😀")]
fn string_escapes_are_decoded(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(values(text), vec![TokenValue::String(expected.to_string())]);
}

#[test]
fn string_token_offset_is_the_opening_quote() {
    let tokens = tokenize(r#"  "ab""#).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].offset, 2);
}

#[quickcheck]
fn formatted_finite_numbers_tokenize_back(value: f64) -> bool {
    if !value.is_finite() {
        return true;
    }
    let text = value.to_string();
    match tokenize(&text).as_deref() {
        Ok([token]) => token.value == TokenValue::Number(value),
        _ => false,
    }
}

#[quickcheck]
fn escaped_strings_tokenize_back(s: String) -> bool {
    let text = crate::Value::String(s.clone()).to_string();
    match tokenize(&text).as_deref() {
        Ok([token]) => token.value == TokenValue::String(s),
        _ => false,
    }
}
