use alloc::{string::ToString, vec};

use crate::{Map, Value, parse, parse_str, tokenize};

fn obj<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Object(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    )
}

#[test]
fn nested_arrays_inside_objects() {
    let tree = parse_str(r#"{"a":1,"b":[1,2,[3,4]]}"#).unwrap();
    assert_eq!(
        tree,
        obj([
            ("a", Value::Number(1.0)),
            (
                "b",
                Value::Array(vec![
                    Value::Number(1.0),
                    Value::Number(2.0),
                    Value::Array(vec![Value::Number(3.0), Value::Number(4.0)]),
                ])
            ),
        ])
    );
}

#[test]
fn empty_containers() {
    assert_eq!(parse_str("{}").unwrap(), Value::Object(Map::new()));
    assert_eq!(parse_str("[]").unwrap(), Value::Array(vec![]));
    assert_eq!(
        parse_str("[{}, []]").unwrap(),
        Value::Array(vec![Value::Object(Map::new()), Value::Array(vec![])])
    );
}

#[test]
fn quoted_keyword_is_a_string_value() {
    assert_eq!(
        parse_str(r#"{"a":"true"}"#).unwrap(),
        obj([("a", Value::from("true"))])
    );
}

#[test]
fn every_scalar_kind() {
    assert_eq!(
        parse_str(r#"{"s":"x","n":-2.5,"t":true,"f":false,"z":null}"#).unwrap(),
        obj([
            ("s", Value::from("x")),
            ("n", Value::Number(-2.5)),
            ("t", Value::Boolean(true)),
            ("f", Value::Boolean(false)),
            ("z", Value::Null),
        ])
    );
}

#[test]
fn deep_array_nesting() {
    let mut tree = parse_str("[[[[[[]]]]]]").unwrap();
    let mut depth = 0;
    loop {
        let Value::Array(mut items) = tree else {
            panic!("expected an array at depth {depth}");
        };
        depth += 1;
        match items.pop() {
            Some(inner) => {
                assert!(items.is_empty());
                tree = inner;
            }
            None => break,
        }
    }
    assert_eq!(depth, 6);
}

#[test]
fn objects_nested_in_arrays_nested_in_objects() {
    let tree = parse_str(r#"{"a":[{"b":[[1]]}]}"#).unwrap();
    assert_eq!(
        tree,
        obj([(
            "a",
            Value::Array(vec![obj([(
                "b",
                Value::Array(vec![Value::Array(vec![Value::Number(1.0)])])
            )])])
        )])
    );
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let tree = parse_str("\n\t {\"a\" : [ 1 , 2 ] }\r\n").unwrap();
    assert_eq!(
        tree,
        obj([(
            "a",
            Value::Array(vec![Value::Number(1.0), Value::Number(2.0)])
        )])
    );
}

#[test]
fn duplicate_keys_last_write_wins() {
    assert_eq!(
        parse_str(r#"{"a":1,"a":2}"#).unwrap(),
        obj([("a", Value::Number(2.0))])
    );
}

#[test]
fn staged_pipeline_matches_the_one_call_surface() {
    let text = r#"{"a": [true, null, "x"]}"#;
    let tokens = tokenize(text).unwrap();
    assert_eq!(parse(tokens).unwrap(), parse_str(text).unwrap());
}

#[test]
fn from_str_parses_documents() {
    let tree: Value = r#"[1, 2]"#.parse().unwrap();
    assert_eq!(
        tree,
        Value::Array(vec![Value::Number(1.0), Value::Number(2.0)])
    );
}
