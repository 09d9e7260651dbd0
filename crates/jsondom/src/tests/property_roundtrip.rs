use alloc::{string::ToString, vec};

use quickcheck::QuickCheck;

use crate::{Value, parse_str};

/// Property: rendering any tree of finite numbers to text and re-parsing it
/// yields an equal tree. Scalars are wrapped in a one-element array because
/// the grammar only admits containers at the root.
#[test]
fn render_then_parse_is_identity() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value) -> bool {
        let doc = match value {
            v @ (Value::Object(_) | Value::Array(_)) => v,
            v => Value::Array(vec![v]),
        };
        let text = doc.to_string();
        parse_str(&text) == Ok(doc)
    }

    let tests = if is_ci::cached() { 10_000 } else { 1_000 };

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Value) -> bool);
}

#[test]
fn render_then_parse_fixed_document() {
    let text = r#"{"a":1,"b":[1,2,[3,4]],"c":{"d":"e\\f","g":null},"h":true}"#;
    let tree = parse_str(text).unwrap();
    assert_eq!(tree.to_string(), text);
    assert_eq!(parse_str(&tree.to_string()), Ok(tree));
}
