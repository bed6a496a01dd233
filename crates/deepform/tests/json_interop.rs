#![cfg(feature = "json")]
use deepform::{Blob, EntryValue, Options, parse, parse_into};
use serde::Deserialize;
use serde_json::json;

#[test]
fn non_finite_numbers_become_null() {
    let v = parse([("+a", "xyz"), ("+b", "Infinity")], &Options::default());
    assert_eq!(v.into_json(), json!({"a": null, "b": null}));
}

#[test]
fn blobs_become_empty_objects() {
    let entries = vec![("doc".to_string(), EntryValue::from(Blob::new(b"bytes".to_vec())))];
    let v = parse(entries, &Options::default());
    assert_eq!(v.into_json(), json!({"doc": {}}));
}

#[test]
fn whole_numbers_render_without_a_fraction() {
    let v = parse([("+a", "2"), ("+b", "2.5")], &Options::default());
    assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"a":2,"b":2.5}"#);
}

#[test]
fn serialize_agrees_with_into_json() {
    let v = parse(
        [("a", "1"), ("+b.c", "2"), ("&b.d", "0"), ("e[]", "x")],
        &Options::default(),
    );
    assert_eq!(serde_json::to_value(&v).unwrap(), v.into_json());
}

#[test]
fn field_order_is_preserved() {
    let v = parse([("z", "1"), ("a", "2"), ("m.q", "3"), ("m.b", "4")], &Options::default());
    let text = serde_json::to_string(&v.into_json()).unwrap();
    assert_eq!(text, r#"{"z":"1","a":"2","m":{"q":"3","b":"4"}}"#);
}

#[derive(Debug, Deserialize, PartialEq)]
struct Signup {
    username: String,
    age: f64,
    newsletter: bool,
    tags: Vec<String>,
}

#[test]
fn typed_extraction() {
    let signup: Signup = parse_into(
        [
            ("username", "alice"),
            ("+age", "33"),
            ("&newsletter", "on"),
            ("tags[]", "rust"),
            ("tags[]", "forms"),
        ],
        &Options::default(),
    )
    .unwrap();
    assert_eq!(
        signup,
        Signup {
            username: "alice".to_string(),
            age: 33.0,
            newsletter: true,
            tags: vec!["rust".to_string(), "forms".to_string()],
        }
    );
}

#[test]
fn typed_extraction_surfaces_shape_errors() {
    let result: deepform::Result<Signup> = parse_into([("username", "alice")], &Options::default());
    assert!(result.is_err());
}
