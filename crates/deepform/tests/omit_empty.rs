#![cfg(feature = "json")]
use deepform::{Options, parse};
use serde_json::json;

const OMIT: Options = Options { omit_empty_strings: true };

#[test]
fn empty_string_values_are_dropped() {
    let v = parse([("a", "1"), ("b", ""), ("c", "3")], &OMIT);
    assert_eq!(v.into_json(), json!({"a": "1", "c": "3"}));
}

#[test]
fn kept_by_default() {
    let v = parse([("a", "1"), ("b", "")], &Options::default());
    assert_eq!(v.into_json(), json!({"a": "1", "b": ""}));
}

#[test]
fn falsy_looking_values_are_retained() {
    let v = parse([("a", "0"), ("b", "false"), ("c", " ")], &OMIT);
    assert_eq!(v.into_json(), json!({"a": "0", "b": "false", "c": " "}));
}

#[test]
fn dropped_entries_claim_no_array_slot() {
    let v = parse([("a[]", ""), ("a[]", "x"), ("a[]", "")], &OMIT);
    assert_eq!(v.into_json(), json!({"a": ["x"]}));
}

#[test]
fn dropped_before_any_cast_applies() {
    // without the option, an empty numeric cast would coerce to 0
    let v = parse([("+a", "")], &OMIT);
    assert_eq!(v.into_json(), json!({}));

    let v = parse([("+a", "")], &Options::default());
    assert_eq!(v.into_json(), json!({"a": 0}));
}
