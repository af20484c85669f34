use dynjson::{values_equal, DynamicMembers, Error, JsonArray, JsonObject, JsonValue};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash(v: &JsonValue) -> u64 {
    let mut h = DefaultHasher::new();
    v.hash(&mut h);
    h.finish()
}

fn num(n: f64) -> JsonValue {
    JsonValue::Number(n)
}

#[test]
fn round_trip_through_text() {
    let text = r#"{"id": 7, "tags": ["a", "b"], "owner": {"name": "x", "admin": false}, "note": null}"#;
    let parsed = JsonObject::parse(text).unwrap();
    let printed = parsed.make_print_value();
    assert_eq!(
        printed,
        r#"{"id":7,"tags":["a","b"],"owner":{"name":"x","admin":false},"note":null}"#
    );
    let reparsed = JsonObject::parse(&printed).unwrap();
    assert_eq!(reparsed, parsed);
    assert_eq!(reparsed.make_print_value(), printed);
}

#[test]
fn round_trip_with_escapes() {
    let mut o = JsonObject::new();
    o.set("quote\"key", JsonValue::from("back\\slash\nnew\u{1}line"));
    let reparsed = JsonObject::parse(&o.make_print_value()).unwrap();
    assert_eq!(reparsed, o);
}

#[test]
fn scalar_reflexivity() {
    assert_eq!(JsonValue::Boolean(true), JsonValue::Boolean(true));
    assert_eq!(JsonValue::from(3), JsonValue::from(3.0));
    assert_eq!(JsonValue::from("x"), JsonValue::from("x"));
}

#[test]
fn array_order_sensitivity() {
    let a12 = JsonValue::array(vec![num(1.0), num(2.0)]);
    assert_ne!(a12, JsonValue::array(vec![num(2.0), num(1.0)]));
    assert_eq!(a12, JsonValue::array(vec![num(1.0), num(2.0)]));
}

#[test]
fn object_equality_requires_same_keys() {
    let ab = JsonValue::object(vec![("a", num(1.0)), ("b", num(2.0))]);
    let a = JsonValue::object(vec![("a", num(1.0))]);
    assert_ne!(ab, a);
    assert_ne!(a, ab);
    match (&a, &ab) {
        (JsonValue::Object(small), JsonValue::Object(big)) => {
            assert!(small.is_subset_of(big));
            assert!(!big.is_subset_of(small));
        }
        _ => unreachable!("not objects"),
    }
}

#[test]
fn duplicate_keys_first_wins_then_upsert() {
    let mut o = JsonObject::from_pairs(vec![("k", num(1.0)), ("k", num(2.0))]);
    assert_eq!(o.get("k").unwrap(), &num(1.0));
    o.set("k", num(3.0));
    assert_eq!(o.get("k").unwrap(), &num(3.0));
    o.try_set_member("k", 4).unwrap();
    assert_eq!(o.try_get_member("k"), Some(&num(4.0)));
}

#[test]
fn equal_values_share_hashes() {
    let a = JsonObject::parse(r#"{"x": [1, {"y": true}], "z": "s"}"#).unwrap();
    let b = JsonObject::parse(r#"{"z": "s", "x": [1.0, {"y": true}]}"#).unwrap();
    let (a, b) = (JsonValue::from(a), JsonValue::from(b));
    assert_eq!(a, b);
    assert_eq!(hash(&a), hash(&b));
}

#[test]
fn coercion_boundary() {
    assert!(matches!(
        JsonValue::from(300).coerce::<u8>(),
        Err(Error::NumericOverflow { target: "u8", .. })
    ));
    assert_eq!(JsonValue::from(200).coerce::<u8>(), Ok(200));
}

#[test]
fn absent_operands() {
    let v = JsonValue::NULL;
    assert!(values_equal(None, None));
    assert!(values_equal(Some(&v), Some(&JsonValue::Null)));
    assert!(!values_equal(Some(&v), None));
}

#[test]
fn array_mutation() {
    let mut a: JsonArray = vec![num(1.0)].into_iter().collect();
    a.append(num(2.0));
    a.set(0, JsonValue::from("first")).unwrap();
    assert_eq!(a.to_string(), r#"["first",2]"#);
    assert_eq!(
        a.get(2).unwrap_err(),
        Error::IndexOutOfRange { index: 2, len: 2 }
    );
}

#[test]
fn failed_parse_builds_nothing() {
    for text in &[r#"{"a": [1, 2}"#, r#"{"a": tru}"#, "", "[]", r#"{"a": 1"#] {
        assert!(matches!(JsonObject::parse(text), Err(Error::Syntax(_))), "{}", text);
    }
}

#[test]
fn deep_nesting_is_a_syntax_error() {
    let text = format!("{{\"a\":{}{}}}", "[".repeat(200_000), "]".repeat(200_000));
    assert!(matches!(JsonObject::parse(&text), Err(Error::Syntax(_))));
}
