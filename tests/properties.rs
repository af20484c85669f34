//! Property-based tests for equality, hashing and printing.

use dynjson::{JsonObject, JsonValue};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash(v: &JsonValue) -> u64 {
    let mut h = DefaultHasher::new();
    v.hash(&mut h);
    h.finish()
}

/// Strategy for scalar values; strings use printable ASCII, quotes and
/// backslashes included.
fn leaf_strategy() -> impl Strategy<Value = JsonValue> {
    prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Boolean),
        any::<i32>().prop_map(JsonValue::from),
        (-1e9f64..1e9f64).prop_map(JsonValue::Number),
        "[ -~]{0,8}".prop_map(JsonValue::String),
    ]
}

/// Strategy for arbitrary value trees with unique object keys.
fn value_strategy() -> impl Strategy<Value = JsonValue> {
    leaf_strategy().prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(|values| JsonValue::array(values)),
            prop::collection::btree_map("[ -~]{0,6}", inner, 0..6)
                .prop_map(|pairs| JsonValue::object(pairs)),
        ]
    })
}

fn object_strategy() -> impl Strategy<Value = JsonObject> {
    prop::collection::btree_map("[ -~]{0,6}", value_strategy(), 0..8)
        .prop_map(|pairs| JsonObject::from_pairs(pairs))
}

proptest! {
    /// Property: a value equals its clone and hashes the same.
    #[test]
    fn clone_is_equal_with_same_hash(v in value_strategy()) {
        let copy = v.clone();
        prop_assert_eq!(&v, &copy);
        prop_assert_eq!(hash(&v), hash(&copy));
    }

    /// Property: object pair order affects neither equality nor hash.
    #[test]
    fn reversed_object_is_equal_with_same_hash(o in object_strategy()) {
        let reversed = JsonObject::from_pairs(
            o.pairs().map(|(k, v)| (k.to_string(), v.clone())).collect::<Vec<_>>().into_iter().rev(),
        );
        let (a, b) = (JsonValue::from(o), JsonValue::from(reversed));
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash(&a), hash(&b));
    }

    /// Property: whenever two arbitrary values are equal, their hashes agree.
    #[test]
    fn equality_implies_equal_hash(a in value_strategy(), b in value_strategy()) {
        if a == b {
            prop_assert_eq!(hash(&a), hash(&b));
        }
        prop_assert_eq!(a == b, b == a);
    }

    /// Property: printing the same value twice gives identical text.
    #[test]
    fn printing_is_idempotent(v in value_strategy()) {
        prop_assert_eq!(v.make_print_value(), v.make_print_value());
    }

    /// Property: parsing printed text gives back an equal object that prints
    /// identically.
    #[test]
    fn print_parse_round_trip(o in object_strategy()) {
        let text = o.make_print_value();
        let parsed = JsonObject::parse(&text).unwrap();
        prop_assert_eq!(&parsed, &o);
        prop_assert_eq!(parsed.make_print_value(), text);
    }
}
