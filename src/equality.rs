//! Structural equality and hashing over the value tree.
//!
//! Objects compare as maps: same key set, equal values, order ignored. The
//! one-sided containment check is still available as
//! [`JsonObject::is_subset_of`].
//!
//! Array and object hashes XOR their children's hashes over a fixed seed, so
//! equal values always hash equally while permuted arrays collide.

use crate::value::{JsonArray, JsonObject, JsonValue};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const SEED: u64 = 357;

/// Equality that tolerates absent operands: two absent values are equal, an
/// absent and a present one are not.
pub fn values_equal(a: Option<&JsonValue>, b: Option<&JsonValue>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

impl PartialEq for JsonValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsonValue::Null, JsonValue::Null) => true,
            (JsonValue::Boolean(a), JsonValue::Boolean(b)) => a == b,
            (JsonValue::Number(a), JsonValue::Number(b)) => a == b,
            (JsonValue::String(a), JsonValue::String(b)) => a == b,
            (JsonValue::Array(a), JsonValue::Array(b)) => a == b,
            (JsonValue::Object(a), JsonValue::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for JsonArray {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl PartialEq for JsonObject {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset_of(other)
    }
}

impl JsonObject {
    /// True when every pair of `self` appears with an equal value in `other`.
    /// Extra keys in `other` are ignored.
    pub fn is_subset_of(&self, other: &JsonObject) -> bool {
        self.pairs()
            .all(|(key, value)| other.try_get(key).map_or(false, |v| v == value))
    }
}

fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

impl Hash for JsonValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value_type().hash(state);
        match self {
            JsonValue::Null => {}
            JsonValue::Boolean(b) => b.hash(state),
            JsonValue::Number(n) => {
                // 0.0 == -0.0
                let n = if *n == 0.0 { 0.0 } else { *n };
                n.to_bits().hash(state);
            }
            JsonValue::String(s) => s.hash(state),
            JsonValue::Array(a) => a.hash(state),
            JsonValue::Object(o) => o.hash(state),
        }
    }
}

impl Hash for JsonArray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.iter().fold(SEED, |acc, v| acc ^ hash_of(v)));
    }
}

impl Hash for JsonObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(
            self.pairs()
                .fold(SEED, |acc, (k, v)| acc ^ hash_of(k) ^ hash_of(v)),
        );
    }
}
