//! Conversions between host scalars and [`JsonValue`], and the [`Interpret`]
//! dispatcher that builds values from host data or a parse tree.
//!
//! Going into a value never fails for scalars. Coming back out is explicit and
//! checked: numbers are rounded half-to-even and range-checked against the
//! target type, and there is no coercion across variants.

use crate::ast::Node;
use crate::error::{Error, Result};
use crate::value::{JsonArray, JsonObject, JsonValue, JsonValueType};
use indexmap::IndexMap;
use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::convert::TryFrom;
use std::hash::BuildHasher;

macro_rules! impl_from_number {
    ($($t:ty),*) => {$(
        impl From<$t> for JsonValue {
            fn from(n: $t) -> Self {
                JsonValue::Number(n as f64)
            }
        }
    )*};
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Boolean(b)
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(s)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::String(s.to_string())
    }
}

impl From<()> for JsonValue {
    fn from(_: ()) -> Self {
        JsonValue::Null
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(values: Vec<JsonValue>) -> Self {
        JsonValue::Array(JsonArray::new(values))
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(JsonValue::Null, Into::into)
    }
}

fn mismatch(expected: JsonValueType, found: &JsonValue) -> Error {
    Error::TypeMismatch {
        expected: expected.name(),
        found: found.value_type().name(),
    }
}

impl JsonValue {
    pub fn to_f64(&self) -> Result<f64> {
        self.as_f64()
            .ok_or_else(|| mismatch(JsonValueType::Number, self))
    }

    pub fn to_bool(&self) -> Result<bool> {
        self.as_bool()
            .ok_or_else(|| mismatch(JsonValueType::Boolean, self))
    }

    pub fn to_str(&self) -> Result<&str> {
        self.as_str()
            .ok_or_else(|| mismatch(JsonValueType::String, self))
    }

    /// Converts to any host scalar, e.g. `value.coerce::<u8>()`.
    pub fn coerce<'a, T>(&'a self) -> Result<T>
    where
        T: TryFrom<&'a JsonValue, Error = Error>,
    {
        T::try_from(self)
    }
}

macro_rules! impl_try_from_integer {
    ($($t:ty),*) => {$(
        impl TryFrom<&JsonValue> for $t {
            type Error = Error;

            fn try_from(value: &JsonValue) -> Result<Self> {
                let n = value.to_f64()?;
                let rounded = n.round_ties_even();
                // exclusive upper bound MAX + 1; 64-bit MAX already rounds up to it
                if rounded >= <$t>::MIN as f64 && rounded < <$t>::MAX as f64 + 1.0 {
                    Ok(rounded as $t)
                } else {
                    Err(Error::NumericOverflow {
                        value: n,
                        target: stringify!($t),
                    })
                }
            }
        }
    )*};
}

impl_try_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl TryFrom<&JsonValue> for f64 {
    type Error = Error;

    fn try_from(value: &JsonValue) -> Result<Self> {
        value.to_f64()
    }
}

impl TryFrom<&JsonValue> for f32 {
    type Error = Error;

    fn try_from(value: &JsonValue) -> Result<Self> {
        let n = value.to_f64()?;
        let narrowed = n as f32;
        if narrowed.is_infinite() && n.is_finite() {
            return Err(Error::NumericOverflow { value: n, target: "f32" });
        }
        Ok(narrowed)
    }
}

impl TryFrom<&JsonValue> for bool {
    type Error = Error;

    fn try_from(value: &JsonValue) -> Result<Self> {
        value.to_bool()
    }
}

impl TryFrom<&JsonValue> for String {
    type Error = Error;

    fn try_from(value: &JsonValue) -> Result<Self> {
        value.to_str().map(str::to_string)
    }
}

/// Maps host data, or a parse-tree node, onto the matching variant.
pub trait Interpret {
    fn interpret(self) -> Result<JsonValue>;
}

macro_rules! impl_interpret_via_from {
    ($($t:ty),*) => {$(
        impl Interpret for $t {
            fn interpret(self) -> Result<JsonValue> {
                Ok(JsonValue::from(self))
            }
        }
    )*};
}

impl_interpret_via_from!(
    (), bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String, &str,
    JsonArray, JsonObject
);

impl Interpret for JsonValue {
    fn interpret(self) -> Result<JsonValue> {
        Ok(self)
    }
}

impl<T: Interpret> Interpret for Option<T> {
    fn interpret(self) -> Result<JsonValue> {
        match self {
            Some(v) => v.interpret(),
            None => Ok(JsonValue::Null),
        }
    }
}

impl<T: Interpret> Interpret for Vec<T> {
    fn interpret(self) -> Result<JsonValue> {
        let values = self
            .into_iter()
            .map(Interpret::interpret)
            .collect::<Result<JsonArray>>()?;
        Ok(JsonValue::Array(values))
    }
}

fn interpret_pairs<I, K, V>(pairs: I) -> Result<JsonValue>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Interpret,
{
    let pairs = pairs
        .into_iter()
        .map(|(k, v)| -> Result<(String, JsonValue)> { Ok((k.into(), v.interpret()?)) })
        .collect::<Result<Vec<(String, JsonValue)>>>()?;
    Ok(JsonValue::Object(JsonObject::from_pairs(pairs)))
}

impl<K: Into<String>, V: Interpret, S: BuildHasher> Interpret for HashMap<K, V, S> {
    fn interpret(self) -> Result<JsonValue> {
        interpret_pairs(self)
    }
}

impl<K: Into<String>, V: Interpret> Interpret for BTreeMap<K, V> {
    fn interpret(self) -> Result<JsonValue> {
        interpret_pairs(self)
    }
}

impl<K: Into<String>, V: Interpret, S: BuildHasher> Interpret for IndexMap<K, V, S> {
    fn interpret(self) -> Result<JsonValue> {
        interpret_pairs(self)
    }
}

impl Interpret for Node {
    fn interpret(self) -> Result<JsonValue> {
        match self {
            Node::Null => Ok(JsonValue::Null),
            Node::Bool(b) => Ok(JsonValue::Boolean(b)),
            Node::Number(text) => {
                let n = text.parse::<f64>().map_err(|_| {
                    Error::UnsupportedValueInterpretation {
                        found: format!("number literal `{}`", text),
                    }
                })?;
                if !n.is_finite() {
                    return Err(Error::NumericOverflow { value: n, target: "f64" });
                }
                Ok(JsonValue::Number(n))
            }
            Node::String(s) => Ok(JsonValue::String(s)),
            Node::Array(nodes) => nodes.interpret(),
            Node::Object(pairs) => interpret_pairs(pairs.into_iter().map(|p| (p.key.0, p.value))),
        }
    }
}

macro_rules! try_downcast {
    ($value:expr, $($t:ty),*) => {$(
        if let Some(v) = $value.downcast_ref::<$t>() {
            return v.clone().interpret();
        }
    )*};
}

/// Interprets a value whose type is only known at runtime. Types outside the
/// supported set fail with [`Error::UnsupportedValueInterpretation`].
pub fn interpret_any(value: &dyn Any) -> Result<JsonValue> {
    try_downcast!(
        value, JsonValue, JsonArray, JsonObject, Node, (), bool, i8, i16, i32, i64, isize, u8,
        u16, u32, u64, usize, f32, f64, String, &'static str, Option<JsonValue>,
        Vec<JsonValue>, HashMap<String, JsonValue>, BTreeMap<String, JsonValue>,
        IndexMap<String, JsonValue>
    );
    Err(Error::UnsupportedValueInterpretation {
        found: format!("a value of unrecognized type ({:?})", value.type_id()),
    })
}
