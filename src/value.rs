use crate::coerce::Interpret;
use crate::error::{Error, Result};
use crate::parser::{DefaultParser, ParseObjectText};
use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::debug;

/// Tag naming the variant of a [`JsonValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonValueType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonValueType {
    pub fn name(self) -> &'static str {
        match self {
            JsonValueType::Null => "null",
            JsonValueType::Boolean => "boolean",
            JsonValueType::Number => "number",
            JsonValueType::String => "string",
            JsonValueType::Array => "array",
            JsonValueType::Object => "object",
        }
    }
}

impl std::fmt::Display for JsonValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An in-memory JSON value.
///
/// Scalars are immutable once built; arrays and objects own their children and
/// can be mutated in place. Equality and hashing are structural, see
/// [`crate::equality`].
#[derive(Debug, Clone)]
pub enum JsonValue {
    Null,
    Boolean(bool),
    /// Every host numeric type is stored as a double.
    Number(f64),
    /// Stored verbatim; escaping happens only when printing.
    String(String),
    Array(JsonArray),
    Object(JsonObject),
}

impl Default for JsonValue {
    fn default() -> Self {
        JsonValue::NULL
    }
}

impl JsonValue {
    pub const NULL: JsonValue = JsonValue::Null;

    pub fn array<I>(values: I) -> Self
    where
        I: IntoIterator<Item = JsonValue>,
    {
        JsonValue::Array(values.into_iter().collect())
    }

    /// Builds an object, keeping the first occurrence of a repeated key.
    pub fn object<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, JsonValue)>,
        K: Into<String>,
    {
        JsonValue::Object(JsonObject::from_pairs(pairs))
    }

    pub fn value_type(&self) -> JsonValueType {
        match self {
            JsonValue::Null => JsonValueType::Null,
            JsonValue::Boolean(_) => JsonValueType::Boolean,
            JsonValue::Number(_) => JsonValueType::Number,
            JsonValue::String(_) => JsonValueType::String,
            JsonValue::Array(_) => JsonValueType::Array,
            JsonValue::Object(_) => JsonValueType::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut JsonArray> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut JsonObject> {
        match self {
            JsonValue::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl From<JsonArray> for JsonValue {
    fn from(a: JsonArray) -> Self {
        JsonValue::Array(a)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(o: JsonObject) -> Self {
        JsonValue::Object(o)
    }
}

/// Ordered, index-addressable sequence of values.
#[derive(Debug, Clone, Default)]
pub struct JsonArray {
    values: Vec<JsonValue>,
}

impl JsonArray {
    pub fn new(values: Vec<JsonValue>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&JsonValue> {
        let len = self.len();
        self.values
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    pub fn set(&mut self, index: usize, value: JsonValue) -> Result<()> {
        let len = self.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    pub fn append(&mut self, value: JsonValue) {
        self.values.push(value);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
        self.values.iter()
    }

    /// Copies the elements out.
    pub fn values(&self) -> Vec<JsonValue> {
        self.values.clone()
    }
}

impl std::iter::FromIterator<JsonValue> for JsonArray {
    fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a JsonArray {
    type Item = &'a JsonValue;
    type IntoIter = std::slice::Iter<'a, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Mapping from unique string keys to values.
///
/// Pairs iterate (and print) in insertion order. Replacing the value of an
/// existing key keeps that key's position.
#[derive(Debug, Clone, Default)]
pub struct JsonObject {
    values: IndexMap<String, JsonValue>,
}

impl JsonObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an object from key/value pairs. When a key repeats, the first
    /// occurrence wins and later ones are dropped.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, JsonValue)>,
        K: Into<String>,
    {
        let mut values: IndexMap<String, JsonValue> = IndexMap::new();
        for (key, value) in pairs {
            match values.entry(key.into()) {
                Entry::Occupied(entry) => {
                    debug!(key = %entry.key(), "duplicate key dropped, first occurrence kept");
                }
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
        }
        Self { values }
    }

    /// Parses object-rooted JSON text with the built-in parser.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(&DefaultParser, text)
    }

    /// Parses object-rooted JSON text with any parser adapter. Nothing is
    /// built unless the whole text parses.
    pub fn parse_with<P>(parser: &P, text: &str) -> Result<Self>
    where
        P: ParseObjectText + ?Sized,
    {
        debug!(len = text.len(), "parsing object text");
        let tree = parser.parse_object_text(text)?;
        match tree.interpret()? {
            JsonValue::Object(object) => {
                debug!(keys = object.len(), "parsed object");
                Ok(object)
            }
            other => Err(Error::TypeMismatch {
                expected: JsonValueType::Object.name(),
                found: other.value_type().name(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Result<&JsonValue> {
        self.values.get(key).ok_or_else(|| Error::KeyNotFound {
            key: key.to_string(),
        })
    }

    pub fn try_get(&self, key: &str) -> Option<&JsonValue> {
        self.values.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut JsonValue> {
        self.values.get_mut(key).ok_or_else(|| Error::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// Upsert: replaces the value of an existing key, inserts otherwise.
    pub fn set<K: Into<String>>(&mut self, key: K, value: JsonValue) {
        self.values.insert(key.into(), value);
    }

    pub fn add<K: Into<String>>(&mut self, key: K, value: JsonValue) {
        self.set(key, value);
    }

    pub fn add_pair<K: Into<String>>(&mut self, (key, value): (K, JsonValue)) {
        self.set(key, value);
    }

    /// Copies the keys out, in iteration order.
    pub fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copies the whole mapping out.
    pub fn to_map(&self) -> IndexMap<String, JsonValue> {
        self.values.clone()
    }
}

impl<K: Into<String>> std::iter::FromIterator<(K, JsonValue)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (K, JsonValue)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
