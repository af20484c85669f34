//! In-memory JSON values: a tagged value model with structural equality and
//! hashing, compact canonical printing, checked scalar conversions and
//! property-style access on objects.
//!
//! ```
//! use dynjson::{DynamicMembers, JsonObject, JsonValue};
//!
//! let mut doc = JsonObject::parse(r#"{"name": "box", "size": 3}"#)?;
//! assert_eq!(doc.get("size")?.coerce::<u8>()?, 3);
//!
//! doc.try_set_member("tags", vec!["a", "b"])?;
//! assert_eq!(doc.make_print_value(), r#"{"name":"box","size":3,"tags":["a","b"]}"#);
//! assert_eq!(doc.try_get_member("missing"), None);
//! # Ok::<(), dynjson::Error>(())
//! ```

pub mod ast;
pub mod coerce;
pub mod equality;
pub mod error;
pub mod member;
pub mod parser;
pub mod printer;
pub mod value;

pub use coerce::{interpret_any, Interpret};
pub use equality::values_equal;
pub use error::{Error, Result, SyntaxError};
pub use member::DynamicMembers;
pub use parser::{DefaultParser, ParseObjectText, MAX_NESTING_DEPTH};
pub use printer::Printer;
pub use value::{JsonArray, JsonObject, JsonValue, JsonValueType};
