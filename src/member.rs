//! Property-style field access on objects.
//!
//! A missing field on read is reported as `None`, not as an error. Writes are
//! upserts and accept anything [`Interpret`] understands, so
//! `obj.try_set_member("n", 3u8)` and `obj.set("n", JsonValue::from(3u8))` end
//! in the same state.

use crate::coerce::{interpret_any, Interpret};
use crate::error::{Error, Result};
use crate::value::{JsonObject, JsonValue, JsonValueType};
use std::any::Any;

pub trait DynamicMembers {
    fn try_get_member(&self, name: &str) -> Option<&JsonValue>;

    fn try_set_member<V: Interpret>(&mut self, name: &str, value: V) -> Result<()>;

    /// Like [`DynamicMembers::try_set_member`] for values typed only at runtime.
    fn try_set_member_any(&mut self, name: &str, value: &dyn Any) -> Result<()>;
}

impl DynamicMembers for JsonObject {
    fn try_get_member(&self, name: &str) -> Option<&JsonValue> {
        self.try_get(name)
    }

    fn try_set_member<V: Interpret>(&mut self, name: &str, value: V) -> Result<()> {
        self.set(name, value.interpret()?);
        Ok(())
    }

    fn try_set_member_any(&mut self, name: &str, value: &dyn Any) -> Result<()> {
        self.set(name, interpret_any(value)?);
        Ok(())
    }
}

impl DynamicMembers for JsonValue {
    fn try_get_member(&self, name: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|o| o.try_get_member(name))
    }

    fn try_set_member<V: Interpret>(&mut self, name: &str, value: V) -> Result<()> {
        self.object_for_member()?.try_set_member(name, value)
    }

    fn try_set_member_any(&mut self, name: &str, value: &dyn Any) -> Result<()> {
        self.object_for_member()?.try_set_member_any(name, value)
    }
}

impl JsonValue {
    fn object_for_member(&mut self) -> Result<&mut JsonObject> {
        let found = self.value_type().name();
        self.as_object_mut().ok_or(Error::TypeMismatch {
            expected: JsonValueType::Object.name(),
            found,
        })
    }
}
