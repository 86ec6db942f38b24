//! Contracts on JSON values.
//!
//! Structured-document assertions over `serde_json::Value`. Requires the
//! `json` feature.

use serde_json::Value;

use super::engine::{Contract, Failure};
use crate::error::ErrorCode;

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Contract<Value> {
    /// Assert the value is a JSON object.
    pub fn is_object(self) -> Self {
        self.verify(ErrorCode::contract("json", "is_object"), |subject| {
            if subject.is_object() {
                None
            } else {
                Some(
                    Failure::new(format!(
                        "expected a JSON object, but found {}",
                        kind(subject)
                    ))
                    .with("actual", kind(subject)),
                )
            }
        })
    }

    /// Assert the value is a JSON array.
    pub fn is_array(self) -> Self {
        self.verify(ErrorCode::contract("json", "is_array"), |subject| {
            if subject.is_array() {
                None
            } else {
                Some(
                    Failure::new(format!(
                        "expected a JSON array, but found {}",
                        kind(subject)
                    ))
                    .with("actual", kind(subject)),
                )
            }
        })
    }

    /// Assert the value is an object with the named field.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use affirm::expect;
    /// use serde_json::json;
    ///
    /// expect(json!({"name": "affirm"})).has_field("name");
    /// ```
    pub fn has_field(self, name: &str) -> Self {
        self.verify(ErrorCode::contract("json", "has_field"), |subject| {
            if subject.get(name).is_some() {
                None
            } else {
                Some(
                    Failure::new(format!(
                        "expected value to have field {name:?}, but it is {} without one",
                        kind(subject)
                    ))
                    .with("field", name),
                )
            }
        })
    }

    /// Assert the value has no field of the given name.
    pub fn lacks_field(self, name: &str) -> Self {
        self.verify(ErrorCode::contract("json", "lacks_field"), |subject| {
            match subject.get(name) {
                None => None,
                Some(value) => Some(
                    Failure::new(format!(
                        "expected value to lack field {name:?}, but found it set to {value}"
                    ))
                    .with("field", name)
                    .with("actual", value.to_string()),
                ),
            }
        })
    }

    /// Assert the named field holds exactly the expected value.
    pub fn field_equals(self, name: &str, expected: &Value) -> Self {
        self.verify(ErrorCode::contract("json", "field_equals"), |subject| {
            match subject.get(name) {
                Some(value) if value == expected => None,
                Some(value) => Some(
                    Failure::new(format!(
                        "expected field {name:?} to equal {expected}, but found {value}"
                    ))
                    .with("field", name)
                    .with("expected", expected.to_string())
                    .with("actual", value.to_string()),
                ),
                None => Some(
                    Failure::new(format!(
                        "expected field {name:?} to equal {expected}, but the field is absent"
                    ))
                    .with("field", name)
                    .with("expected", expected.to_string()),
                ),
            }
        })
    }
}
