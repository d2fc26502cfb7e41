//! Build parameters
//!
//! Parameters handed to a job invocation. The map is strictly
//! string-to-string; free-form JSON is accepted only when it is an object
//! with scalar values, and anything else is rejected here, before any
//! request is made.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

/// Key/value parameters for a parameterized job invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildParameters {
    values: BTreeMap<String, String>,
}

/// Errors raised when validating build parameters
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParameterError {
    /// The input was not a key/value mapping at all
    #[error(
        "build parameters must be a key/value mapping, got {found}. \
         Hint: check for missing quotation"
    )]
    NotAMapping {
        /// JSON type that was actually supplied
        found: &'static str,
    },

    /// A value under `key` was not a scalar
    #[error("build parameter `{key}` must be a string, number, or boolean")]
    UnsupportedValue { key: String },
}

impl BuildParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate free-form JSON into typed parameters
    ///
    /// Accepts only a JSON object; number and boolean values are
    /// stringified, nested objects and arrays are rejected.
    pub fn from_value(value: Value) -> Result<Self, ParameterError> {
        let Value::Object(map) = value else {
            return Err(ParameterError::NotAMapping {
                found: json_type_name(&value),
            });
        };

        let mut params = Self::new();
        for (key, value) in map {
            let value = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => {
                    return Err(ParameterError::UnsupportedValue { key });
                }
            };
            params.values.insert(key, value);
        }

        Ok(params)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterate entries in key order, ready for form encoding
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
