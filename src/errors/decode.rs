use serde_json::Value;
use thiserror::Error;

/// Failure to parse a rest error body received from another service
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid json: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("invalid json: expected an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("invalid json: {0}")]
    InvalidField(#[source] serde_json::Error),
}

impl DecodeError {
    pub(crate) fn not_an_object(value: &Value) -> Self {
        let found = match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        };
        Self::NotAnObject { found }
    }
}
