use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use std::error::Error as StdError;
use std::fmt;

use super::category::Category;
use super::decode::DecodeError;

/// HTTP-facing error description
///
/// Values are immutable once built: fields are only readable through accessors.
/// The wire form is `{"status", "message", "error", "causes"}`, where `error`
/// holds the category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestError {
    /// HTTP status code
    #[serde(default, deserialize_with = "null_as_default")]
    status: u16,
    /// Human-readable error message
    #[serde(default, deserialize_with = "null_as_default")]
    message: String,
    /// Short machine-readable label
    #[serde(rename = "error", default, deserialize_with = "null_as_default")]
    category: String,
    /// Underlying faults, nested error objects or plain strings
    #[serde(default, deserialize_with = "null_as_default")]
    causes: Vec<Value>,
}

// Explicit `null` decodes the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RestError {
    /// Create a rest error from arbitrary parts
    pub fn new(
        message: impl Into<String>,
        status: u16,
        category: impl Into<String>,
        causes: Vec<Value>,
    ) -> Self {
        Self {
            status,
            message: message.into(),
            category: category.into(),
            causes,
        }
    }

    fn with_category(message: impl Into<String>, category: Category) -> Self {
        Self::new(
            message,
            category.status_code(),
            category.label(),
            Vec::new(),
        )
    }

    /// Decode a rest error body
    ///
    /// Missing or `null` keys fall back to zero values. Bytes that are not JSON,
    /// JSON that is not an object, and keys holding the wrong type are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(bytes).map_err(DecodeError::InvalidJson)?;
        if !value.is_object() {
            return Err(DecodeError::not_an_object(&value));
        }
        serde_json::from_value(value).map_err(DecodeError::InvalidField)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn causes(&self) -> &[Value] {
        &self.causes
    }

    /// Built-in category, when both the label and the status match one
    pub fn kind(&self) -> Option<Category> {
        Category::from_label(&self.category).filter(|c| c.status_code() == self.status)
    }

    /// HTTP status for responses; anything outside 100..=599 becomes 500
    pub fn status_code(&self) -> StatusCode {
        if !(100..=599).contains(&self.status) {
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn to_json(&self) -> Value {
        json!({
            "status": self.status,
            "message": self.message,
            "error": self.category,
            "causes": self.causes,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_json().to_string().into_bytes()
    }
}

/// Helpers for the built-in categories
impl RestError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_category(message, Category::BadRequest)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_category(message, Category::NotFound)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_category(message, Category::Unauthorized)
    }

    /// Internal error caused by `fault`
    ///
    /// A fault records two causes: a structured description of the fault
    /// followed by its plain text.
    pub fn internal_server_error(
        message: impl Into<String>,
        fault: Option<&(dyn StdError + 'static)>,
    ) -> Self {
        let causes = match fault {
            Some(fault) => vec![describe_fault(fault), Value::String(fault.to_string())],
            None => Vec::new(),
        };
        Self::new(
            message,
            Category::InternalServerError.status_code(),
            Category::InternalServerError.label(),
            causes,
        )
    }
}

fn describe_fault(fault: &(dyn StdError + 'static)) -> Value {
    if let Some(nested) = fault.downcast_ref::<RestError>() {
        return nested.to_json();
    }
    let sources: Vec<String> = std::iter::successors(fault.source(), |&e| e.source())
        .map(ToString::to_string)
        .collect();
    json!({
        "message": fault.to_string(),
        "sources": sources,
    })
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "message: {} - status: {} - error: {} - causes: [",
            self.message, self.status, self.category
        )?;
        for (i, cause) in self.causes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match cause {
                Value::String(text) => f.write_str(text)?,
                other => write!(f, "{}", other)?,
            }
        }
        f.write_str("]")
    }
}

impl StdError for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
