use serde_json::{Map, Value};
use std::fmt;

/// Structured tag attached to a log event
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    key: String,
    value: Value,
}

impl Field {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Renders a field set as one compact JSON object; later keys win
#[derive(Clone, Copy)]
pub(crate) struct Fields<'a>(&'a [Field]);

impl<'a> Fields<'a> {
    pub(crate) fn non_empty(fields: &'a [Field]) -> Option<Self> {
        (!fields.is_empty()).then_some(Self(fields))
    }
}

impl fmt::Display for Fields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let map: Map<String, Value> = self
            .0
            .iter()
            .map(|field| (field.key.clone(), field.value.clone()))
            .collect();
        write!(f, "{}", Value::Object(map))
    }
}
