//! Collected field errors, keyed by field name.

use indexmap::IndexMap;
use serde::Serialize;

/// Where a validated value came from in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Body,
    Params,
}

/// The first rule failure recorded for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub msg: String,
    pub param: String,
    pub value: String,
    pub location: Location,
}

impl FieldError {
    pub fn new(param: &str, value: &str, msg: impl Into<String>, location: Location) -> Self {
        Self {
            msg: msg.into(),
            param: param.to_string(),
            value: value.to_string(),
            location,
        }
    }
}

/// Field errors in rule declaration order, one entry per failing field.
///
/// Serializes as a JSON object `{ field: { msg, param, value, location } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<String, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `error` unless its field already has one.
    pub fn push(&mut self, error: FieldError) {
        self.0.entry(error.param.clone()).or_insert(error);
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
