//! Error type for JSON marshalling and unmarshalling.

use std::io;

/// Errors that can occur while writing or reading the JSON wire format.
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    /// An I/O error from the underlying writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not syntactically valid JSON.
    #[error("JSON syntax error: {0}")]
    Syntax(#[from] serde_json::Error),

    /// A value of one JSON type was found where another was expected.
    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        /// The JSON type the caller asked for.
        expected: &'static str,
        /// The JSON type actually present in the input.
        found: &'static str,
    },

    /// A value had the right JSON type but could not be represented.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A blob member was not valid base64.
    #[error("invalid base64 blob: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The writer or reader was driven out of order (e.g. a value without a
    /// member name, or an unbalanced `end_object`).
    #[error("invalid JSON cursor state: {0}")]
    InvalidState(&'static str),
}

impl JsonError {
    /// Build a [`JsonError::UnexpectedType`] describing the given value.
    pub(crate) fn unexpected(expected: &'static str, found: &serde_json::Value) -> Self {
        Self::UnexpectedType {
            expected,
            found: type_name(found),
        }
    }
}

/// Human-readable name of a JSON value's type.
pub(crate) fn type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
