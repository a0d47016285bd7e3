use std::fmt;

use serde_json::Value;
use thiserror::Error;

use super::path::FieldPath;

/// JSON shape a field was expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    String,
    Array,
    Object,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Expected::String => "a string",
            Expected::Array => "an array",
            Expected::Object => "an object",
        };
        f.write_str(name)
    }
}

/// Errors that abort decoding of a document.
///
/// No partial screen is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Missing required field '{path}'")]
    MissingField { path: FieldPath },

    #[error("Field '{path}' must be {expected}, found {found}")]
    WrongType {
        path: FieldPath,
        expected: Expected,
        found: &'static str,
    },

    #[error("Component at '{path}' has no string 'type' discriminator")]
    MissingDiscriminator { path: FieldPath },

    #[error("Unknown component type '{value}' at '{path}'")]
    UnknownVariant { path: FieldPath, value: String },
}

impl DecodeError {
    /// Path of the offending field.
    pub fn path(&self) -> &FieldPath {
        match self {
            DecodeError::MissingField { path }
            | DecodeError::WrongType { path, .. }
            | DecodeError::MissingDiscriminator { path }
            | DecodeError::UnknownVariant { path, .. } => path,
        }
    }

    pub(super) fn wrong_type(path: FieldPath, expected: Expected, found: &Value) -> Self {
        DecodeError::WrongType {
            path,
            expected,
            found: json_kind(found),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_path() {
        let err = DecodeError::MissingField {
            path: FieldPath::root().key("components").index(0).key("layout"),
        };
        assert_eq!(err.to_string(), "Missing required field 'components[0].layout'");

        let err = DecodeError::wrong_type(
            FieldPath::root().key("components"),
            Expected::Array,
            &Value::from(3),
        );
        assert_eq!(
            err.to_string(),
            "Field 'components' must be an array, found number"
        );
    }

    #[test]
    fn unknown_variant_carries_value() {
        let err = DecodeError::UnknownVariant {
            path: FieldPath::root().key("components").index(2).key("type"),
            value: "button".to_string(),
        };
        assert!(err.to_string().contains("'button'"));
        assert_eq!(err.path().to_string(), "components[2].type");
    }
}
