use std::fmt;

use serde::Serialize;
use serde_json::Number;
use utoipa::ToSchema;

use super::record_type::RecordType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Email,
    Url,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Format::Email => "email address",
            Format::Url => "URL",
        };
        write!(f, "{s}")
    }
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldError {
    #[error("missing required field `{field}`")]
    MissingField { field: String },

    #[error("field `{field}` should be {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("field `{field}` is not a valid {format}: {reason}")]
    FormatViolation {
        field: String,
        format: Format,
        reason: String,
    },

    #[error("field `{field}` must be between {min} and {max}, got {actual}")]
    RangeViolation {
        field: String,
        min: i64,
        max: i64,
        #[schema(value_type = f64)]
        actual: Number,
    },

    #[error("unexpected field `{field}`")]
    UnexpectedField { field: String },
}

impl FieldError {
    pub fn field(&self) -> &str {
        match self {
            FieldError::MissingField { field }
            | FieldError::TypeMismatch { field, .. }
            | FieldError::FormatViolation { field, .. }
            | FieldError::RangeViolation { field, .. }
            | FieldError::UnexpectedField { field } => field,
        }
    }
}

/// Every field error collected for one validation call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{} validation error(s) for {record_type}{}", .errors.len(), summarize(.errors))]
pub struct ValidationError {
    record_type: RecordType,
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(record_type: RecordType, errors: Vec<FieldError>) -> Self {
        Self {
            record_type,
            errors,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors reported against `field`.
    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field() == field)
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors.iter().map(|e| format!("; {e}")).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown record type: {0}")]
pub struct UnknownTypeError(pub String);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error(transparent)]
    UnknownType(#[from] UnknownTypeError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("failed to decode {record_type} record: {reason}")]
    Decode {
        record_type: RecordType,
        reason: String,
    },
}
