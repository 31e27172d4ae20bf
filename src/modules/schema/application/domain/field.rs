use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Declared type of a field, with its constraint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Url,
    Integer {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    Float,
    Boolean,
    TextList,
    TextMap,
}

impl FieldKind {
    pub const INTEGER: FieldKind = FieldKind::Integer {
        min: None,
        max: None,
    };

    /// Wording used in type mismatch errors.
    pub fn expected(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::Email | FieldKind::Url => "a string",
            FieldKind::Integer { .. } => "an integer",
            FieldKind::Float => "a number",
            FieldKind::Boolean => "a boolean",
            FieldKind::TextList => "an array of strings",
            FieldKind::TextMap => "an object of strings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Bool(bool),
    EmptyList,
    EmptyMap,
}

impl DefaultValue {
    pub fn to_value(self) -> Value {
        match self {
            DefaultValue::Bool(b) => Value::Bool(b),
            DefaultValue::EmptyList => Value::Array(Vec::new()),
            DefaultValue::EmptyMap => Value::Object(Map::new()),
        }
    }
}

impl Serialize for DefaultValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "presence", content = "default", rename_all = "snake_case")]
pub enum Presence {
    Required,
    /// Absent or `null` becomes `None`.
    Optional,
    /// Absent takes the default.
    Defaulted(DefaultValue),
}

/// One entry of a record type's declarative field list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    #[serde(flatten)]
    pub presence: Presence,
    /// An explicit `null` takes the default instead of failing.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub null_as_default: bool,
    pub description: &'static str,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Required,
            null_as_default: false,
            description,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Optional,
            null_as_default: false,
            description,
        }
    }

    pub const fn defaulted(
        name: &'static str,
        kind: FieldKind,
        default: DefaultValue,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Defaulted(default),
            null_as_default: false,
            description,
        }
    }

    pub const fn null_as_default(mut self) -> Self {
        self.null_as_default = true;
        self
    }

    pub fn is_required(&self) -> bool {
        matches!(self.presence, Presence::Required)
    }
}
