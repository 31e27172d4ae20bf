//! Registry entry points: validate raw input into typed records and resolve
//! storage collection names.

use serde::Serialize;
use serde_json::{Map, Value};

use super::errors::{SchemaError, UnknownTypeError, ValidationError};
use super::policies::ValidationPolicy;
use super::record_type::RecordType;
use super::records::{
    Experience, Message, Product, Profile, Project, Record, RecordSchema, Skill, User,
};
use super::validation::validate_fields;

/// Storage collection for a record type given by name.
pub fn collection_name(type_name: &str) -> Result<&'static str, UnknownTypeError> {
    type_name
        .parse::<RecordType>()
        .map(RecordType::collection_name)
}

pub fn validate(
    record_type: RecordType,
    raw: &Map<String, Value>,
    policy: &ValidationPolicy,
) -> Result<Record, SchemaError> {
    match record_type {
        RecordType::Profile => validate_as::<Profile>(raw, policy).map(Record::from),
        RecordType::Project => validate_as::<Project>(raw, policy).map(Record::from),
        RecordType::Experience => validate_as::<Experience>(raw, policy).map(Record::from),
        RecordType::Skill => validate_as::<Skill>(raw, policy).map(Record::from),
        RecordType::Message => validate_as::<Message>(raw, policy).map(Record::from),
        RecordType::User => validate_as::<User>(raw, policy).map(Record::from),
        RecordType::Product => validate_as::<Product>(raw, policy).map(Record::from),
    }
}

/// Unknown type names fail before any field is looked at.
pub fn validate_by_name(
    type_name: &str,
    raw: &Map<String, Value>,
    policy: &ValidationPolicy,
) -> Result<Record, SchemaError> {
    let record_type = type_name.parse::<RecordType>()?;
    validate(record_type, raw, policy)
}

pub fn validate_as<T: RecordSchema>(
    raw: &Map<String, Value>,
    policy: &ValidationPolicy,
) -> Result<T, SchemaError> {
    let normalized = validate_fields(T::RECORD_TYPE.fields(), raw, policy)
        .map_err(|errors| ValidationError::new(T::RECORD_TYPE, errors))?;

    serde_json::from_value(Value::Object(normalized)).map_err(|e| SchemaError::Decode {
        record_type: T::RECORD_TYPE,
        reason: e.to_string(),
    })
}

/// Field-by-field export of a typed record, suitable as `validate` input.
pub fn export<T: Serialize>(record: &T) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        other => Err(serde::ser::Error::custom(format!(
            "record exported as {other} instead of an object"
        ))),
    }
}
