use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};

use crate::schema::application::domain::{
    errors::SchemaError, policies::ValidationPolicy, records::Record, registry,
};
use crate::schema::application::ports::incoming::use_cases::ValidateRecordUseCase;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct ValidateRecordService {
    policy: ValidationPolicy,
}

impl ValidateRecordService {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }
}

impl ValidateRecordUseCase for ValidateRecordService {
    fn execute(&self, type_name: &str, raw: &Map<String, Value>) -> Result<Record, SchemaError> {
        let result = registry::validate_by_name(type_name, raw, &self.policy);

        match &result {
            Ok(record) => debug!(
                record_type = %record.record_type(),
                collection = record.collection_name(),
                "record validated"
            ),
            Err(SchemaError::Invalid(e)) => info!(
                record_type = %e.record_type(),
                error_count = e.len(),
                "record failed validation"
            ),
            Err(SchemaError::UnknownType(e)) => warn!("rejected validation request: {}", e),
            Err(e @ SchemaError::Decode { .. }) => error!("normalized record did not decode: {}", e),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::application::domain::{
        errors::{FieldError, UnknownTypeError},
        record_type::RecordType,
    };
    use serde_json::json;

    fn raw(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    // =====================================================
    // Success
    // =====================================================

    #[test]
    fn test_execute_success() {
        let service = ValidateRecordService::default();

        let record = service
            .execute("Skill", &raw(json!({ "name": "Rust", "level": 90 })))
            .unwrap();

        assert_eq!(record.record_type(), RecordType::Skill);
    }

    // =====================================================
    // Errors
    // =====================================================

    #[test]
    fn test_execute_unknown_type() {
        let service = ValidateRecordService::default();

        let err = service.execute("Unknown", &Map::new()).unwrap_err();

        assert_eq!(
            err,
            SchemaError::UnknownType(UnknownTypeError("Unknown".to_string()))
        );
    }

    #[test]
    fn test_execute_uses_configured_policy() {
        let input = raw(json!({ "name": "Rust", "extra": true }));

        assert!(ValidateRecordService::default()
            .execute("Skill", &input)
            .is_ok());

        let err = ValidateRecordService::new(ValidationPolicy::new(true))
            .execute("Skill", &input)
            .unwrap_err();

        match err {
            SchemaError::Invalid(e) => assert_eq!(
                e.errors(),
                &[FieldError::UnexpectedField {
                    field: "extra".to_string()
                }]
            ),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }
}
