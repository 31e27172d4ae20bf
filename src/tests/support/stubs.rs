use crate::schema::application::domain::errors::UnknownTypeError;
use crate::schema::application::ports::incoming::use_cases::{
    DescribeSchemaUseCase, RecordTypeDescription, RecordTypeSummary,
};

/// Describe use case with no registered record types.
#[derive(Clone, Default)]
pub struct StubDescribeSchemaUseCase;

impl StubDescribeSchemaUseCase {
    pub fn empty() -> Self {
        Self
    }
}

impl DescribeSchemaUseCase for StubDescribeSchemaUseCase {
    fn list(&self) -> Vec<RecordTypeSummary> {
        vec![]
    }

    fn describe(&self, type_name: &str) -> Result<RecordTypeDescription, UnknownTypeError> {
        Err(UnknownTypeError(type_name.to_string()))
    }

    fn collection_name(&self, type_name: &str) -> Result<&'static str, UnknownTypeError> {
        Err(UnknownTypeError(type_name.to_string()))
    }
}
