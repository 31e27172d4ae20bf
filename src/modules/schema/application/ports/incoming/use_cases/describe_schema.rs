use serde::Serialize;

use crate::schema::application::domain::{
    errors::UnknownTypeError, field::FieldSpec, record_type::RecordType,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordTypeSummary {
    pub record_type: RecordType,
    pub collection: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordTypeDescription {
    pub record_type: RecordType,
    pub collection: &'static str,
    pub fields: &'static [FieldSpec],
}

pub trait DescribeSchemaUseCase: Send + Sync {
    fn list(&self) -> Vec<RecordTypeSummary>;

    fn describe(&self, type_name: &str) -> Result<RecordTypeDescription, UnknownTypeError>;

    fn collection_name(&self, type_name: &str) -> Result<&'static str, UnknownTypeError>;
}
