mod describe_schema;
mod validate_record;

pub use describe_schema::{DescribeSchemaUseCase, RecordTypeDescription, RecordTypeSummary};
pub use validate_record::ValidateRecordUseCase;
