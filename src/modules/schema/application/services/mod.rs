mod describe_schema_service;
mod validate_record_service;

pub use describe_schema_service::DescribeSchemaService;
pub use validate_record_service::ValidateRecordService;
