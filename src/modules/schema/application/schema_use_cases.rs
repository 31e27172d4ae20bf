use std::sync::Arc;

use crate::schema::application::ports::incoming::use_cases::{
    DescribeSchemaUseCase, ValidateRecordUseCase,
};

#[derive(Clone)]
pub struct SchemaUseCases {
    pub validate: Arc<dyn ValidateRecordUseCase + Send + Sync>,
    pub describe: Arc<dyn DescribeSchemaUseCase + Send + Sync>,
}
