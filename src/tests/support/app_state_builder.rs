use crate::schema::application::ports::incoming::use_cases::{
    DescribeSchemaUseCase, ValidateRecordUseCase,
};
use crate::schema::application::schema_use_cases::SchemaUseCases;
use crate::schema::application::services::{DescribeSchemaService, ValidateRecordService};
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// App state backed by the real registry services unless a test swaps one out.
pub struct TestAppStateBuilder {
    validate: Arc<dyn ValidateRecordUseCase + Send + Sync>,
    describe: Arc<dyn DescribeSchemaUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            validate: Arc::new(ValidateRecordService::default()),
            describe: Arc::new(DescribeSchemaService::new()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_validate_record(
        mut self,
        uc: impl ValidateRecordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.validate = Arc::new(uc);
        self
    }

    pub fn with_describe_schema(
        mut self,
        uc: impl DescribeSchemaUseCase + Send + Sync + 'static,
    ) -> Self {
        self.describe = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            schema: SchemaUseCases {
                validate: self.validate,
                describe: self.describe,
            },
        })
    }
}
