use serde_json::{Map, Value};

use crate::schema::application::domain::{errors::SchemaError, records::Record};

pub trait ValidateRecordUseCase: Send + Sync {
    /// Validate `raw` against the record type named `type_name`.
    fn execute(&self, type_name: &str, raw: &Map<String, Value>) -> Result<Record, SchemaError>;
}
