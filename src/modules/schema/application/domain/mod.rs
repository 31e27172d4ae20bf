pub mod errors;
pub mod field;
pub mod policies;
pub mod record_type;
pub mod records;
pub mod registry;
pub mod schemas;
pub mod validation;
