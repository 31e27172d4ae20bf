mod describe_record_type;
mod list_record_types;
mod validate_record;

pub use describe_record_type::*;
pub use list_record_types::*;
pub use validate_record::*;
