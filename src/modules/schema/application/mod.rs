pub mod domain;
pub mod ports;
pub mod schema_use_cases;
pub mod services;
