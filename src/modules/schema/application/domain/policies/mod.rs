pub mod validation_policy;

pub use validation_policy::ValidationPolicy;
