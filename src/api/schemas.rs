// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

use crate::schema::application::domain::errors::FieldError;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "VALIDATION_FAILED")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "1 validation error(s) for Skill; field `level` must be between 1 and 100, got 150")]
    pub message: String,

    /// Per-field failures, present for `VALIDATION_FAILED`
    pub details: Option<Vec<FieldError>>,
}
