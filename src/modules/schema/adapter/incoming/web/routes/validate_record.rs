use actix_web::{post, web, Responder};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::error;
use utoipa::ToSchema;

use crate::schema::application::domain::{
    errors::SchemaError, record_type::RecordType, records::Record,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidatedRecordResponse {
    pub record_type: RecordType,
    /// Collection the persistence layer should write the record to
    #[schema(example = "skill")]
    pub collection: String,
    pub record: Record,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Validate a record
///
/// Checks the JSON object body against the named record type and returns the
/// typed record with defaults applied. Nothing is persisted.
#[utoipa::path(
    post,
    path = "/api/schemas/{type_name}/validate",
    tag = "schemas",
    params(
        ("type_name" = String, Path, description = "Record type name", example = "Skill")
    ),
    responses(
        (
            status = 200,
            description = "Record is valid",
            body = inline(crate::api::schemas::SuccessResponse<ValidatedRecordResponse>),
            example = json!({
                "success": true,
                "data": {
                    "record_type": "Skill",
                    "collection": "skill",
                    "record": { "name": "Rust", "level": 90, "group": null }
                }
            })
        ),
        (status = 400, description = "Body is not a JSON object", body = crate::api::schemas::ErrorResponse),
        (status = 404, description = "Unknown record type", body = crate::api::schemas::ErrorResponse),
        (
            status = 422,
            description = "One or more fields failed validation",
            body = crate::api::schemas::ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_FAILED",
                    "message": "1 validation error(s) for Skill; field `level` must be between 1 and 100, got 150",
                    "details": [
                        { "kind": "range_violation", "field": "level", "min": 1, "max": 100, "actual": 150 }
                    ]
                }
            })
        ),
        (status = 500, description = "Internal server error", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/schemas/{type_name}/validate")]
pub async fn validate_record_handler(
    path: web::Path<String>,
    body: web::Json<Map<String, Value>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let type_name = path.into_inner();
    let raw = body.into_inner();

    match data.schema.validate.execute(&type_name, &raw) {
        Ok(record) => ApiResponse::success(ValidatedRecordResponse {
            record_type: record.record_type(),
            collection: record.collection_name().to_string(),
            record,
        }),

        Err(SchemaError::UnknownType(e)) => {
            ApiResponse::not_found("UNKNOWN_RECORD_TYPE", &e.to_string())
        }

        Err(SchemaError::Invalid(e)) => {
            ApiResponse::unprocessable("VALIDATION_FAILED", &e.to_string(), &e.errors())
        }

        Err(e @ SchemaError::Decode { .. }) => {
            error!("Failed to build {} record: {}", type_name, e);
            ApiResponse::internal_error()
        }
    }
}
