use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::schema::application::domain::{field::FieldSpec, record_type::RecordType};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct RecordTypeDescriptionResponse {
    pub record_type: RecordType,
    #[schema(example = "skill")]
    pub collection: String,
    /// Declared fields in declaration order
    #[schema(value_type = Vec<Object>)]
    pub fields: Vec<FieldSpec>,
}

/// Describe a record type
///
/// Returns the declarative field list of one record type.
#[utoipa::path(
    get,
    path = "/api/schemas/{type_name}",
    tag = "schemas",
    params(
        ("type_name" = String, Path, description = "Record type name", example = "Project")
    ),
    responses(
        (
            status = 200,
            description = "Record type description",
            body = inline(crate::api::schemas::SuccessResponse<RecordTypeDescriptionResponse>)
        ),
        (status = 404, description = "Unknown record type", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/schemas/{type_name}")]
pub async fn describe_record_type_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.schema.describe.describe(&path.into_inner()) {
        Ok(description) => ApiResponse::success(RecordTypeDescriptionResponse {
            record_type: description.record_type,
            collection: description.collection.to_string(),
            fields: description.fields.to_vec(),
        }),
        Err(e) => ApiResponse::not_found("UNKNOWN_RECORD_TYPE", &e.to_string()),
    }
}
