use actix_web::{get, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::schema::application::domain::record_type::RecordType;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    status: &'static str,
    /// Number of registered record types
    #[schema(example = 7)]
    record_types: usize,
}

/// LIVENESS PROBE
/// - No I/O
/// - No persistence layer
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        record_types: RecordType::ALL.len(),
    })
}
