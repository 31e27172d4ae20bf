use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::schema::adapter::incoming::web::routes::{
    RecordTypeDescriptionResponse, RecordTypeSummaryResponse, ValidatedRecordResponse,
};
use crate::schema::application::domain::{
    errors::{FieldError, Format},
    record_type::RecordType,
    records::{Experience, Message, Product, Profile, Project, Record, Skill, User},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Schema API",
        version = "1.0.0",
        description = "Validation and collection naming for portfolio records",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        crate::health::health,
        crate::schema::adapter::incoming::web::routes::list_record_types_handler,
        crate::schema::adapter::incoming::web::routes::describe_record_type_handler,
        crate::schema::adapter::incoming::web::routes::validate_record_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<ValidatedRecordResponse>,
            ErrorResponse,
            ErrorDetail,
            FieldError,
            Format,

            // Schema DTOs
            RecordType,
            RecordTypeSummaryResponse,
            RecordTypeDescriptionResponse,
            ValidatedRecordResponse,

            // Records
            Record,
            Profile,
            Project,
            Experience,
            Skill,
            Message,
            User,
            Product
        )
    ),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "schemas", description = "Record validation and schema introspection"),
    )
)]
pub struct ApiDoc;
