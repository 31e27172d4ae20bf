use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::schema::application::domain::record_type::RecordType;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct RecordTypeSummaryResponse {
    pub record_type: RecordType,
    #[schema(example = "project")]
    pub collection: String,
}

/// List record types
///
/// Every registered record type with its storage collection name.
#[utoipa::path(
    get,
    path = "/api/schemas",
    tag = "schemas",
    responses(
        (
            status = 200,
            description = "Registered record types",
            body = inline(crate::api::schemas::SuccessResponse<Vec<RecordTypeSummaryResponse>>)
        )
    )
)]
#[get("/api/schemas")]
pub async fn list_record_types_handler(data: web::Data<AppState>) -> impl Responder {
    let summaries: Vec<RecordTypeSummaryResponse> = data
        .schema
        .describe
        .list()
        .into_iter()
        .map(|s| RecordTypeSummaryResponse {
            record_type: s.record_type,
            collection: s.collection.to_string(),
        })
        .collect();

    ApiResponse::success(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubDescribeSchemaUseCase;

    #[actix_web::test]
    async fn test_list_record_types() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(list_record_types_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/schemas").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);

        let data = body["data"].as_array().cloned().unwrap_or_default();
        assert_eq!(data.len(), 7);
        assert_eq!(data[0], json!({ "record_type": "Profile", "collection": "profile" }));
        assert_eq!(data[6], json!({ "record_type": "Product", "collection": "product" }));
    }

    #[actix_web::test]
    async fn test_list_record_types_empty_registry() {
        let app_state = TestAppStateBuilder::default()
            .with_describe_schema(StubDescribeSchemaUseCase::empty())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(list_record_types_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/schemas").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], json!([]));
    }
}
