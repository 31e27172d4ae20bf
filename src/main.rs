pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::schema;

use crate::api::openapi::ApiDoc;
use crate::schema::application::domain::policies::ValidationPolicy;
use crate::schema::application::schema_use_cases::SchemaUseCases;
use crate::schema::application::services::{DescribeSchemaService, ValidateRecordService};
use crate::shared::api::custom_json_config;
use crate::shared::config::ServerConfig;

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub schema: SchemaUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    ServerConfig::load_env_files();

    let server_config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let policy = ValidationPolicy::from_env();

    if policy.strict {
        info!("Strict validation enabled: undeclared fields are rejected");
    }

    let state = AppState {
        schema: SchemaUseCases {
            validate: Arc::new(ValidateRecordService::new(policy)),
            describe: Arc::new(DescribeSchemaService::new()),
        },
    };

    let server_url = server_config.bind_address();
    info!("Server run on: {}", server_url);

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // Schemas
    cfg.service(crate::schema::adapter::incoming::web::routes::list_record_types_handler);
    cfg.service(crate::schema::adapter::incoming::web::routes::describe_record_type_handler);
    cfg.service(crate::schema::adapter::incoming::web::routes::validate_record_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
