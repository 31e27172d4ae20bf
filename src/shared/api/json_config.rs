// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;
use tracing::debug;

/// Largest JSON body accepted by the validation endpoints.
pub const JSON_BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Malformed or non-object bodies become a 400 in the standard envelope.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_BODY_LIMIT_BYTES)
        .error_handler(|err, _req| {
            let message = err.to_string();
            debug!("rejected JSON body: {}", message);
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
