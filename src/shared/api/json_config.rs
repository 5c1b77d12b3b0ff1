// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Malformed bodies surface as a generic server error through the
/// envelope; no field-level validation is performed.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::internal_error("Invalid request body"),
        )
        .into()
    })
}
