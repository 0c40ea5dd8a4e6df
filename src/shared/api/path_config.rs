// src/shared/api/path_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::PathConfig;

/// Path segments that fail to parse (e.g. a non-UUID id) become a 400 in the
/// standard envelope instead of actix's plain-text 404.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_PATH", &message),
        )
        .into()
    })
}
