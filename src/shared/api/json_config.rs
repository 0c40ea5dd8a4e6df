// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::error::JsonPayloadError;
use actix_web::web::JsonConfig;

/// Upper bound for a CV body, children included.
pub const JSON_BODY_LIMIT: usize = 256 * 1024;

/// Body extraction failures rendered in the standard error envelope.
///
/// Well-formed JSON that does not fit the request shape (missing or unknown
/// fields, bad dates) is a `VALIDATION_ERROR`; everything else gets its own code.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| {
            let message = err.to_string();
            let code = error_code(&err);
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request(code, &message),
            )
            .into()
        })
}

fn error_code(err: &JsonPayloadError) -> &'static str {
    match err {
        JsonPayloadError::Deserialize(e) if e.is_syntax() || e.is_eof() => "MALFORMED_JSON",
        JsonPayloadError::Deserialize(_) => "VALIDATION_ERROR",
        JsonPayloadError::ContentType => "INVALID_CONTENT_TYPE",
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "PAYLOAD_TOO_LARGE"
        }
        _ => "INVALID_BODY",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, post, test, web, App, HttpResponse, Responder};
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    #[allow(dead_code)]
    struct Probe {
        name: String,
    }

    #[post("/probe")]
    async fn probe(_body: web::Json<Probe>) -> impl Responder {
        HttpResponse::Ok().finish()
    }

    async fn send(req: test::TestRequest) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(custom_json_config())
                .service(probe),
        )
        .await;

        let resp = test::call_service(&app, req.uri("/probe").to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn unknown_field_is_validation_error() {
        let (status, body) = send(
            test::TestRequest::post().set_json(serde_json::json!({ "name": "a", "x": 1 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn broken_json_is_malformed() {
        let (status, body) = send(
            test::TestRequest::post()
                .insert_header(("content-type", "application/json"))
                .set_payload("{\"name\": "),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "MALFORMED_JSON");
    }

    #[actix_web::test]
    async fn wrong_content_type_is_reported() {
        let (status, body) = send(
            test::TestRequest::post()
                .insert_header(("content-type", "text/plain"))
                .set_payload("{\"name\": \"a\"}"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_CONTENT_TYPE");
    }
}
