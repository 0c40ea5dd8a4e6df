// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope for every 2xx body except `204 No Content`.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope for every 4xx/5xx body.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

/// Machine-readable failure.
///
/// Codes in use: `EMPTY_NAME`, `EMPTY_EMAIL`, `EMPTY_FIELD`, `VALIDATION_ERROR`,
/// `MALFORMED_JSON`, `INVALID_CONTENT_TYPE`, `PAYLOAD_TOO_LARGE`, `INVALID_PATH`,
/// `CV_NOT_FOUND`, `EXPERIENCE_NOT_FOUND`, `EDUCATION_NOT_FOUND`,
/// `SKILL_NOT_FOUND`, `EMAIL_ALREADY_EXISTS`, `INTEGRITY_ERROR`, `INTERNAL_ERROR`.
#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    #[schema(example = "EMAIL_ALREADY_EXISTS")]
    pub code: String,

    #[schema(example = "A CV with this email already exists")]
    pub message: String,
}
