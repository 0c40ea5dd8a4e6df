use actix_web::{route, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::cv::application::ports::incoming::use_cases::{
    PatchCvCommand, PatchCvCommandError, PatchCvError,
};
use crate::modules::cv::domain::entities::{Cv, CvId};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Partial update of the CV root. Omitted or null fields stay as they are.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateCvRequest {
    #[serde(default)]
    #[schema(example = "Ada King")]
    pub name: Option<String>,

    #[serde(default)]
    #[schema(example = "countess@example.com")]
    pub email: Option<String>,
}

fn map_command_error(err: PatchCvCommandError) -> HttpResponse {
    let message = err.to_string();
    match err {
        PatchCvCommandError::EmptyName => ApiResponse::bad_request("EMPTY_NAME", &message),
        PatchCvCommandError::EmptyEmail => ApiResponse::bad_request("EMPTY_EMAIL", &message),
        PatchCvCommandError::FieldTooLong { .. } => {
            ApiResponse::bad_request("VALIDATION_ERROR", &message)
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Update a CV
///
/// Applies the present root fields. Entries are never touched. An empty body
/// returns the stored CV unchanged. Served for both PUT and PATCH.
#[utoipa::path(
    method(put, patch),
    path = "/api/cvs/{cv_id}",
    tag = "cvs",
    params(("cv_id" = Uuid, Path, description = "CV identifier")),
    request_body = UpdateCvRequest,
    responses(
        (status = 200, description = "CV updated", body = inline(SuccessResponse<Cv>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "CV not found", body = ErrorResponse),
        (status = 409, description = "Email already used by another CV", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[route("/api/cvs/{cv_id}", method = "PUT", method = "PATCH")]
pub async fn update_cv_handler(
    path: web::Path<Uuid>,
    req: web::Json<UpdateCvRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let cv_id = CvId::from(path.into_inner());
    let req = req.into_inner();

    let command = match PatchCvCommand::new(req.name, req.email) {
        Ok(cmd) => cmd,
        Err(e) => {
            warn!(%cv_id, error = %e, "Rejected CV update");
            return map_command_error(e);
        }
    };

    match data.cv.patch.execute(cv_id, command).await {
        Ok(cv) => ApiResponse::success(cv),

        Err(PatchCvError::NotFound) => ApiResponse::not_found("CV_NOT_FOUND", "CV not found"),

        Err(PatchCvError::EmailAlreadyExists) => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "A CV with this email already exists")
        }

        Err(PatchCvError::RepositoryError(e)) => {
            error!("Repository error updating CV {}: {}", cv_id, e);
            ApiResponse::internal_error()
        }
    }
}
