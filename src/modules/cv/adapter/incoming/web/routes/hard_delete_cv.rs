use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::cv::application::ports::incoming::use_cases::HardDeleteCvError;
use crate::modules::cv::domain::entities::CvId;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a CV
///
/// Permanently removes the CV together with its experiences, educations and
/// skills.
#[utoipa::path(
    delete,
    path = "/api/cvs/{cv_id}",
    tag = "cvs",
    params(("cv_id" = Uuid, Path, description = "CV identifier")),
    responses(
        (status = 204, description = "CV deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "CV not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[delete("/api/cvs/{cv_id}")]
pub async fn hard_delete_cv_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let cv_id = CvId::from(path.into_inner());

    match data.cv.hard_delete.execute(cv_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(HardDeleteCvError::CvNotFound) => {
            ApiResponse::not_found("CV_NOT_FOUND", "CV not found")
        }
        Err(HardDeleteCvError::RepositoryError(e)) => {
            error!("Repository error deleting CV {}: {}", cv_id, e);
            ApiResponse::internal_error()
        }
    }
}
