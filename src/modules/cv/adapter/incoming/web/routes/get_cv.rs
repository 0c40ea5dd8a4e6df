use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::cv::application::ports::incoming::use_cases::GetCvError;
use crate::modules::cv::domain::entities::{Cv, CvId};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a CV with all of its entries
#[utoipa::path(
    get,
    path = "/api/cvs/{cv_id}",
    tag = "cvs",
    params(("cv_id" = Uuid, Path, description = "CV identifier")),
    responses(
        (status = 200, description = "CV found", body = inline(SuccessResponse<Cv>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "CV not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/cvs/{cv_id}")]
pub async fn get_cv_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    let cv_id = CvId::from(path.into_inner());

    match data.cv.get.execute(cv_id).await {
        Ok(cv) => ApiResponse::success(cv),
        Err(GetCvError::NotFound) => ApiResponse::not_found("CV_NOT_FOUND", "CV not found"),
        Err(GetCvError::RepositoryError(e)) => {
            error!("Repository error fetching CV {}: {}", cv_id, e);
            ApiResponse::internal_error()
        }
    }
}
