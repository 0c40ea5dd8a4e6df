use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::cv::application::ports::incoming::use_cases::GetCvEntryError;
use crate::modules::cv::domain::entities::{Education, Experience, Skill};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn entry_response<T: Serialize>(
    result: Result<T, GetCvEntryError>,
    not_found_code: &str,
    label: &str,
    id: Uuid,
) -> HttpResponse {
    match result {
        Ok(entry) => ApiResponse::success(entry),
        Err(GetCvEntryError::NotFound) => {
            ApiResponse::not_found(not_found_code, &format!("{label} not found"))
        }
        Err(GetCvEntryError::RepositoryError(e)) => {
            error!("Repository error fetching {} {}: {}", label, id, e);
            ApiResponse::internal_error()
        }
    }
}

/// Get a single experience entry
#[utoipa::path(
    get,
    path = "/api/experiences/{id}",
    tag = "cvs",
    params(("id" = Uuid, Path, description = "Experience identifier")),
    responses(
        (status = 200, description = "Experience found", body = inline(SuccessResponse<Experience>)),
        (status = 404, description = "Experience not found", body = ErrorResponse)
    )
)]
#[get("/api/experiences/{id}")]
pub async fn get_experience_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let result = data.cv.get_entry.experience(id).await;
    entry_response(result, "EXPERIENCE_NOT_FOUND", "Experience", id)
}

/// Get a single education entry
#[utoipa::path(
    get,
    path = "/api/educations/{id}",
    tag = "cvs",
    params(("id" = Uuid, Path, description = "Education identifier")),
    responses(
        (status = 200, description = "Education found", body = inline(SuccessResponse<Education>)),
        (status = 404, description = "Education not found", body = ErrorResponse)
    )
)]
#[get("/api/educations/{id}")]
pub async fn get_education_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let result = data.cv.get_entry.education(id).await;
    entry_response(result, "EDUCATION_NOT_FOUND", "Education", id)
}

/// Get a single skill entry
#[utoipa::path(
    get,
    path = "/api/skills/{id}",
    tag = "cvs",
    params(("id" = Uuid, Path, description = "Skill identifier")),
    responses(
        (status = 200, description = "Skill found", body = inline(SuccessResponse<Skill>)),
        (status = 404, description = "Skill not found", body = ErrorResponse)
    )
)]
#[get("/api/skills/{id}")]
pub async fn get_skill_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let result = data.cv.get_entry.skill(id).await;
    entry_response(result, "SKILL_NOT_FOUND", "Skill", id)
}
