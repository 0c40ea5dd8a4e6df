use actix_web::{post, web, HttpResponse, Responder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::cv::application::ports::incoming::use_cases::{
    CreateCvCommand, CreateCvCommandError, CreateCvError,
};
use crate::modules::cv::application::ports::outgoing::{NewEducation, NewExperience, NewSkill};
use crate::modules::cv::domain::entities::Cv;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Request body for creating a CV together with its entries
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCvRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: String,

    #[schema(example = "ada@example.com")]
    pub email: String,

    #[serde(default, alias = "experience")]
    pub experiences: Vec<CreateExperienceRequest>,

    #[serde(default, alias = "education")]
    pub educations: Vec<CreateEducationRequest>,

    #[serde(default)]
    pub skills: Vec<CreateSkillRequest>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateExperienceRequest {
    #[schema(example = "Analytical Engines Ltd")]
    pub company: String,

    #[schema(example = "Engineer")]
    pub position: String,

    pub from_date: NaiveDate,

    #[serde(default)]
    pub to_date: Option<NaiveDate>,

    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateEducationRequest {
    pub institution: String,
    pub degree: String,

    pub from_date: NaiveDate,

    #[serde(default)]
    pub to_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateSkillRequest {
    #[schema(example = "Mathematics")]
    pub name: String,

    /// Free text, e.g. "beginner", "advanced"
    #[schema(example = "advanced")]
    pub level: String,
}

impl From<CreateExperienceRequest> for NewExperience {
    fn from(req: CreateExperienceRequest) -> Self {
        NewExperience {
            company: req.company,
            position: req.position,
            from_date: req.from_date,
            to_date: req.to_date,
            description: req.description,
        }
    }
}

impl From<CreateEducationRequest> for NewEducation {
    fn from(req: CreateEducationRequest) -> Self {
        NewEducation {
            institution: req.institution,
            degree: req.degree,
            from_date: req.from_date,
            to_date: req.to_date,
        }
    }
}

impl From<CreateSkillRequest> for NewSkill {
    fn from(req: CreateSkillRequest) -> Self {
        NewSkill {
            name: req.name,
            level: req.level,
        }
    }
}

impl TryFrom<CreateCvRequest> for CreateCvCommand {
    type Error = CreateCvCommandError;

    fn try_from(req: CreateCvRequest) -> Result<Self, Self::Error> {
        CreateCvCommand::new(
            req.name,
            req.email,
            req.experiences.into_iter().map(Into::into).collect(),
            req.educations.into_iter().map(Into::into).collect(),
            req.skills.into_iter().map(Into::into).collect(),
        )
    }
}

fn map_command_error(err: CreateCvCommandError) -> HttpResponse {
    let message = err.to_string();
    match err {
        CreateCvCommandError::EmptyName => ApiResponse::bad_request("EMPTY_NAME", &message),
        CreateCvCommandError::EmptyEmail => ApiResponse::bad_request("EMPTY_EMAIL", &message),
        CreateCvCommandError::EmptyField { .. } => {
            ApiResponse::bad_request("EMPTY_FIELD", &message)
        }
        CreateCvCommandError::FieldTooLong { .. } => {
            ApiResponse::bad_request("VALIDATION_ERROR", &message)
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Create a CV
///
/// Stores the CV and every supplied entry in one transaction. Either all of
/// it is persisted or none of it.
#[utoipa::path(
    post,
    path = "/api/cvs",
    tag = "cvs",
    request_body = CreateCvRequest,
    responses(
        (status = 201, description = "CV created", body = inline(SuccessResponse<Cv>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Email already used by another CV", body = ErrorResponse),
        (status = 422, description = "Entry references a missing CV", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/cvs")]
pub async fn create_cv_handler(
    req: web::Json<CreateCvRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateCvCommand::try_from(req.into_inner()) {
        Ok(cmd) => cmd,
        Err(e) => {
            warn!(error = %e, "Rejected CV payload");
            return map_command_error(e);
        }
    };

    match data.cv.create.execute(command).await {
        Ok(cv) => ApiResponse::created(cv),

        Err(CreateCvError::EmailAlreadyExists) => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "A CV with this email already exists")
        }

        Err(CreateCvError::IntegrityViolation(msg)) => {
            error!("Integrity violation creating CV: {}", msg);
            ApiResponse::unprocessable("INTEGRITY_ERROR", "CV entries violate data integrity")
        }

        Err(CreateCvError::RepositoryError(e)) => {
            error!("Repository error creating CV: {}", e);
            ApiResponse::internal_error()
        }
    }
}
