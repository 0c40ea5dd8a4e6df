use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

// CV
use crate::cv::adapter::incoming::web::routes::{
    CreateCvRequest, CreateEducationRequest, CreateExperienceRequest, CreateSkillRequest,
    UpdateCvRequest,
};
use crate::cv::domain::entities::{Cv, CvId, Education, Experience, Skill};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CV Service API",
        version = "0.1.0",
        description = "Create, read, update and delete CVs with their experiences, educations and skills"
    ),
    paths(
        // CV endpoints
        crate::cv::adapter::incoming::web::routes::create_cv_handler,
        crate::cv::adapter::incoming::web::routes::get_cv_handler,
        crate::cv::adapter::incoming::web::routes::update_cv_handler,
        crate::cv::adapter::incoming::web::routes::hard_delete_cv_handler,

        // Entry lookups
        crate::cv::adapter::incoming::web::routes::get_experience_handler,
        crate::cv::adapter::incoming::web::routes::get_education_handler,
        crate::cv::adapter::incoming::web::routes::get_skill_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<Cv>,
            ErrorResponse,
            ErrorDetail,

            // CV DTOs
            CreateCvRequest,
            CreateExperienceRequest,
            CreateEducationRequest,
            CreateSkillRequest,
            UpdateCvRequest,
            Cv,
            CvId,
            Experience,
            Education,
            Skill
        )
    ),
    tags(
        (name = "cvs", description = "CV/Resume management endpoints"),
    )
)]
pub struct ApiDoc;
