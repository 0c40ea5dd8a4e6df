use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::cv::application::ports::incoming::use_cases::{
    CreateCvCommand, CreateCvError, CreateCvUseCase,
};
use crate::modules::cv::application::ports::outgoing::{CvRepository, CvRepositoryError};
use crate::modules::cv::domain::entities::Cv;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateCvService<R>
where
    R: CvRepository,
{
    repository: R,
}

impl<R> CreateCvService<R>
where
    R: CvRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCvUseCase for CreateCvService<R>
where
    R: CvRepository + Send + Sync,
{
    async fn execute(&self, command: CreateCvCommand) -> Result<Cv, CreateCvError> {
        let cv = self
            .repository
            .create_cv(command.into_data())
            .await
            .map_err(|e| match e {
                CvRepositoryError::EmailAlreadyExists => CreateCvError::EmailAlreadyExists,
                CvRepositoryError::IntegrityViolation(msg) => {
                    CreateCvError::IntegrityViolation(msg)
                }
                CvRepositoryError::DatabaseError(msg) => CreateCvError::RepositoryError(msg),
                // Create never looks a CV up
                CvRepositoryError::NotFound => CreateCvError::RepositoryError(
                    "unexpected not-found while creating CV".to_string(),
                ),
            })
            .inspect_err(|e| warn!(error = %e, "CV creation failed"))?;

        info!(
            cv_id = %cv.id,
            experiences = cv.experiences.len(),
            educations = cv.educations.len(),
            skills = cv.skills.len(),
            "CV created"
        );

        Ok(cv)
    }
}
