use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::cv::application::ports::outgoing::CvQueryError;
use crate::modules::cv::domain::entities::{Education, Experience, Skill};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCvEntryError {
    #[error("Entry not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CvQueryError> for GetCvEntryError {
    fn from(err: CvQueryError) -> Self {
        match err {
            CvQueryError::NotFound => GetCvEntryError::NotFound,
            CvQueryError::DatabaseError(msg) => GetCvEntryError::RepositoryError(msg),
        }
    }
}

/// Lookup of a single child record by its own identifier.
#[async_trait]
pub trait GetCvEntryUseCase: Send + Sync {
    async fn experience(&self, experience_id: Uuid) -> Result<Experience, GetCvEntryError>;

    async fn education(&self, education_id: Uuid) -> Result<Education, GetCvEntryError>;

    async fn skill(&self, skill_id: Uuid) -> Result<Skill, GetCvEntryError>;
}
