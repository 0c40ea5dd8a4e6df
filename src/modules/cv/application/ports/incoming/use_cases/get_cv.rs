use async_trait::async_trait;

use crate::modules::cv::domain::entities::{Cv, CvId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCvError {
    #[error("CV not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCvUseCase: Send + Sync {
    async fn execute(&self, cv_id: CvId) -> Result<Cv, GetCvError>;
}
