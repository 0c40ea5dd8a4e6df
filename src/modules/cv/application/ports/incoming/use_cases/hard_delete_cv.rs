use async_trait::async_trait;

use crate::modules::cv::application::ports::outgoing::CvArchiverError;
use crate::modules::cv::domain::entities::CvId;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum HardDeleteCvError {
    #[error("CV not found")]
    CvNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CvArchiverError> for HardDeleteCvError {
    fn from(err: CvArchiverError) -> Self {
        match err {
            CvArchiverError::NotFound => HardDeleteCvError::CvNotFound,
            CvArchiverError::DatabaseError(msg) => HardDeleteCvError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait HardDeleteCvUseCase: Send + Sync {
    async fn execute(&self, cv_id: CvId) -> Result<(), HardDeleteCvError>;
}
