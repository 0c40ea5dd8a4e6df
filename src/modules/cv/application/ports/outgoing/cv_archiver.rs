// src/modules/cv/application/ports/outgoing/cv_archiver.rs

use async_trait::async_trait;

use crate::modules::cv::domain::entities::CvId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CvArchiverError {
    #[error("CV not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CvArchiver: Send + Sync {
    /// Permanently deletes a CV and everything it owns.
    /// Returns `NotFound` if the CV doesn't exist.
    async fn hard_delete(&self, cv_id: CvId) -> Result<(), CvArchiverError>;
}
