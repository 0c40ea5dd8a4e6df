use async_trait::async_trait;
use tracing::{debug, info};

use crate::modules::cv::application::ports::incoming::use_cases::{
    PatchCvCommand, PatchCvError, PatchCvUseCase,
};
use crate::modules::cv::application::ports::outgoing::{
    CvQuery, CvQueryError, CvRepository, CvRepositoryError,
};
use crate::modules::cv::domain::entities::{Cv, CvId};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct PatchCvService<R, Q>
where
    R: CvRepository,
    Q: CvQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> PatchCvService<R, Q>
where
    R: CvRepository,
    Q: CvQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> PatchCvUseCase for PatchCvService<R, Q>
where
    R: CvRepository + Send + Sync,
    Q: CvQuery + Send + Sync,
{
    async fn execute(&self, cv_id: CvId, command: PatchCvCommand) -> Result<Cv, PatchCvError> {
        // Nothing to write: the stored aggregate is the answer.
        if command.is_empty() {
            debug!(%cv_id, "empty patch, returning stored CV");
            return self.query.get_by_id(cv_id).await.map_err(|e| match e {
                CvQueryError::NotFound => PatchCvError::NotFound,
                CvQueryError::DatabaseError(msg) => PatchCvError::RepositoryError(msg),
            });
        }

        let cv = self
            .repository
            .patch_cv(cv_id, command.into_data())
            .await
            .map_err(|e| match e {
                CvRepositoryError::NotFound => PatchCvError::NotFound,
                CvRepositoryError::EmailAlreadyExists => PatchCvError::EmailAlreadyExists,
                CvRepositoryError::IntegrityViolation(msg) => PatchCvError::RepositoryError(msg),
                CvRepositoryError::DatabaseError(msg) => PatchCvError::RepositoryError(msg),
            })?;

        info!(%cv_id, "CV updated");
        Ok(cv)
    }
}
