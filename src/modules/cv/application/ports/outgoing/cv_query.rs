// src/modules/cv/application/ports/outgoing/cv_query.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::cv::domain::entities::{Cv, CvId, Education, Experience, Skill};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CvQueryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side, joins child tables)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CvQuery: Send + Sync {
    /// Root plus all three child collections, read consistently.
    async fn get_by_id(&self, cv_id: CvId) -> Result<Cv, CvQueryError>;

    async fn get_experience(&self, experience_id: Uuid) -> Result<Experience, CvQueryError>;

    async fn get_education(&self, education_id: Uuid) -> Result<Education, CvQueryError>;

    async fn get_skill(&self, skill_id: Uuid) -> Result<Skill, CvQueryError>;
}
