// src/modules/cv/application/ports/outgoing/cv_repository.rs

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::modules::cv::domain::entities::{Cv, CvId};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Child payloads carry no id and no owner: both are assigned when the
/// aggregate is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExperience {
    pub company: String,
    pub position: String,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEducation {
    pub institution: String,
    pub degree: String,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSkill {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone)]
pub struct CreateCvData {
    pub name: String,
    pub email: String,
    pub experiences: Vec<NewExperience>,
    pub educations: Vec<NewEducation>,
    pub skills: Vec<NewSkill>,
}

/// Patch semantics: `None` keeps the stored value, `Some` replaces it.
///
/// Only root scalars are patchable. Child collections are owned by the
/// aggregate and are never touched by a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchCvData {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl PatchCvData {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CvRepositoryError {
    #[error("CV not found")]
    NotFound,

    /// Unique email violated at INSERT or UPDATE time.
    #[error("Email already exists")]
    EmailAlreadyExists,

    /// A child row referenced a CV that does not exist.
    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side, whole aggregate in one transaction)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CvRepository: Send + Sync {
    /// Persists the root and every child atomically.
    async fn create_cv(&self, data: CreateCvData) -> Result<Cv, CvRepositoryError>;

    /// Applies the present fields and returns the refreshed aggregate.
    async fn patch_cv(&self, cv_id: CvId, data: PatchCvData) -> Result<Cv, CvRepositoryError>;
}
