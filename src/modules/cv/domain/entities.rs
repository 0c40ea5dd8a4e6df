use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Identity
// ──────────────────────────────────────────────────────────
//

/// Identifier of a CV aggregate root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct CvId(Uuid);

impl CvId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for CvId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CvId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<CvId> for Uuid {
    fn from(id: CvId) -> Self {
        id.0
    }
}

impl fmt::Display for CvId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

//
// ──────────────────────────────────────────────────────────
// Aggregate
// ──────────────────────────────────────────────────────────
//

/// A CV together with every record it owns.
///
/// Children never exist outside their CV: each one carries the owning
/// `cv_id`, which is fixed at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Cv {
    pub id: CvId,
    pub name: String,
    pub email: String,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    pub skills: Vec<Skill>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub id: Uuid,
    pub cv_id: CvId,
    pub company: String,
    pub position: String,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Education {
    pub id: Uuid,
    pub cv_id: CvId,
    pub institution: String,
    pub degree: String,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub id: Uuid,
    pub cv_id: CvId,
    pub name: String,
    /// Free text, e.g. "beginner", "intermediate", "advanced".
    pub level: String,
}
