use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Set,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use super::cv_loader::{attach_children, sort_children};
use super::db_error::{classify, DbFailure};
use super::sea_orm_entity::{cvs, educations, experiences, skills};
use crate::modules::cv::application::ports::outgoing::{
    CreateCvData, CvRepository, CvRepositoryError, PatchCvData,
};
use crate::modules::cv::domain::entities::{Cv, CvId};

#[derive(Debug, Clone)]
pub struct CvRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CvRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> CvRepositoryError {
        match classify(&e) {
            DbFailure::UniqueViolation => CvRepositoryError::EmailAlreadyExists,
            DbFailure::ForeignKeyViolation(msg) => CvRepositoryError::IntegrityViolation(msg),
            DbFailure::Other(msg) => CvRepositoryError::DatabaseError(msg),
        }
    }

    /// Root first, then every child, all through the same transaction.
    async fn insert_aggregate<C>(conn: &C, data: CreateCvData) -> Result<Cv, CvRepositoryError>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        let cv_id = Uuid::new_v4();

        let root = cvs::ActiveModel {
            id: Set(cv_id),
            name: Set(data.name),
            email: Set(data.email),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(conn)
        .await
        .map_err(Self::map_db_err)?;

        let mut experience_rows = Vec::with_capacity(data.experiences.len());
        for exp in data.experiences {
            let row = experiences::ActiveModel::from_new(cv_id, exp)
                .insert(conn)
                .await
                .map_err(Self::map_db_err)?;
            experience_rows.push(row.to_domain());
        }

        let mut education_rows = Vec::with_capacity(data.educations.len());
        for edu in data.educations {
            let row = educations::ActiveModel::from_new(cv_id, edu)
                .insert(conn)
                .await
                .map_err(Self::map_db_err)?;
            education_rows.push(row.to_domain());
        }

        let mut skill_rows = Vec::with_capacity(data.skills.len());
        for skill in data.skills {
            let row = skills::ActiveModel::from_new(cv_id, skill)
                .insert(conn)
                .await
                .map_err(Self::map_db_err)?;
            skill_rows.push(row.to_domain());
        }

        let mut cv = root.to_domain(experience_rows, education_rows, skill_rows);
        sort_children(&mut cv);
        Ok(cv)
    }

    async fn apply_patch<C>(
        conn: &C,
        cv_id: Uuid,
        data: PatchCvData,
    ) -> Result<Cv, CvRepositoryError>
    where
        C: ConnectionTrait,
    {
        let existing = cvs::Entity::find_by_id(cv_id)
            .one(conn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(CvRepositoryError::NotFound)?;

        let name_changed = data.name.as_ref().is_some_and(|n| *n != existing.name);
        let email_changed = data.email.as_ref().is_some_and(|e| *e != existing.email);

        if !name_changed && !email_changed {
            return attach_children(conn, existing)
                .await
                .map_err(Self::map_db_err);
        }

        let mut active: cvs::ActiveModel = existing.into();
        if let Some(name) = data.name {
            active.name = Set(name);
        }
        if let Some(email) = data.email {
            active.email = Set(email);
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(conn).await.map_err(Self::map_db_err)?;

        attach_children(conn, updated)
            .await
            .map_err(Self::map_db_err)
    }
}

#[async_trait]
impl CvRepository for CvRepositoryPostgres {
    async fn create_cv(&self, data: CreateCvData) -> Result<Cv, CvRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        match Self::insert_aggregate(&txn, data).await {
            Ok(cv) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(cv)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    error!(error = %rollback_err, "rollback failed after CV insert error");
                }
                Err(e)
            }
        }
    }

    async fn patch_cv(&self, cv_id: CvId, data: PatchCvData) -> Result<Cv, CvRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        match Self::apply_patch(&txn, cv_id.as_uuid(), data).await {
            Ok(cv) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(cv)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }
}
