use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::sea_orm_entity::{cvs, educations, experiences, skills};
use crate::modules::cv::application::ports::outgoing::{CvArchiver, CvArchiverError};
use crate::modules::cv::domain::entities::CvId;

#[derive(Debug, Clone)]
pub struct CvArchiverPostgres {
    db: Arc<DatabaseConnection>,
}

impl CvArchiverPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> CvArchiverError {
        CvArchiverError::DatabaseError(e.to_string())
    }

    /// Children are removed explicitly so the cascade does not depend on
    /// the backend honouring `ON DELETE CASCADE`.
    async fn delete_aggregate<C>(conn: &C, cv_id: Uuid) -> Result<(), CvArchiverError>
    where
        C: ConnectionTrait,
    {
        cvs::Entity::find_by_id(cv_id)
            .one(conn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(CvArchiverError::NotFound)?;

        let experiences = experiences::Entity::delete_many()
            .filter(experiences::Column::CvId.eq(cv_id))
            .exec(conn)
            .await
            .map_err(Self::map_db_err)?;

        let educations = educations::Entity::delete_many()
            .filter(educations::Column::CvId.eq(cv_id))
            .exec(conn)
            .await
            .map_err(Self::map_db_err)?;

        let skills = skills::Entity::delete_many()
            .filter(skills::Column::CvId.eq(cv_id))
            .exec(conn)
            .await
            .map_err(Self::map_db_err)?;

        let root = cvs::Entity::delete_by_id(cv_id)
            .exec(conn)
            .await
            .map_err(Self::map_db_err)?;

        if root.rows_affected == 0 {
            return Err(CvArchiverError::NotFound);
        }

        debug!(
            %cv_id,
            experiences = experiences.rows_affected,
            educations = educations.rows_affected,
            skills = skills.rows_affected,
            "CV aggregate deleted"
        );

        Ok(())
    }
}

#[async_trait]
impl CvArchiver for CvArchiverPostgres {
    async fn hard_delete(&self, cv_id: CvId) -> Result<(), CvArchiverError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        if let Err(e) = Self::delete_aggregate(&txn, cv_id.as_uuid()).await {
            let _ = txn.rollback().await;
            return Err(e);
        }

        txn.commit().await.map_err(Self::map_db_err)
    }
}
