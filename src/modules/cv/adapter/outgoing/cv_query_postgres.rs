use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, TransactionTrait};
use std::sync::Arc;
use uuid::Uuid;

use super::cv_loader::load_cv;
use super::sea_orm_entity::{educations, experiences, skills};
use crate::modules::cv::application::ports::outgoing::{CvQuery, CvQueryError};
use crate::modules::cv::domain::entities::{Cv, CvId, Education, Experience, Skill};

#[derive(Debug, Clone)]
pub struct CvQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CvQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> CvQueryError {
        CvQueryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl CvQuery for CvQueryPostgres {
    async fn get_by_id(&self, cv_id: CvId) -> Result<Cv, CvQueryError> {
        // Four reads; one transaction keeps them on the same snapshot.
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let loaded = match load_cv(&txn, cv_id.as_uuid()).await {
            Ok(loaded) => loaded,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        txn.commit().await.map_err(Self::map_db_err)?;

        loaded.ok_or(CvQueryError::NotFound)
    }

    async fn get_experience(&self, experience_id: Uuid) -> Result<Experience, CvQueryError> {
        experiences::Entity::find_by_id(experience_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .map(|m| m.to_domain())
            .ok_or(CvQueryError::NotFound)
    }

    async fn get_education(&self, education_id: Uuid) -> Result<Education, CvQueryError> {
        educations::Entity::find_by_id(education_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .map(|m| m.to_domain())
            .ok_or(CvQueryError::NotFound)
    }

    async fn get_skill(&self, skill_id: Uuid) -> Result<Skill, CvQueryError> {
        skills::Entity::find_by_id(skill_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .map(|m| m.to_domain())
            .ok_or(CvQueryError::NotFound)
    }
}
