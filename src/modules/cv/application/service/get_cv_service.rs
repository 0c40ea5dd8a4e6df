use async_trait::async_trait;

use crate::modules::cv::application::ports::incoming::use_cases::{GetCvError, GetCvUseCase};
use crate::modules::cv::application::ports::outgoing::{CvQuery, CvQueryError};
use crate::modules::cv::domain::entities::{Cv, CvId};

pub struct GetCvService<Q>
where
    Q: CvQuery,
{
    query: Q,
}

impl<Q> GetCvService<Q>
where
    Q: CvQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCvUseCase for GetCvService<Q>
where
    Q: CvQuery + Send + Sync,
{
    async fn execute(&self, cv_id: CvId) -> Result<Cv, GetCvError> {
        self.query.get_by_id(cv_id).await.map_err(|e| match e {
            CvQueryError::NotFound => GetCvError::NotFound,
            CvQueryError::DatabaseError(msg) => GetCvError::RepositoryError(msg),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cv::domain::entities::{Education, Experience, Skill};
    use chrono::Utc;
    use uuid::Uuid;

    struct MockCvQuery {
        result: Result<Cv, CvQueryError>,
    }

    #[async_trait]
    impl CvQuery for MockCvQuery {
        async fn get_by_id(&self, _cv_id: CvId) -> Result<Cv, CvQueryError> {
            self.result.clone()
        }

        async fn get_experience(&self, _id: Uuid) -> Result<Experience, CvQueryError> {
            unimplemented!()
        }

        async fn get_education(&self, _id: Uuid) -> Result<Education, CvQueryError> {
            unimplemented!()
        }

        async fn get_skill(&self, _id: Uuid) -> Result<Skill, CvQueryError> {
            unimplemented!()
        }
    }

    fn sample_cv(id: CvId) -> Cv {
        Cv {
            id,
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            experiences: vec![],
            educations: vec![],
            skills: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_execute_returns_aggregate() {
        let cv_id = CvId::new();
        let service = GetCvService::new(MockCvQuery {
            result: Ok(sample_cv(cv_id)),
        });

        let cv = service.execute(cv_id).await.unwrap();

        assert_eq!(cv.id, cv_id);
        assert_eq!(cv.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_execute_maps_not_found() {
        let service = GetCvService::new(MockCvQuery {
            result: Err(CvQueryError::NotFound),
        });

        let err = service.execute(CvId::new()).await.unwrap_err();

        assert!(matches!(err, GetCvError::NotFound));
    }

    #[tokio::test]
    async fn test_execute_maps_database_error() {
        let service = GetCvService::new(MockCvQuery {
            result: Err(CvQueryError::DatabaseError("timeout".to_string())),
        });

        let err = service.execute(CvId::new()).await.unwrap_err();

        assert!(matches!(err, GetCvError::RepositoryError(msg) if msg == "timeout"));
    }
}
