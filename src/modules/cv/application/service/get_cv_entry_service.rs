use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::cv::application::ports::incoming::use_cases::{
    GetCvEntryError, GetCvEntryUseCase,
};
use crate::modules::cv::application::ports::outgoing::CvQuery;
use crate::modules::cv::domain::entities::{Education, Experience, Skill};

pub struct GetCvEntryService<Q>
where
    Q: CvQuery,
{
    query: Q,
}

impl<Q> GetCvEntryService<Q>
where
    Q: CvQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCvEntryUseCase for GetCvEntryService<Q>
where
    Q: CvQuery + Send + Sync,
{
    async fn experience(&self, experience_id: Uuid) -> Result<Experience, GetCvEntryError> {
        Ok(self.query.get_experience(experience_id).await?)
    }

    async fn education(&self, education_id: Uuid) -> Result<Education, GetCvEntryError> {
        Ok(self.query.get_education(education_id).await?)
    }

    async fn skill(&self, skill_id: Uuid) -> Result<Skill, GetCvEntryError> {
        Ok(self.query.get_skill(skill_id).await?)
    }
}
