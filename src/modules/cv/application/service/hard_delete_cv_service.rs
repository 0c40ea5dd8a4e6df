use async_trait::async_trait;
use tracing::info;

use crate::modules::cv::application::ports::incoming::use_cases::{
    HardDeleteCvError, HardDeleteCvUseCase,
};
use crate::modules::cv::application::ports::outgoing::CvArchiver;
use crate::modules::cv::domain::entities::CvId;

pub struct HardDeleteCvService<A>
where
    A: CvArchiver,
{
    archiver: A,
}

impl<A> HardDeleteCvService<A>
where
    A: CvArchiver,
{
    pub fn new(archiver: A) -> Self {
        Self { archiver }
    }
}

#[async_trait]
impl<A> HardDeleteCvUseCase for HardDeleteCvService<A>
where
    A: CvArchiver + Send + Sync,
{
    async fn execute(&self, cv_id: CvId) -> Result<(), HardDeleteCvError> {
        self.archiver.hard_delete(cv_id).await?;

        info!(%cv_id, "CV permanently deleted");
        Ok(())
    }
}
