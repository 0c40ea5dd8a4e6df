use std::sync::Arc;

use crate::modules::cv::application::ports::incoming::use_cases::{
    CreateCvUseCase, GetCvEntryUseCase, GetCvUseCase, HardDeleteCvUseCase, PatchCvUseCase,
};

#[derive(Clone)]
pub struct CvUseCases {
    pub create: Arc<dyn CreateCvUseCase + Send + Sync>,
    pub get: Arc<dyn GetCvUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchCvUseCase + Send + Sync>,
    pub hard_delete: Arc<dyn HardDeleteCvUseCase + Send + Sync>,
    pub get_entry: Arc<dyn GetCvEntryUseCase + Send + Sync>,
}
