use crate::cv::application::cv_use_cases::CvUseCases;
use crate::cv::application::ports::incoming::use_cases::{
    CreateCvUseCase, GetCvEntryUseCase, GetCvUseCase, HardDeleteCvUseCase, PatchCvUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Builds an `AppState` whose use cases are stubs unless a test swaps one in.
pub struct TestAppStateBuilder {
    create_cv: Arc<dyn CreateCvUseCase + Send + Sync>,
    get_cv: Arc<dyn GetCvUseCase + Send + Sync>,
    patch_cv: Arc<dyn PatchCvUseCase + Send + Sync>,
    hard_delete_cv: Arc<dyn HardDeleteCvUseCase + Send + Sync>,
    get_cv_entry: Arc<dyn GetCvEntryUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            create_cv: Arc::new(StubCreateCvUseCase),
            get_cv: Arc::new(StubGetCvUseCase::not_found()),
            patch_cv: Arc::new(StubPatchCvUseCase),
            hard_delete_cv: Arc::new(StubHardDeleteCvUseCase::success()),
            get_cv_entry: Arc::new(StubGetCvEntryUseCase::empty()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_cv(mut self, uc: impl CreateCvUseCase + Send + Sync + 'static) -> Self {
        self.create_cv = Arc::new(uc);
        self
    }

    pub fn with_get_cv(mut self, uc: impl GetCvUseCase + Send + Sync + 'static) -> Self {
        self.get_cv = Arc::new(uc);
        self
    }

    pub fn with_patch_cv(mut self, uc: impl PatchCvUseCase + Send + Sync + 'static) -> Self {
        self.patch_cv = Arc::new(uc);
        self
    }

    pub fn with_hard_delete_cv(
        mut self,
        uc: impl HardDeleteCvUseCase + Send + Sync + 'static,
    ) -> Self {
        self.hard_delete_cv = Arc::new(uc);
        self
    }

    pub fn with_get_cv_entry(
        mut self,
        uc: impl GetCvEntryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_cv_entry = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            cv: CvUseCases {
                create: self.create_cv,
                get: self.get_cv,
                patch: self.patch_cv,
                hard_delete: self.hard_delete_cv,
                get_entry: self.get_cv_entry,
            },
        })
    }
}
