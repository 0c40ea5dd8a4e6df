use async_trait::async_trait;
use uuid::Uuid;

use crate::cv::application::ports::incoming::use_cases::{
    CreateCvCommand, CreateCvError, CreateCvUseCase, GetCvEntryError, GetCvEntryUseCase,
    GetCvError, GetCvUseCase, HardDeleteCvError, HardDeleteCvUseCase, PatchCvCommand,
    PatchCvError, PatchCvUseCase,
};
use crate::cv::domain::entities::{Cv, CvId, Education, Experience, Skill};

#[derive(Default, Clone)]
pub struct StubCreateCvUseCase;

#[async_trait]
impl CreateCvUseCase for StubCreateCvUseCase {
    async fn execute(&self, _command: CreateCvCommand) -> Result<Cv, CreateCvError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubPatchCvUseCase;

#[async_trait]
impl PatchCvUseCase for StubPatchCvUseCase {
    async fn execute(&self, _cv_id: CvId, _command: PatchCvCommand) -> Result<Cv, PatchCvError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Clone)]
pub struct StubGetCvUseCase {
    result: Result<Cv, GetCvError>,
}

impl StubGetCvUseCase {
    pub fn success(cv: Cv) -> Self {
        Self { result: Ok(cv) }
    }

    pub fn error(err: GetCvError) -> Self {
        Self { result: Err(err) }
    }

    pub fn not_found() -> Self {
        Self::error(GetCvError::NotFound)
    }
}

#[async_trait]
impl GetCvUseCase for StubGetCvUseCase {
    async fn execute(&self, _cv_id: CvId) -> Result<Cv, GetCvError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubHardDeleteCvUseCase {
    result: Result<(), HardDeleteCvError>,
}

impl StubHardDeleteCvUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn error(err: HardDeleteCvError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl HardDeleteCvUseCase for StubHardDeleteCvUseCase {
    async fn execute(&self, _cv_id: CvId) -> Result<(), HardDeleteCvError> {
        self.result.clone()
    }
}

/// Serves child records out of a fixed set, by id.
#[derive(Default, Clone)]
pub struct StubGetCvEntryUseCase {
    experiences: Vec<Experience>,
    educations: Vec<Education>,
    skills: Vec<Skill>,
}

impl StubGetCvEntryUseCase {
    pub fn from_cv(cv: &Cv) -> Self {
        Self {
            experiences: cv.experiences.clone(),
            educations: cv.educations.clone(),
            skills: cv.skills.clone(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GetCvEntryUseCase for StubGetCvEntryUseCase {
    async fn experience(&self, experience_id: Uuid) -> Result<Experience, GetCvEntryError> {
        self.experiences
            .iter()
            .find(|e| e.id == experience_id)
            .cloned()
            .ok_or(GetCvEntryError::NotFound)
    }

    async fn education(&self, education_id: Uuid) -> Result<Education, GetCvEntryError> {
        self.educations
            .iter()
            .find(|e| e.id == education_id)
            .cloned()
            .ok_or(GetCvEntryError::NotFound)
    }

    async fn skill(&self, skill_id: Uuid) -> Result<Skill, GetCvEntryError> {
        self.skills
            .iter()
            .find(|s| s.id == skill_id)
            .cloned()
            .ok_or(GetCvEntryError::NotFound)
    }
}
