pub mod cv_archiver;
pub mod cv_query;
pub mod cv_repository;

pub use cv_archiver::{CvArchiver, CvArchiverError};
pub use cv_query::{CvQuery, CvQueryError};
pub use cv_repository::{
    CreateCvData, CvRepository, CvRepositoryError, NewEducation, NewExperience, NewSkill,
    PatchCvData,
};
