mod create_cv_service;
mod get_cv_entry_service;
mod get_cv_service;
mod hard_delete_cv_service;
mod patch_cv_service;

pub use create_cv_service::CreateCvService;
pub use get_cv_entry_service::GetCvEntryService;
pub use get_cv_service::GetCvService;
pub use hard_delete_cv_service::HardDeleteCvService;
pub use patch_cv_service::PatchCvService;
