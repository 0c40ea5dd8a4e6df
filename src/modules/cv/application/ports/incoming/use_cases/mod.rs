mod create_cv;
mod get_cv;
mod get_cv_entry;
mod hard_delete_cv;
mod patch_cv;
mod text_field;

pub use create_cv::{CreateCvCommand, CreateCvCommandError, CreateCvError, CreateCvUseCase};
pub use get_cv::{GetCvError, GetCvUseCase};
pub use get_cv_entry::{GetCvEntryError, GetCvEntryUseCase};
pub use hard_delete_cv::{HardDeleteCvError, HardDeleteCvUseCase};
pub use patch_cv::{PatchCvCommand, PatchCvCommandError, PatchCvError, PatchCvUseCase};
