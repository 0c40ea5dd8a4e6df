mod create_cv;
mod get_cv;
mod get_cv_entry;
mod hard_delete_cv;
mod patch_cv;

pub use create_cv::*;
pub use get_cv::*;
pub use get_cv_entry::*;
pub use hard_delete_cv::*;
pub use patch_cv::*;
