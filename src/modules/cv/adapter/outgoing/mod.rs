mod cv_loader;
mod db_error;
pub(crate) mod sea_orm_entity;

mod cv_repository_postgres;
pub use cv_repository_postgres::CvRepositoryPostgres;

mod cv_query_postgres;
pub use cv_query_postgres::CvQueryPostgres;

mod cv_archiver_postgres;
pub use cv_archiver_postgres::CvArchiverPostgres;
