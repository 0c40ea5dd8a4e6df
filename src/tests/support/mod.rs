pub mod app_state_builder;
pub mod cv_fixtures;
pub mod sqlite_db;
pub mod stubs;
