pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_table_cvs;
mod m20260301_000002_create_table_experiences;
mod m20260301_000003_create_table_educations;
mod m20260301_000004_create_table_skills;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_table_cvs::Migration),
            Box::new(m20260301_000002_create_table_experiences::Migration),
            Box::new(m20260301_000003_create_table_educations::Migration),
            Box::new(m20260301_000004_create_table_skills::Migration),
        ]
    }
}
