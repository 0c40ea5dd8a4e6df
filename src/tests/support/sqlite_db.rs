use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;

/// Fresh in-memory SQLite database with the full schema applied.
///
/// The pool is capped at one connection: every connection to
/// `sqlite::memory:` opens its own empty database.
pub async fn sqlite_db() -> Arc<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("failed to open in-memory sqlite");

    Migrator::up(&db, None)
        .await
        .expect("failed to migrate in-memory sqlite");

    Arc::new(db)
}
