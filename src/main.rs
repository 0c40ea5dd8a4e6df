pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::cv;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::cv::adapter::outgoing::{CvArchiverPostgres, CvQueryPostgres, CvRepositoryPostgres};
use crate::cv::application::cv_use_cases::CvUseCases;
use crate::cv::application::service::{
    CreateCvService, GetCvEntryService, GetCvService, HardDeleteCvService, PatchCvService,
};
use crate::shared::api::{custom_json_config, custom_path_config};

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub cv: CvUseCases,
}

impl AppState {
    /// Wires every CV use case to the sea-orm adapters sharing `db`.
    pub fn from_db(db: Arc<DatabaseConnection>) -> Self {
        let cv_repo = CvRepositoryPostgres::new(Arc::clone(&db));
        let cv_query = CvQueryPostgres::new(Arc::clone(&db));
        let cv_archiver = CvArchiverPostgres::new(Arc::clone(&db));

        Self {
            cv: CvUseCases {
                create: Arc::new(CreateCvService::new(cv_repo.clone())),
                get: Arc::new(GetCvService::new(cv_query.clone())),
                patch: Arc::new(PatchCvService::new(cv_repo, cv_query.clone())),
                hard_delete: Arc::new(HardDeleteCvService::new(cv_archiver)),
                get_entry: Arc::new(GetCvEntryService::new(cv_query)),
            },
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("invalid configuration")?;
    let server_url = config.server_addr();

    let conn = Database::connect(config.connect_options())
        .await
        .context("failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);
    let state = AppState::from_db(Arc::clone(&db_arc));

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {server_url}"))?
    .run()
    .await
    .context("server error")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // CV
    cfg.service(crate::cv::adapter::incoming::web::routes::create_cv_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::get_cv_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::update_cv_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::hard_delete_cv_handler);
    // CV entries
    cfg.service(crate::cv::adapter::incoming::web::routes::get_experience_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::get_education_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::get_skill_handler);
    // Docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
