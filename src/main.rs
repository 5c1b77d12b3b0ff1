pub mod modules;
pub use modules::portfolio;
pub mod health;
pub mod shared;

use crate::portfolio::adapter::incoming::web::extractors::admin::AdminConfig;
use crate::portfolio::adapter::outgoing::PortfolioStorePostgres;
use crate::portfolio::application::fallback::FallbackContent;
use crate::portfolio::application::use_cases::{
    add_certificate::{AddCertificateUseCase, IAddCertificateUseCase},
    delete_certificate::{DeleteCertificateUseCase, IDeleteCertificateUseCase},
    get_certificates::{GetCertificatesUseCase, IGetCertificatesUseCase},
    get_education::{GetEducationUseCase, IGetEducationUseCase},
    get_personal_info::{GetPersonalInfoUseCase, IGetPersonalInfoUseCase},
    get_projects::{GetProjectsUseCase, IGetProjectsUseCase},
    get_skills::{GetSkillsUseCase, IGetSkillsUseCase},
    update_certificate::{IUpdateCertificateUseCase, UpdateCertificateUseCase},
    update_profile_picture::{IUpdateProfilePictureUseCase, UpdateProfilePictureUseCase},
    update_resume::{IUpdateResumeUrlUseCase, UpdateResumeUrlUseCase},
};
use crate::shared::api::{custom_json_config, route_not_found};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub get_personal_info: Arc<dyn IGetPersonalInfoUseCase + Send + Sync>,
    pub get_education: Arc<dyn IGetEducationUseCase + Send + Sync>,
    pub get_skills: Arc<dyn IGetSkillsUseCase + Send + Sync>,
    pub get_projects: Arc<dyn IGetProjectsUseCase + Send + Sync>,
    pub get_certificates: Arc<dyn IGetCertificatesUseCase + Send + Sync>,
    pub update_profile_picture: Arc<dyn IUpdateProfilePictureUseCase + Send + Sync>,
    pub update_resume: Arc<dyn IUpdateResumeUrlUseCase + Send + Sync>,
    pub add_certificate: Arc<dyn IAddCertificateUseCase + Send + Sync>,
    pub update_certificate: Arc<dyn IUpdateCertificateUseCase + Send + Sync>,
    pub delete_certificate: Arc<dyn IDeleteCertificateUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let admin_config = AdminConfig::from_env();

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection. The pool is lazy: an unreachable server does not
    // abort startup, reads degrade to fallback content per query instead.
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(10)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(15))
        .acquire_timeout(Duration::from_secs(15))
        .idle_timeout(Duration::from_secs(30))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Invalid database configuration");

    let db_arc = Arc::new(conn);

    let store = PortfolioStorePostgres::new(Arc::clone(&db_arc));
    let fallback = Arc::new(FallbackContent::default());

    let state = AppState {
        get_personal_info: Arc::new(GetPersonalInfoUseCase::new(
            store.clone(),
            Arc::clone(&fallback),
        )),
        get_education: Arc::new(GetEducationUseCase::new(
            store.clone(),
            Arc::clone(&fallback),
        )),
        get_skills: Arc::new(GetSkillsUseCase::new(store.clone(), Arc::clone(&fallback))),
        get_projects: Arc::new(GetProjectsUseCase::new(
            store.clone(),
            Arc::clone(&fallback),
        )),
        get_certificates: Arc::new(GetCertificatesUseCase::new(store.clone())),
        update_profile_picture: Arc::new(UpdateProfilePictureUseCase::new(store.clone())),
        update_resume: Arc::new(UpdateResumeUrlUseCase::new(store.clone())),
        add_certificate: Arc::new(AddCertificateUseCase::new(store.clone())),
        update_certificate: Arc::new(UpdateCertificateUseCase::new(store.clone())),
        delete_certificate: Arc::new(DeleteCertificateUseCase::new(store)),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(admin_config.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .default_service(web::route().to(route_not_found))
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // Portfolio reads
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_personal_info_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_education_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_certificates_handler);
    // Admin-gated writes
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_profile_picture_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_resume_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::add_certificate_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_certificate_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::delete_certificate_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
