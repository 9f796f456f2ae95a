use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use vf_api::app::create_app;
use vf_api::routes::AppState;
use vf_core::services::auth::{AuthService, AuthServiceConfig};
use vf_infra::database::{DatabasePool, MySqlUserRepository, MySqlVerificationCodeRepository};
use vf_infra::email::create_email_service;
use vf_infra::security::BcryptPasswordHasher;
use vf_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Veriflow API server");

    // Load configuration
    let config = AppConfig::from_env();
    let auth_config = AuthServiceConfig::from_env();

    if auth_config.expose_code_in_response && config.environment.is_production() {
        log::warn!(
            "EXPOSE_CODE_IN_RESPONSE is enabled in production; \
             verification codes will appear in API responses"
        );
    }

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    // Initialize database connections
    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to create database pool")?;

    // Create repository implementations
    let verification_repository = Arc::new(MySqlVerificationCodeRepository::new(
        pool.get_pool().clone(),
    ));
    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));

    // Create capability implementations
    let email_service = Arc::new(create_email_service(&config.email));
    let password_hasher = Arc::new(BcryptPasswordHasher::new());

    // Wire the auth service
    let auth_service = Arc::new(AuthService::new(
        verification_repository,
        user_repository.clone(),
        email_service,
        password_hasher,
        auth_config,
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        user_repository,
    });

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind to {}", bind_address))?
        .run()
        .await
        .context("server error")
}
