//! Application factory
//!
//! This module provides the factory for creating the Actix-web application
//! with all routes and middleware wired against an `AppState`.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::{cors::create_cors, security::SecurityHeaders};
use crate::routes::auth::{
    register::register, send_verification::send_verification, verify_email::verify_email,
};
use crate::routes::users::list_users;
use crate::routes::AppState;

use vf_core::repositories::{UserRepository, VerificationCodeRepository};
use vf_core::services::auth::{EmailServiceTrait, PasswordHasherTrait};
use vf_shared::types::response::ErrorBody;

/// Create and configure the application with all dependencies
pub fn create_app<V, U, E, P>(
    app_state: web::Data<AppState<V, U, E, P>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    V: VerificationCodeRepository + 'static,
    U: UserRepository + 'static,
    E: EmailServiceTrait + 'static,
    P: PasswordHasherTrait + 'static,
{
    let cors = create_cors();
    let security = SecurityHeaders::new();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware (order matters: security first, then CORS, then logging)
        .wrap(Logger::default())
        .wrap(cors)
        .wrap(security)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route(
                            "/send-verification",
                            web::post().to(send_verification::<V, U, E, P>),
                        )
                        .route("/verify-email", web::post().to(verify_email::<V, U, E, P>))
                        .route("/register", web::post().to(register::<V, U, E, P>)),
                )
                .route("/users", web::get().to(list_users::<V, U, E, P>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "veriflow-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new("The requested resource was not found"))
}
