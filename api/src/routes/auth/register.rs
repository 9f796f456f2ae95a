use actix_web::{web, HttpResponse};

use crate::dto::auth::{RegisterRequest, RegisterResponse};
use crate::handlers::error::handle_domain_error;

use vf_core::repositories::{UserRepository, VerificationCodeRepository};
use vf_core::services::auth::{
    mask_email, EmailServiceTrait, PasswordHasherTrait, RegisterRequest as RegisterData,
};

use super::AppState;

/// Handler for POST /api/auth/register
///
/// Registers a new account. Validation runs in order with a distinct reason
/// per field (email, password length, name, phone, terms agreement), then
/// the password is hashed and the account persisted with the default role.
///
/// Note: registration does not require a prior successful email
/// verification; the two flows are sequenced client-side only.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "user@example.com",
///     "password": "at-least-8-chars",
///     "name": "Jane Doe",
///     "phone": "010-1234-5678",
///     "terms_agreed": true
/// }
/// ```
///
/// # Responses
/// - 201 Created: `{"success": true, "message": ..., "user_id": ...}`
/// - 400 Bad Request: per-field validation failure
/// - 409 Conflict: email already registered
/// - 500 Internal Server Error: hashing or persistence failure
pub async fn register<V, U, E, P>(
    state: web::Data<AppState<V, U, E, P>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    V: VerificationCodeRepository + 'static,
    U: UserRepository + 'static,
    E: EmailServiceTrait + 'static,
    P: PasswordHasherTrait + 'static,
{
    log::info!(
        "Processing registration request for {}",
        mask_email(&request.email)
    );

    let request = request.into_inner();
    let data = RegisterData {
        email: request.email,
        password: request.password,
        name: request.name,
        phone: request.phone,
        terms_agreed: request.terms_agreed,
    };

    match state.auth_service.register(data).await {
        Ok(user) => HttpResponse::Created().json(RegisterResponse {
            success: true,
            message: "Registration completed".to_string(),
            user_id: user.id,
        }),
        Err(error) => handle_domain_error(error),
    }
}
