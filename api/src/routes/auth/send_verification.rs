use actix_web::{web, HttpResponse};

use crate::dto::auth::{SendVerificationRequest, SendVerificationResponse};
use crate::handlers::error::handle_domain_error;

use vf_core::repositories::{UserRepository, VerificationCodeRepository};
use vf_core::services::auth::{mask_email, EmailServiceTrait, PasswordHasherTrait};

use super::AppState;

/// Handler for POST /api/auth/send-verification
///
/// Generates a verification code for the given email address and delivers
/// it by email (best effort).
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Responses
/// - 200 OK: `{"success": true, "message": ..., "email": ..., "expires_in": 300}`
///   (plus `code` when `expose_code_in_response` is enabled)
/// - 400 Bad Request: missing or malformed email
/// - 409 Conflict: email already registered
/// - 500 Internal Server Error: persistence failure
pub async fn send_verification<V, U, E, P>(
    state: web::Data<AppState<V, U, E, P>>,
    request: web::Json<SendVerificationRequest>,
) -> HttpResponse
where
    V: VerificationCodeRepository + 'static,
    U: UserRepository + 'static,
    E: EmailServiceTrait + 'static,
    P: PasswordHasherTrait + 'static,
{
    log::info!(
        "Processing send-verification request for {}",
        mask_email(&request.email)
    );

    match state.auth_service.send_verification_code(&request.email).await {
        Ok(result) => {
            let expose_code = state.auth_service.config().expose_code_in_response;

            HttpResponse::Ok().json(SendVerificationResponse {
                success: true,
                message: "Verification code sent".to_string(),
                email: request.email.clone(),
                expires_in: result.expires_in_seconds,
                code: expose_code.then(|| result.verification_code.code.clone()),
            })
        }
        Err(error) => handle_domain_error(error),
    }
}
