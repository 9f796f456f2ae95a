use actix_web::{web, HttpResponse};

use crate::dto::auth::{VerifyEmailRequest, VerifyEmailResponse};
use crate::handlers::error::handle_domain_error;

use vf_core::errors::AuthError;
use vf_core::repositories::{UserRepository, VerificationCodeRepository};
use vf_core::services::auth::{mask_email, EmailServiceTrait, PasswordHasherTrait};

use super::AppState;

/// Handler for POST /api/auth/verify-email
///
/// Confirms the verification code sent to an email address. A matching code
/// is consumed on success; a failed attempt reveals nothing about whether
/// the code was wrong or expired.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "code": "123456" }
/// ```
///
/// # Responses
/// - 200 OK: `{"success": true, "message": ..., "verified": true}`
/// - 400 Bad Request: missing fields, or invalid/expired code
/// - 500 Internal Server Error: persistence failure
pub async fn verify_email<V, U, E, P>(
    state: web::Data<AppState<V, U, E, P>>,
    request: web::Json<VerifyEmailRequest>,
) -> HttpResponse
where
    V: VerificationCodeRepository + 'static,
    U: UserRepository + 'static,
    E: EmailServiceTrait + 'static,
    P: PasswordHasherTrait + 'static,
{
    log::info!(
        "Processing verify-email request for {}",
        mask_email(&request.email)
    );

    match state
        .auth_service
        .verify_code(&request.email, &request.code)
        .await
    {
        Ok(true) => HttpResponse::Ok().json(VerifyEmailResponse {
            success: true,
            message: "Email verified successfully".to_string(),
            verified: true,
        }),
        Ok(false) => handle_domain_error(AuthError::InvalidOrExpiredCode.into()),
        Err(error) => handle_domain_error(error),
    }
}
