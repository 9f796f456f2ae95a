//! Domain error to HTTP response mapping
//!
//! Every error response shares the `{success:false, message}` shape. Status
//! mapping: validation failures 400, conflicts 409, not-found 404,
//! everything internal 500 with a generic message (full detail stays in the
//! server log).

use actix_web::HttpResponse;

use vf_core::errors::{AuthError, DomainError};
use vf_shared::types::response::ErrorBody;

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::EmailAlreadyRegistered => {
                log::warn!("Conflict: {}", auth_error);
                HttpResponse::Conflict().json(ErrorBody::new(auth_error.to_string()))
            }
            AuthError::InvalidOrExpiredCode => {
                // Reported as a plain 400; the message never distinguishes
                // wrong from expired
                HttpResponse::BadRequest().json(ErrorBody::new(auth_error.to_string()))
            }
        },
        DomainError::ValidationErr(validation_error) => {
            HttpResponse::BadRequest().json(ErrorBody::new(validation_error.to_string()))
        }
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorBody::new(message))
        }
        DomainError::NotFound { resource } => {
            HttpResponse::NotFound().json(ErrorBody::new(format!("{} not found", resource)))
        }
        DomainError::Internal { message } => {
            // Log the detail, return a generic message to the client
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError()
                .json(ErrorBody::new("An internal error occurred"))
        }
    }
}
