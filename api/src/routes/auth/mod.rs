//! Authentication route handlers
//!
//! This module contains the email-verification and registration endpoints:
//! - Sending a verification code
//! - Confirming a verification code
//! - Registering an account

pub mod register;
pub mod send_verification;
pub mod verify_email;

use std::sync::Arc;

use vf_core::repositories::{UserRepository, VerificationCodeRepository};
use vf_core::services::auth::{AuthService, EmailServiceTrait, PasswordHasherTrait};

/// Application state that holds shared services
pub struct AppState<V, U, E, P>
where
    V: VerificationCodeRepository,
    U: UserRepository,
    E: EmailServiceTrait,
    P: PasswordHasherTrait,
{
    pub auth_service: Arc<AuthService<V, U, E, P>>,
    pub user_repository: Arc<U>,
}
