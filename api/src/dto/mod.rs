//! Request and response data transfer objects

pub mod auth;
pub mod user;

pub use auth::{
    RegisterRequest, RegisterResponse, SendVerificationRequest, SendVerificationResponse,
    VerifyEmailRequest, VerifyEmailResponse,
};
pub use user::UserSummary;
