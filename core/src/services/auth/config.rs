//! Configuration for the auth service

use crate::domain::entities::verification_code::DEFAULT_EXPIRATION_MINUTES;

/// Minimum accepted password length
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Configuration for the auth service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Number of minutes before a verification code expires
    pub code_expiration_minutes: i64,

    /// Minimum password length accepted at registration
    pub min_password_length: usize,

    /// Whether the send-verification response body includes the generated
    /// code. Development aid only; MUST stay off in production since it
    /// defeats the point of verifying mailbox control.
    pub expose_code_in_response: bool,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            expose_code_in_response: false,
        }
    }
}

impl AuthServiceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            code_expiration_minutes: std::env::var("CODE_EXPIRATION_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_EXPIRATION_MINUTES),
            min_password_length: std::env::var("MIN_PASSWORD_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MIN_PASSWORD_LENGTH),
            expose_code_in_response: std::env::var("EXPOSE_CODE_IN_RESPONSE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}
