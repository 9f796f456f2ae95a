//! Email Delivery Module
//!
//! Implementations of the core `EmailServiceTrait` for delivering
//! verification codes:
//!
//! - **SendGrid**: Production delivery via the SendGrid v3 API
//! - **Mock**: Console output for development and testing
//!
//! Delivery is best-effort from the orchestrator's point of view; these
//! implementations report failures but never panic.

pub mod mock;
pub mod sendgrid;

pub use mock::MockEmailService;
pub use sendgrid::SendGridEmailService;

use async_trait::async_trait;
use vf_core::services::auth::EmailServiceTrait;
use vf_shared::config::EmailConfig;

/// Email service selected at startup from configuration
///
/// Wraps the concrete providers so the provider choice can be made at
/// runtime while the application state stays generic over one type.
pub enum AnyEmailService {
    SendGrid(SendGridEmailService),
    Mock(MockEmailService),
}

#[async_trait]
impl EmailServiceTrait for AnyEmailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        match self {
            AnyEmailService::SendGrid(s) => s.send_verification_code(email, code).await,
            AnyEmailService::Mock(s) => s.send_verification_code(email, code).await,
        }
    }

    fn is_valid_email(&self, email: &str) -> bool {
        match self {
            AnyEmailService::SendGrid(s) => s.is_valid_email(email),
            AnyEmailService::Mock(s) => s.is_valid_email(email),
        }
    }
}

/// Create an email service based on configuration
///
/// Returns the provider named by `config.provider`, falling back to the
/// mock service when a provider fails to initialize (e.g. missing API key)
/// so a development environment always starts.
pub fn create_email_service(config: &EmailConfig) -> AnyEmailService {
    match config.provider.as_str() {
        "sendgrid" => match SendGridEmailService::new(config.clone()) {
            Ok(service) => AnyEmailService::SendGrid(service),
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize SendGrid email service");
                tracing::warn!("Falling back to mock email service");
                AnyEmailService::Mock(MockEmailService::new())
            }
        },
        "mock" => AnyEmailService::Mock(MockEmailService::new()),
        other => {
            tracing::warn!(
                provider = other,
                "Unknown email provider; falling back to mock email service"
            );
            AnyEmailService::Mock(MockEmailService::new())
        }
    }
}
