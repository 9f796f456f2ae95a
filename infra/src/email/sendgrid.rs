//! SendGrid Email Service Implementation
//!
//! Delivers verification codes through the SendGrid v3 mail send API.
//! Email addresses are masked in every log line.

use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use tracing::{error, info};
use uuid::Uuid;

use vf_core::domain::entities::verification_code::DEFAULT_EXPIRATION_MINUTES;
use vf_core::services::auth::{mask_email, EmailServiceTrait};
use vf_shared::config::EmailConfig;
use vf_shared::utils::validation::validators;

use crate::InfrastructureError;

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// SendGrid email service implementation
pub struct SendGridEmailService {
    client: reqwest::Client,
    config: EmailConfig,
}

impl SendGridEmailService {
    /// Create a new SendGrid email service
    ///
    /// Fails when the API key is missing or the HTTP client cannot be built.
    pub fn new(config: EmailConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "EMAIL_API_KEY not set".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(InfrastructureError::Http)?;

        info!(
            from = %config.from_address,
            "SendGrid email service initialized"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(EmailConfig::from_env())
    }

    fn verification_body(code: &str, expires_in_minutes: i64) -> String {
        format!(
            "Your verification code is {}.\n\nIt expires in {} minutes. \
             If you did not request this code, you can ignore this email.",
            code, expires_in_minutes
        )
    }
}

#[async_trait]
impl EmailServiceTrait for SendGridEmailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        let payload = json!({
            "personalizations": [{
                "to": [{ "email": email }]
            }],
            "from": {
                "email": self.config.from_address,
                "name": self.config.from_name
            },
            "subject": "Your verification code",
            "content": [{
                "type": "text/plain",
                "value": Self::verification_body(code, DEFAULT_EXPIRATION_MINUTES)
            }]
        });

        let response = self
            .client
            .post(SENDGRID_SEND_URL)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(
                    email = %mask_email(email),
                    error = %e,
                    "SendGrid request failed"
                );
                format!("SendGrid request failed: {}", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(
                email = %mask_email(email),
                status = %status,
                "SendGrid rejected the message"
            );
            return Err(format!("SendGrid returned {}: {}", status, body));
        }

        // SendGrid returns the message id in the X-Message-Id header
        let message_id = response
            .headers()
            .get("X-Message-Id")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("sendgrid_{}", Uuid::new_v4()));

        info!(
            email = %mask_email(email),
            message_id = %message_id,
            "Verification email accepted by SendGrid"
        );

        Ok(message_id)
    }

    fn is_valid_email(&self, email: &str) -> bool {
        validators::is_valid_email(email)
    }
}
