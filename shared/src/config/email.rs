//! Outbound email delivery configuration

use serde::{Deserialize, Serialize};

/// Email delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Email provider ("sendgrid", "mock")
    pub provider: String,

    /// Provider API key
    pub api_key: String,

    /// Sender address for outbound mail
    pub from_address: String,

    /// Sender display name
    pub from_name: String,

    /// Timeout for provider API requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            api_key: String::new(),
            from_address: "no-reply@veriflow.local".to_string(),
            from_name: "Veriflow".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    ///
    /// `EMAIL_PROVIDER` selects the implementation; the mock provider is the
    /// default so a bare development environment works without credentials.
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("EMAIL_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
            api_key: std::env::var("EMAIL_API_KEY").unwrap_or_default(),
            from_address: std::env::var("EMAIL_FROM_ADDRESS")
                .unwrap_or_else(|_| "no-reply@veriflow.local".to_string()),
            from_name: std::env::var("EMAIL_FROM_NAME").unwrap_or_else(|_| "Veriflow".to_string()),
            request_timeout_secs: std::env::var("EMAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}
