//! Mock Email Service Implementation
//!
//! Logs verification emails to the console instead of sending them. Used in
//! development (no provider credentials needed) and in tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use vf_core::services::auth::{mask_email, EmailServiceTrait};
use vf_shared::utils::validation::validators;

/// Mock email service for development and testing
///
/// This implementation:
/// - Prints messages to the console
/// - Validates email addresses
/// - Generates mock message ids
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if !validators::is_valid_email(email) {
            return Err(format!("Invalid email address: {}", mask_email(email)));
        }

        if self.simulate_failure {
            warn!(
                email = %mask_email(email),
                "Mock email service simulating delivery failure"
            );
            return Err("Simulated email delivery failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            // Console output for development - this is where the code shows
            // up when no real provider is configured
            println!("\n{}", "=".repeat(60));
            println!("MOCK EMAIL SERVICE - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", email);
            println!("Message ID: {}", message_id);
            println!("Verification code: {}", code);
            println!("Valid for: 5 minutes");
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "email_service",
            provider = "mock",
            email = %mask_email(email),
            message_id = %message_id,
            "Verification email sent (mock)"
        );

        Ok(message_id)
    }

    fn is_valid_email(&self, email: &str) -> bool {
        validators::is_valid_email(email)
    }
}
