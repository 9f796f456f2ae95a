//! Capability traits for email delivery and password hashing

use async_trait::async_trait;

/// Trait for email delivery integration
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send a verification code to an email address
    ///
    /// Returns a provider message id on success. Callers treat delivery as
    /// best-effort; a failure must not abort the surrounding operation.
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String>;

    /// Check if the email address format is valid
    fn is_valid_email(&self, email: &str) -> bool;
}

/// Trait for one-way adaptive password hashing
#[async_trait]
pub trait PasswordHasherTrait: Send + Sync {
    /// Hash a plaintext password into an opaque string
    async fn hash(&self, plain: &str) -> Result<String, String>;

    /// Verify a plaintext password against a stored hash
    ///
    /// Not exercised by the registration flow, but part of the capability
    /// contract for a future login flow.
    async fn verify(&self, plain: &str, hash: &str) -> Result<bool, String>;
}
