//! Verification code repository trait.
//!
//! Defines the persistence interface for verification codes. The query
//! shapes are deliberately narrow: lookup always filters on email AND code
//! AND non-expired; deletion is by email only.

use async_trait::async_trait;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::DomainError;

/// Repository trait for verification code persistence
#[async_trait]
pub trait VerificationCodeRepository: Send + Sync {
    /// Persist a verification code
    ///
    /// Does not replace existing rows for the same email; the orchestrator
    /// deletes stale codes before inserting a fresh one.
    async fn save(&self, code: VerificationCode) -> Result<VerificationCode, DomainError>;

    /// Find a non-expired code matching both email and code
    ///
    /// # Returns
    /// * `Ok(Some(VerificationCode))` - A matching, still-valid record exists
    /// * `Ok(None)` - Wrong code, wrong email, or the record has expired;
    ///   the cases are indistinguishable by design
    /// * `Err(DomainError)` - Database error occurred
    async fn find_active(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<VerificationCode>, DomainError>;

    /// Delete all codes for an email address
    ///
    /// Used both to supersede old codes on resend and to consume a code
    /// after successful verification.
    ///
    /// # Returns
    /// * `Ok(count)` - Number of rows removed
    async fn delete_by_email(&self, email: &str) -> Result<u64, DomainError>;

    /// Delete all expired codes (maintenance)
    ///
    /// Expired rows are otherwise left in place; nothing in the verification
    /// flow depends on this being called.
    async fn delete_expired(&self) -> Result<u64, DomainError>;
}
