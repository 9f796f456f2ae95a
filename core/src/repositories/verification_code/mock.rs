//! Mock implementation of VerificationCodeRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::DomainError;

use super::trait_::VerificationCodeRepository;

/// In-memory verification code repository for testing and development
///
/// Multiple rows per email are allowed, matching the relational store; the
/// single-active-code invariant belongs to the orchestrator.
pub struct MockVerificationCodeRepository {
    codes: Arc<RwLock<Vec<VerificationCode>>>,
}

impl MockVerificationCodeRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            codes: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of stored rows, expired ones included (test helper)
    pub async fn len(&self) -> usize {
        self.codes.read().await.len()
    }

    /// Whether the store is empty (test helper)
    pub async fn is_empty(&self) -> bool {
        self.codes.read().await.is_empty()
    }
}

impl Default for MockVerificationCodeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationCodeRepository for MockVerificationCodeRepository {
    async fn save(&self, code: VerificationCode) -> Result<VerificationCode, DomainError> {
        let mut codes = self.codes.write().await;
        codes.push(code.clone());
        Ok(code)
    }

    async fn find_active(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let codes = self.codes.read().await;
        Ok(codes
            .iter()
            .find(|c| c.email == email && !c.is_expired() && c.matches(code))
            .cloned())
    }

    async fn delete_by_email(&self, email: &str) -> Result<u64, DomainError> {
        let mut codes = self.codes.write().await;
        let before = codes.len();
        codes.retain(|c| c.email != email);
        Ok((before - codes.len()) as u64)
    }

    async fn delete_expired(&self) -> Result<u64, DomainError> {
        let mut codes = self.codes.write().await;
        let before = codes.len();
        codes.retain(|c| !c.is_expired());
        Ok((before - codes.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_find_active() {
        let repo = MockVerificationCodeRepository::new();
        let code = VerificationCode::new("user@example.com".to_string());
        let secret = code.code.clone();
        repo.save(code).await.unwrap();

        let found = repo.find_active("user@example.com", &secret).await.unwrap();
        assert!(found.is_some());

        // Wrong email and wrong code both come back empty
        assert!(repo
            .find_active("other@example.com", &secret)
            .await
            .unwrap()
            .is_none());
        let wrong = if secret == "000000" { "111111" } else { "000000" };
        assert!(repo
            .find_active("user@example.com", wrong)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_expired_codes_are_invisible() {
        let repo = MockVerificationCodeRepository::new();
        let code =
            VerificationCode::new_with_expiration("user@example.com".to_string(), 0);
        let secret = code.code.clone();
        repo.save(code).await.unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        assert!(repo
            .find_active("user@example.com", &secret)
            .await
            .unwrap()
            .is_none());

        // The row is still there until cleanup runs
        assert_eq!(repo.len().await, 1);
        assert_eq!(repo.delete_expired().await.unwrap(), 1);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_by_email() {
        let repo = MockVerificationCodeRepository::new();
        repo.save(VerificationCode::new("a@example.com".to_string()))
            .await
            .unwrap();
        repo.save(VerificationCode::new("a@example.com".to_string()))
            .await
            .unwrap();
        repo.save(VerificationCode::new("b@example.com".to_string()))
            .await
            .unwrap();

        assert_eq!(repo.delete_by_email("a@example.com").await.unwrap(), 2);
        assert_eq!(repo.len().await, 1);
        assert_eq!(repo.delete_by_email("a@example.com").await.unwrap(), 0);
    }
}
