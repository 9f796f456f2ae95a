//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// In-memory user repository for testing and development
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        // Store-level uniqueness invariant
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Auth(AuthError::EmailAlreadyRegistered));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.created_at);
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(email: &str) -> User {
        User::new(
            email.to_string(),
            "hash".to_string(),
            "Test".to_string(),
            "010-0000-0000".to_string(),
            true,
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MockUserRepository::new();
        let user = repo.create(sample_user("a@example.com")).await.unwrap();

        let found = repo.find_by_email("a@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));
        assert!(repo.exists_by_email("a@example.com").await.unwrap());
        assert!(!repo.exists_by_email("b@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = MockUserRepository::new();
        repo.create(sample_user("a@example.com")).await.unwrap();

        let result = repo.create(sample_user("a@example.com")).await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))
        ));
    }

    #[tokio::test]
    async fn test_find_all() {
        let repo = MockUserRepository::new();
        repo.create(sample_user("a@example.com")).await.unwrap();
        repo.create(sample_user("b@example.com")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
