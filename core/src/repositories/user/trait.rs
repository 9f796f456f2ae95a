//! User repository trait defining the interface for account persistence.
//!
//! This module defines the repository pattern interface for User entities.
//! The trait is async-first and uses Result types for proper error handling.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while keeping the
/// abstraction boundary between domain and infrastructure layers.
///
/// Email uniqueness is a store-level invariant: `create` must reject a user
/// whose email is already present, even if the caller skipped the
/// `exists_by_email` pre-check.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user in the repository
    ///
    /// # Arguments
    /// * `user` - The User entity to persist
    ///
    /// # Returns
    /// * `Ok(User)` - The created user with any database-generated fields
    /// * `Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))` - The
    ///   email is already taken
    /// * `Err(DomainError)` - Database or other error occurred
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by their email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with the given email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Check if a user exists with the given email address
    ///
    /// # Returns
    /// * `Ok(true)` - User exists
    /// * `Ok(false)` - User does not exist
    /// * `Err(DomainError)` - Database error occurred
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// List all registered users
    ///
    /// # Returns
    /// * `Ok(Vec<User>)` - All users, ordered by creation time where the
    ///   store supports it
    /// * `Err(DomainError)` - Database error occurred
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;
}
