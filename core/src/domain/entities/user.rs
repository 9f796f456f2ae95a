//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to an account
///
/// Every account created through registration gets the default `User` role;
/// there is no role selection in the registration flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// A regular registered user
    User,
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::User
    }
}

impl UserRole {
    /// String form as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
        }
    }
}

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address (unique per account)
    pub email: String,

    /// Opaque password hash; never the plaintext password
    pub password_hash: String,

    /// Display name
    pub name: String,

    /// Contact phone number
    pub phone: String,

    /// Whether the user accepted the terms of service
    pub terms_agreed: bool,

    /// Account role, fixed to the default at registration
    pub role: UserRole,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User with a generated id and the default role
    pub fn new(
        email: String,
        password_hash: String,
        name: String,
        phone: String,
        terms_agreed: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            phone,
            terms_agreed,
            role: UserRole::default(),
            created_at: now,
            updated_at: now,
        }
    }
}
