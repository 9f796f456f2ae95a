//! MySQL implementation of the UserRepository trait.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE users (
//!     id            CHAR(36)     NOT NULL PRIMARY KEY,
//!     email         VARCHAR(255) NOT NULL UNIQUE,
//!     password_hash VARCHAR(255) NOT NULL,
//!     name          VARCHAR(100) NOT NULL,
//!     phone         VARCHAR(30)  NOT NULL,
//!     terms_agreed  BOOLEAN      NOT NULL,
//!     role          VARCHAR(20)  NOT NULL,
//!     created_at    DATETIME(6)  NOT NULL,
//!     updated_at    DATETIME(6)  NOT NULL
//! );
//! ```
//!
//! The UNIQUE constraint on `email` backs the store-level uniqueness
//! invariant; a duplicate insert surfaces as a conflict, not an internal
//! error, so the check-then-insert race degrades cleanly.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use vf_core::domain::entities::user::{User, UserRole};
use vf_core::errors::{AuthError, DomainError};
use vf_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get id: {}", e),
            })?;

        let role_str: String = row
            .try_get("role")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get role: {}", e),
            })?;
        let role = match role_str.as_str() {
            "USER" => UserRole::User,
            other => {
                return Err(DomainError::Internal {
                    message: format!("Unknown role value: {}", other),
                })
            }
        };

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid UUID: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Internal {
                message: format!("Failed to get email: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            name: row.try_get("name").map_err(|e| DomainError::Internal {
                message: format!("Failed to get name: {}", e),
            })?,
            phone: row.try_get("phone").map_err(|e| DomainError::Internal {
                message: format!("Failed to get phone: {}", e),
            })?,
            terms_agreed: row
                .try_get("terms_agreed")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get terms_agreed: {}", e),
                })?,
            role,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }

    /// Whether a sqlx error is a unique-key violation (MySQL error 1062)
    fn is_duplicate_key(error: &sqlx::Error) -> bool {
        matches!(
            error,
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23000")
        )
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, email, password_hash, name, phone,
                terms_agreed, role, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.name)
            .bind(&user.phone)
            .bind(user.terms_agreed)
            .bind(user.role.as_str())
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if Self::is_duplicate_key(&e) {
                    DomainError::Auth(AuthError::EmailAlreadyRegistered)
                } else {
                    DomainError::Internal {
                        message: format!("Failed to create user: {}", e),
                    }
                }
            })?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, name, phone,
                   terms_agreed, role, created_at, updated_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE email = ?
            ) as user_exists
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to check user existence: {}", e),
            })?;

        let exists: i8 = result
            .try_get("user_exists")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get existence result: {}", e),
            })?;

        Ok(exists == 1)
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, name, phone,
                   terms_agreed, role, created_at, updated_at
            FROM users
            ORDER BY created_at
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list users: {}", e),
            })?;

        rows.iter().map(Self::row_to_user).collect()
    }
}
