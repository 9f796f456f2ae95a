//! MySQL implementation of the VerificationCodeRepository trait.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE email_verifications (
//!     id         BIGINT       NOT NULL AUTO_INCREMENT PRIMARY KEY,
//!     email      VARCHAR(255) NOT NULL,
//!     code       CHAR(6)      NOT NULL,
//!     created_at DATETIME(6)  NOT NULL,
//!     expires_at DATETIME(6)  NOT NULL,
//!     KEY idx_email (email)
//! );
//! ```
//!
//! No uniqueness constraint on `email`: at most one active row per address
//! is maintained by the orchestrator's delete-before-insert. Lookups always
//! filter on `expires_at > NOW()` so expired rows are invisible without
//! needing an active purge.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use tracing::debug;

use vf_core::domain::entities::verification_code::VerificationCode;
use vf_core::errors::DomainError;
use vf_core::repositories::VerificationCodeRepository;
use vf_core::services::auth::mask_email;

/// MySQL implementation of VerificationCodeRepository
pub struct MySqlVerificationCodeRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlVerificationCodeRepository {
    /// Create a new MySQL verification code repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VerificationCodeRepository for MySqlVerificationCodeRepository {
    async fn save(&self, code: VerificationCode) -> Result<VerificationCode, DomainError> {
        let query = r#"
            INSERT INTO email_verifications (email, code, created_at, expires_at)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&code.email)
            .bind(&code.code)
            .bind(code.created_at)
            .bind(code.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(&code.email),
                    error = %e,
                    "Failed to store verification code"
                );
                DomainError::Internal {
                    message: format!("Failed to store verification code: {}", e),
                }
            })?;

        debug!(
            email = %mask_email(&code.email),
            "Stored verification code"
        );

        Ok(code)
    }

    async fn find_active(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let query = r#"
            SELECT email, code, created_at, expires_at
            FROM email_verifications
            WHERE email = ? AND code = ? AND expires_at > NOW()
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to look up verification code: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(VerificationCode {
                email: row.try_get("email").map_err(|e| DomainError::Internal {
                    message: format!("Failed to get email: {}", e),
                })?,
                code: row.try_get("code").map_err(|e| DomainError::Internal {
                    message: format!("Failed to get code: {}", e),
                })?,
                created_at: row
                    .try_get("created_at")
                    .map_err(|e| DomainError::Internal {
                        message: format!("Failed to get created_at: {}", e),
                    })?,
                expires_at: row
                    .try_get("expires_at")
                    .map_err(|e| DomainError::Internal {
                        message: format!("Failed to get expires_at: {}", e),
                    })?,
            })),
            None => {
                debug!(
                    email = %mask_email(email),
                    "No valid verification code found"
                );
                Ok(None)
            }
        }
    }

    async fn delete_by_email(&self, email: &str) -> Result<u64, DomainError> {
        let query = "DELETE FROM email_verifications WHERE email = ?";

        let result = sqlx::query(query)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(email),
                    error = %e,
                    "Failed to delete verification codes"
                );
                DomainError::Internal {
                    message: format!("Failed to delete verification codes: {}", e),
                }
            })?;

        Ok(result.rows_affected())
    }

    async fn delete_expired(&self) -> Result<u64, DomainError> {
        let query = "DELETE FROM email_verifications WHERE expires_at <= NOW()";

        let result = sqlx::query(query)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to clean up expired codes: {}", e),
            })?;

        let deleted = result.rows_affected();
        if deleted > 0 {
            tracing::info!(deleted = deleted, "Cleaned up expired verification codes");
        }

        Ok(deleted)
    }
}
