//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Veriflow
//! application, providing concrete implementations for external services:
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Email**: Verification email delivery (SendGrid API, console mock)
//! - **Security**: bcrypt password hashing

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Email delivery module - external email providers
pub mod email;

/// Security module - password hashing
pub mod security;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration container for infrastructure services

    use serde::{Deserialize, Serialize};
    use vf_shared::config::{DatabaseConfig, EmailConfig};

    /// Infrastructure configuration settings
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct InfrastructureConfig {
        /// Database configuration
        pub database: DatabaseConfig,
        /// Email delivery configuration
        pub email: EmailConfig,
    }

    impl Default for InfrastructureConfig {
        fn default() -> Self {
            Self {
                database: DatabaseConfig::default(),
                email: EmailConfig::default(),
            }
        }
    }

    impl InfrastructureConfig {
        /// Load infrastructure configuration from environment variables
        pub fn from_env() -> Self {
            dotenvy::dotenv().ok(); // Load .env file if present
            Self {
                database: DatabaseConfig::from_env(),
                email: EmailConfig::from_env(),
            }
        }
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email delivery error
    #[error("Email service error: {0}")]
    Email(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
