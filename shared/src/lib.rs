//! Shared utilities and common types for the Veriflow server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response structures
//! - Validation utilities
//! - Common type definitions

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, DatabaseConfig, EmailConfig, Environment, ServerConfig,
};
pub use types::response::ErrorBody;
pub use utils::validation;
