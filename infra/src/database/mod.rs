//! Database access layer
//!
//! MySQL implementations of the core repository traits, plus connection
//! pool management.

pub mod connection;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{MySqlUserRepository, MySqlVerificationCodeRepository};
