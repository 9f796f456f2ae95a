//! Security implementations

pub mod password;

pub use password::BcryptPasswordHasher;
