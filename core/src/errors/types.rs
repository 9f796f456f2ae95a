//! Error type definitions for verification and registration operations.
//!
//! The presentation layer maps these variants onto HTTP statuses and the
//! shared `{success:false, message}` response shape.

use thiserror::Error;

/// Authentication and registration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The email address already has a registered account (conflict)
    #[error("This email address is already registered")]
    EmailAlreadyRegistered,

    /// The verification code did not match or has expired
    ///
    /// Deliberately does not distinguish the two cases; callers must not be
    /// able to probe whether a code exists.
    #[error("Verification code is invalid or has expired")]
    InvalidOrExpiredCode,
}

/// Input validation errors
///
/// Each registration field failure gets its own variant so rejections carry
/// a specific, per-field reason.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: &'static str },

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("Invalid email address format")]
    InvalidEmail,

    #[error("You must agree to the terms of service")]
    TermsNotAccepted,
}
