//! Business services

pub mod auth;

pub use auth::{
    AuthService, AuthServiceConfig, EmailServiceTrait, PasswordHasherTrait, RegisterRequest,
    SendCodeResult,
};
