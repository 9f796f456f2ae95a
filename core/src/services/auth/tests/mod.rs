//! Tests for the auth service

mod mocks;
mod service_tests;
