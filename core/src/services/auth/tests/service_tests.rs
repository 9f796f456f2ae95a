//! Behavioral tests for the auth service

use std::sync::Arc;

use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{MockUserRepository, MockVerificationCodeRepository, UserRepository};
use crate::services::auth::config::AuthServiceConfig;
use crate::services::auth::service::AuthService;
use crate::services::auth::types::RegisterRequest;

use super::mocks::{MockEmailService, MockPasswordHasher};

type TestAuthService =
    AuthService<MockVerificationCodeRepository, MockUserRepository, MockEmailService, MockPasswordHasher>;

struct TestContext {
    service: TestAuthService,
    verification_repository: Arc<MockVerificationCodeRepository>,
    user_repository: Arc<MockUserRepository>,
    email_service: Arc<MockEmailService>,
}

fn setup(config: AuthServiceConfig) -> TestContext {
    setup_with_email_failure(config, false)
}

fn setup_with_email_failure(config: AuthServiceConfig, email_fails: bool) -> TestContext {
    let verification_repository = Arc::new(MockVerificationCodeRepository::new());
    let user_repository = Arc::new(MockUserRepository::new());
    let email_service = Arc::new(MockEmailService::new(email_fails));
    let password_hasher = Arc::new(MockPasswordHasher::new(false));

    let service = AuthService::new(
        verification_repository.clone(),
        user_repository.clone(),
        email_service.clone(),
        password_hasher,
        config,
    );

    TestContext {
        service,
        verification_repository,
        user_repository,
        email_service,
    }
}

fn valid_register_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        password: "password123".to_string(),
        name: "Test User".to_string(),
        phone: "010-1234-5678".to_string(),
        terms_agreed: Some(true),
    }
}

// ---- send_verification_code ----

#[tokio::test]
async fn send_code_returns_six_digit_code_and_delivers_it() {
    let ctx = setup(AuthServiceConfig::default());

    let result = ctx
        .service
        .send_verification_code("user@example.com")
        .await
        .unwrap();

    let code = &result.verification_code.code;
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(result.expires_in_seconds, 300);
    assert!(result.message_id.is_some());
    assert_eq!(
        ctx.email_service.get_sent_code("user@example.com"),
        Some(code.clone())
    );
}

#[tokio::test]
async fn send_code_rejects_empty_and_malformed_email() {
    let ctx = setup(AuthServiceConfig::default());

    let err = ctx.service.send_verification_code("").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::RequiredField { field: "email" })
    ));

    let err = ctx
        .service
        .send_verification_code("not-an-email")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::InvalidEmail)
    ));
}

#[tokio::test]
async fn send_code_rejects_registered_email() {
    let ctx = setup(AuthServiceConfig::default());
    ctx.service
        .register(valid_register_request("taken@example.com"))
        .await
        .unwrap();

    let err = ctx
        .service
        .send_verification_code("taken@example.com")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::EmailAlreadyRegistered)
    ));
    assert_eq!(ctx.email_service.sent_count(), 0);
}

#[tokio::test]
async fn send_code_succeeds_when_email_delivery_fails() {
    let ctx = setup_with_email_failure(AuthServiceConfig::default(), true);

    let result = ctx
        .service
        .send_verification_code("user@example.com")
        .await
        .unwrap();

    // The code is persisted and usable even though delivery failed
    assert!(result.message_id.is_none());
    assert!(ctx
        .service
        .verify_code("user@example.com", &result.verification_code.code)
        .await
        .unwrap());
}

// ---- verify_code ----

#[tokio::test]
async fn code_verifies_exactly_once() {
    let ctx = setup(AuthServiceConfig::default());

    let result = ctx
        .service
        .send_verification_code("user@example.com")
        .await
        .unwrap();
    let code = result.verification_code.code;

    assert!(ctx.service.verify_code("user@example.com", &code).await.unwrap());
    // Single-use: the record is gone after the first success
    assert!(!ctx.service.verify_code("user@example.com", &code).await.unwrap());
    assert!(ctx.verification_repository.is_empty().await);
}

#[tokio::test]
async fn verify_fails_for_wrong_code_but_leaves_record_for_retry() {
    let ctx = setup(AuthServiceConfig::default());

    let result = ctx
        .service
        .send_verification_code("user@example.com")
        .await
        .unwrap();
    let code = result.verification_code.code;
    let wrong = if code == "000000" { "111111" } else { "000000" };

    assert!(!ctx.service.verify_code("user@example.com", wrong).await.unwrap());
    assert!(!ctx.service.verify_code("user@example.com", wrong).await.unwrap());
    // The still-valid record survives failed attempts
    assert!(ctx.service.verify_code("user@example.com", &code).await.unwrap());
}

#[tokio::test]
async fn verify_fails_after_expiry_even_with_exact_code() {
    let config = AuthServiceConfig {
        code_expiration_minutes: 0,
        ..Default::default()
    };
    let ctx = setup(config);

    let result = ctx
        .service
        .send_verification_code("user@example.com")
        .await
        .unwrap();
    let code = result.verification_code.code;

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    assert!(!ctx.service.verify_code("user@example.com", &code).await.unwrap());
}

#[tokio::test]
async fn resend_invalidates_previous_code() {
    let ctx = setup(AuthServiceConfig::default());

    let first = ctx
        .service
        .send_verification_code("user@example.com")
        .await
        .unwrap();
    let second = ctx
        .service
        .send_verification_code("user@example.com")
        .await
        .unwrap();

    // Only one active row remains after the resend
    assert_eq!(ctx.verification_repository.len().await, 1);

    if first.verification_code.code != second.verification_code.code {
        assert!(!ctx
            .service
            .verify_code("user@example.com", &first.verification_code.code)
            .await
            .unwrap());
    }
    assert!(ctx
        .service
        .verify_code("user@example.com", &second.verification_code.code)
        .await
        .unwrap());
}

#[tokio::test]
async fn verify_rejects_missing_fields() {
    let ctx = setup(AuthServiceConfig::default());

    let err = ctx.service.verify_code("", "123456").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::RequiredField { field: "email" })
    ));

    let err = ctx
        .service
        .verify_code("user@example.com", "")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::RequiredField { field: "code" })
    ));
}

#[tokio::test]
async fn verify_short_circuits_on_malformed_code() {
    let ctx = setup(AuthServiceConfig::default());
    ctx.service
        .send_verification_code("user@example.com")
        .await
        .unwrap();

    assert!(!ctx.service.verify_code("user@example.com", "12345").await.unwrap());
    assert!(!ctx.service.verify_code("user@example.com", "abcdef").await.unwrap());
    assert!(!ctx
        .service
        .verify_code("user@example.com", "1234567")
        .await
        .unwrap());
}

#[tokio::test]
async fn verify_is_scoped_to_the_email() {
    let ctx = setup(AuthServiceConfig::default());

    let result = ctx
        .service
        .send_verification_code("user@example.com")
        .await
        .unwrap();

    assert!(!ctx
        .service
        .verify_code("other@example.com", &result.verification_code.code)
        .await
        .unwrap());
}

// ---- register ----

#[tokio::test]
async fn register_persists_user_with_hashed_password_and_default_role() {
    let ctx = setup(AuthServiceConfig::default());

    let user = ctx
        .service
        .register(valid_register_request("user@example.com"))
        .await
        .unwrap();

    assert_eq!(user.email, "user@example.com");
    assert_eq!(user.password_hash, "hashed::password123");
    assert_eq!(user.role.as_str(), "USER");
    assert!(user.terms_agreed);

    let stored = ctx
        .user_repository
        .find_by_email("user@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, user.id);
}

#[tokio::test]
async fn register_password_length_boundary() {
    let ctx = setup(AuthServiceConfig::default());

    let mut request = valid_register_request("user@example.com");
    request.password = "1234567".to_string();
    let err = ctx.service.register(request).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::PasswordTooShort { min: 8 })
    ));

    let mut request = valid_register_request("user@example.com");
    request.password = "12345678".to_string();
    assert!(ctx.service.register(request).await.is_ok());
}

#[tokio::test]
async fn register_rejects_missing_fields_in_order() {
    let ctx = setup(AuthServiceConfig::default());

    let mut request = valid_register_request("user@example.com");
    request.email = String::new();
    // Email is checked first even when other fields are also missing
    request.name = String::new();
    let err = ctx.service.register(request).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::RequiredField { field: "email" })
    ));

    let mut request = valid_register_request("user@example.com");
    request.password = String::new();
    let err = ctx.service.register(request).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::RequiredField { field: "password" })
    ));

    let mut request = valid_register_request("user@example.com");
    request.name = "   ".to_string();
    let err = ctx.service.register(request).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::RequiredField { field: "name" })
    ));

    let mut request = valid_register_request("user@example.com");
    request.phone = String::new();
    let err = ctx.service.register(request).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::RequiredField { field: "phone" })
    ));
}

#[tokio::test]
async fn register_rejects_unaccepted_terms() {
    let ctx = setup(AuthServiceConfig::default());

    let mut request = valid_register_request("user@example.com");
    request.terms_agreed = Some(false);
    let err = ctx.service.register(request).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::TermsNotAccepted)
    ));

    let mut request = valid_register_request("user@example.com");
    request.terms_agreed = None;
    let err = ctx.service.register(request).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::TermsNotAccepted)
    ));
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let ctx = setup(AuthServiceConfig::default());

    ctx.service
        .register(valid_register_request("user@example.com"))
        .await
        .unwrap();

    let err = ctx
        .service
        .register(valid_register_request("user@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::EmailAlreadyRegistered)
    ));
}

#[tokio::test]
async fn register_succeeds_without_prior_verification() {
    // Verification and registration are only loosely coupled by client-side
    // sequencing; the server does not require a confirmed code. Kept as-is
    // pending product clarification (see DESIGN.md).
    let ctx = setup(AuthServiceConfig::default());

    let user = ctx
        .service
        .register(valid_register_request("unverified@example.com"))
        .await
        .unwrap();
    assert_eq!(user.email, "unverified@example.com");
}

#[tokio::test]
async fn register_reports_hasher_failure_as_internal_error() {
    let verification_repository = Arc::new(MockVerificationCodeRepository::new());
    let user_repository = Arc::new(MockUserRepository::new());
    let email_service = Arc::new(MockEmailService::new(false));
    let password_hasher = Arc::new(MockPasswordHasher::new(true));

    let service = AuthService::new(
        verification_repository,
        user_repository.clone(),
        email_service,
        password_hasher,
        AuthServiceConfig::default(),
    );

    let err = service
        .register(valid_register_request("user@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Internal { .. }));
    // No partial state left behind
    assert!(!user_repository
        .exists_by_email("user@example.com")
        .await
        .unwrap());
}

// ---- is_email_registered ----

#[tokio::test]
async fn is_email_registered_reflects_store_state() {
    let ctx = setup(AuthServiceConfig::default());

    assert!(!ctx
        .service
        .is_email_registered("user@example.com")
        .await
        .unwrap());
    ctx.service
        .register(valid_register_request("user@example.com"))
        .await
        .unwrap();
    assert!(ctx
        .service
        .is_email_registered("user@example.com")
        .await
        .unwrap());
}
