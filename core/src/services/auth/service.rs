//! Main auth service implementation

use std::sync::Arc;

use vf_shared::utils::validation::validators;

use crate::domain::entities::user::User;
use crate::domain::entities::verification_code::{VerificationCode, CODE_LENGTH};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{UserRepository, VerificationCodeRepository};

use super::config::AuthServiceConfig;
use super::email_utils::mask_email;
use super::traits::{EmailServiceTrait, PasswordHasherTrait};
use super::types::{RegisterRequest, SendCodeResult};

/// Auth service coordinating email verification and registration
pub struct AuthService<V, U, E, P>
where
    V: VerificationCodeRepository,
    U: UserRepository,
    E: EmailServiceTrait,
    P: PasswordHasherTrait,
{
    /// Verification code repository for code persistence
    verification_repository: Arc<V>,
    /// User repository for account persistence
    user_repository: Arc<U>,
    /// Email service for delivering verification codes
    email_service: Arc<E>,
    /// Password hasher for registration
    password_hasher: Arc<P>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<V, U, E, P> AuthService<V, U, E, P>
where
    V: VerificationCodeRepository,
    U: UserRepository,
    E: EmailServiceTrait,
    P: PasswordHasherTrait,
{
    /// Create a new auth service
    ///
    /// # Arguments
    ///
    /// * `verification_repository` - Repository for verification codes
    /// * `user_repository` - Repository for registered accounts
    /// * `email_service` - Email delivery implementation
    /// * `password_hasher` - Password hashing implementation
    /// * `config` - Service configuration
    pub fn new(
        verification_repository: Arc<V>,
        user_repository: Arc<U>,
        email_service: Arc<E>,
        password_hasher: Arc<P>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            verification_repository,
            user_repository,
            email_service,
            password_hasher,
            config,
        }
    }

    /// Get the service configuration
    pub fn config(&self) -> &AuthServiceConfig {
        &self.config
    }

    /// Send a verification code to an email address
    ///
    /// This method:
    /// 1. Validates the email address
    /// 2. Rejects emails that already have a registered account
    /// 3. Deletes any existing codes for the email (resend invalidation)
    /// 4. Generates a fresh code and persists it with its expiry
    /// 5. Attempts delivery; a delivery failure is logged and swallowed
    ///
    /// # Returns
    ///
    /// * `Ok(SendCodeResult)` - The persisted code and delivery details;
    ///   `message_id` is `None` when delivery failed
    /// * `Err(DomainError)` - If validation fails or persistence fails
    pub async fn send_verification_code(&self, email: &str) -> DomainResult<SendCodeResult> {
        // Step 1: Validate the email address
        if !validators::not_empty(email) {
            return Err(ValidationError::RequiredField { field: "email" }.into());
        }
        if !self.email_service.is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        // Step 2: An already-registered email never gets a code
        if self.user_repository.exists_by_email(email).await? {
            tracing::warn!(
                email = %mask_email(email),
                event = "send_code_rejected",
                "Verification code requested for an already registered email"
            );
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        // Step 3: Invalidate previous codes so only the newest one is valid
        let superseded = self.verification_repository.delete_by_email(email).await?;
        if superseded > 0 {
            tracing::info!(
                email = %mask_email(email),
                superseded = superseded,
                event = "codes_superseded",
                "Invalidated previous verification codes"
            );
        }

        // Step 4: Generate and persist a fresh code
        let verification_code = VerificationCode::new_with_expiration(
            email.to_string(),
            self.config.code_expiration_minutes,
        );
        let verification_code = self.verification_repository.save(verification_code).await?;

        tracing::info!(
            email = %mask_email(email),
            expires_at = %verification_code.expires_at,
            event = "code_generated",
            "Generated new verification code"
        );

        // Step 5: Best-effort delivery; the operation succeeds regardless
        let message_id = match self
            .email_service
            .send_verification_code(email, &verification_code.code)
            .await
        {
            Ok(id) => {
                tracing::info!(
                    email = %mask_email(email),
                    message_id = %id,
                    event = "code_email_sent",
                    "Verification email delivered"
                );
                Some(id)
            }
            Err(e) => {
                tracing::warn!(
                    email = %mask_email(email),
                    error = %e,
                    event = "code_email_failed",
                    "Failed to deliver verification email; continuing"
                );
                None
            }
        };

        Ok(SendCodeResult {
            message_id,
            expires_in_seconds: self.config.code_expiration_minutes * 60,
            verification_code,
        })
    }

    /// Verify a code for an email address
    ///
    /// Looks up a non-expired record matching both email and code. On a
    /// match the record is deleted (single-use) and the method reports
    /// success. A miss reports failure without distinguishing a wrong code
    /// from an expired one; a still-valid record stays intact for retry.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The code matched and has been consumed
    /// * `Ok(false)` - No valid match
    /// * `Err(DomainError)` - If validation or persistence fails
    pub async fn verify_code(&self, email: &str, code: &str) -> DomainResult<bool> {
        if !validators::not_empty(email) {
            return Err(ValidationError::RequiredField { field: "email" }.into());
        }
        if !validators::not_empty(code) {
            return Err(ValidationError::RequiredField { field: "code" }.into());
        }

        // A code that cannot possibly match skips the store roundtrip
        if code.len() != CODE_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            tracing::warn!(
                email = %mask_email(email),
                code_length = code.len(),
                event = "invalid_code_format",
                "Verification attempted with malformed code"
            );
            return Ok(false);
        }

        match self.verification_repository.find_active(email, code).await? {
            Some(_) => {
                // Consume the code so it cannot be replayed
                self.verification_repository.delete_by_email(email).await?;
                tracing::info!(
                    email = %mask_email(email),
                    event = "email_verified",
                    "Email verification succeeded"
                );
                Ok(true)
            }
            None => {
                tracing::warn!(
                    email = %mask_email(email),
                    event = "verification_failed",
                    "Verification failed: wrong or expired code"
                );
                Ok(false)
            }
        }
    }

    /// Register a new account
    ///
    /// Validation runs in order, short-circuiting with a distinct reason:
    /// email present, password present and long enough, name present, phone
    /// present, terms explicitly accepted. Then the email is re-checked
    /// against the account store, the password is hashed, and the account is
    /// persisted with the default role.
    ///
    /// Registration does not require a prior successful `verify_code`; the
    /// flows are only coupled by client-side sequencing (see DESIGN.md).
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The persisted account, id included
    /// * `Err(DomainError)` - Validation failure, duplicate email, or an
    ///   internal error
    pub async fn register(&self, request: RegisterRequest) -> DomainResult<User> {
        // Step 1: Ordered field validation
        if !validators::not_empty(&request.email) {
            return Err(ValidationError::RequiredField { field: "email" }.into());
        }
        if request.password.is_empty() {
            return Err(ValidationError::RequiredField { field: "password" }.into());
        }
        if request.password.chars().count() < self.config.min_password_length {
            return Err(ValidationError::PasswordTooShort {
                min: self.config.min_password_length,
            }
            .into());
        }
        if !validators::not_empty(&request.name) {
            return Err(ValidationError::RequiredField { field: "name" }.into());
        }
        if !validators::not_empty(&request.phone) {
            return Err(ValidationError::RequiredField { field: "phone" }.into());
        }
        if request.terms_agreed != Some(true) {
            return Err(ValidationError::TermsNotAccepted.into());
        }

        // Step 2: Duplicate check against the account store. The store's
        // uniqueness invariant still backs this up if two registrations race
        // between the check and the insert.
        if self.user_repository.exists_by_email(&request.email).await? {
            tracing::warn!(
                email = %mask_email(&request.email),
                event = "register_rejected",
                "Registration attempted with an already registered email"
            );
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        // Step 3: Hash the password
        let password_hash = self
            .password_hasher
            .hash(&request.password)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(&request.email),
                    error = %e,
                    event = "password_hash_failed",
                    "Password hashing failed"
                );
                DomainError::Internal {
                    message: format!("Password hashing failed: {}", e),
                }
            })?;

        // Step 4: Persist the account with the fixed default role
        let user = User::new(
            request.email,
            password_hash,
            request.name,
            request.phone,
            true,
        );
        let user = self.user_repository.create(user).await?;

        tracing::info!(
            user_id = %user.id,
            email = %mask_email(&user.email),
            event = "user_registered",
            "Registered new user"
        );

        Ok(user)
    }

    /// Check whether an email already has a registered account
    pub async fn is_email_registered(&self, email: &str) -> DomainResult<bool> {
        self.user_repository.exists_by_email(email).await
    }
}
