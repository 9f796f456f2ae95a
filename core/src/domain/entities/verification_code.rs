//! Verification code entity for email-based verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Alphabet the code is drawn from
pub const CODE_ALPHABET: &[u8] = b"0123456789";

/// Default expiration time for verification codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// Verification code entity for email-based verification
///
/// At most one active code per email is intended; the orchestrator enforces
/// this with delete-before-insert rather than a uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Email address this code was issued for
    pub email: String,

    /// The 6-digit verification code
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Creates a new verification code with a cryptographically secure random
    /// 6-digit code and the default 5-minute expiry
    pub fn new(email: String) -> Self {
        Self::new_with_expiration(email, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Creates a new verification code with a custom expiration time
    ///
    /// # Arguments
    ///
    /// * `email` - The email address to issue the code for
    /// * `expiration_minutes` - Number of minutes until the code expires
    pub fn new_with_expiration(email: String, expiration_minutes: i64) -> Self {
        let code = Self::generate_code();
        let now = Utc::now();
        let expires_at = now + Duration::minutes(expiration_minutes);

        Self {
            email,
            code,
            created_at: now,
            expires_at,
        }
    }

    /// Generates a random 6-digit code using the OS CSPRNG
    ///
    /// Each digit is drawn from `CODE_ALPHABET`. `OsRng` is used rather than
    /// a general-purpose PRNG so codes resist guessing attacks.
    pub fn generate_code() -> String {
        let mut rng = OsRng;
        (0..CODE_LENGTH)
            .map(|_| {
                let idx = (rng.next_u32() as usize) % CODE_ALPHABET.len();
                CODE_ALPHABET[idx] as char
            })
            .collect()
    }

    /// Checks if the verification code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Compares the provided code against this one in constant time
    ///
    /// Expiry is not checked here; callers filter on `is_expired` (or the
    /// store's non-expired predicate) separately.
    pub fn matches(&self, input_code: &str) -> bool {
        self.code.len() == input_code.len()
            && constant_time_eq(self.code.as_bytes(), input_code.as_bytes())
    }

    /// Gets the time remaining until expiration, or zero if expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}
