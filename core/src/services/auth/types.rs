//! Types for auth service inputs and results

use crate::domain::entities::verification_code::VerificationCode;

/// Result of sending a verification code
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// The verification code entity that was created
    pub verification_code: VerificationCode,

    /// The provider message id, or `None` when delivery failed
    /// (delivery is best-effort and never fails the operation)
    pub message_id: Option<String>,

    /// Seconds until the code expires
    pub expires_in_seconds: i64,
}

/// Registration request as received at the service boundary
///
/// Fields arrive unvalidated; `AuthService::register` applies the ordered
/// validation rules. `terms_agreed` stays an `Option` so a missing flag can
/// be rejected with the same reason as an explicit `false`.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub terms_agreed: Option<bool>,
}
