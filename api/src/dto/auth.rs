use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for POST /api/auth/send-verification
///
/// Fields default to empty on missing keys so the orchestrator can reject
/// them with a per-field reason instead of a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendVerificationRequest {
    /// Email address to send the verification code to
    #[serde(default)]
    pub email: String,
}

/// Request body for POST /api/auth/verify-email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    /// Email address the code was sent to
    #[serde(default)]
    pub email: String,

    /// 6-digit verification code
    #[serde(default)]
    pub code: String,
}

/// Request body for POST /api/auth/register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,

    /// Plaintext password; hashed before persistence, never stored or logged
    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub phone: String,

    /// Terms-of-service agreement; must be explicitly true
    #[serde(default)]
    pub terms_agreed: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendVerificationResponse {
    pub success: bool,
    pub message: String,
    pub email: String,

    /// Seconds until the code expires
    pub expires_in: i64,

    /// The generated code; present only when `expose_code_in_response` is
    /// enabled (development aid, off by default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyEmailResponse {
    pub success: bool,
    pub message: String,
    pub verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert!(request.email.is_empty());
        assert!(request.password.is_empty());
        assert_eq!(request.terms_agreed, None);
    }

    #[test]
    fn test_code_field_is_omitted_when_none() {
        let response = SendVerificationResponse {
            success: true,
            message: "sent".to_string(),
            email: "user@example.com".to_string(),
            expires_in: 300,
            code: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("code").is_none());
    }

    #[test]
    fn test_code_field_is_present_when_exposed() {
        let response = SendVerificationResponse {
            success: true,
            message: "sent".to_string(),
            email: "user@example.com".to_string(),
            expires_in: 300,
            code: Some("123456".to_string()),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["code"], "123456");
    }
}
