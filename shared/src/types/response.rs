//! API response types and wrappers

use serde::{Deserialize, Serialize};

/// Error body shared by all failing API responses
///
/// Every error response carries exactly `{"success": false, "message": ...}`
/// so clients have a single shape to branch on regardless of status code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `false` for error responses
    pub success: bool,

    /// Human-readable error message
    pub message: String,
}

impl ErrorBody {
    /// Create a new error body
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody::new("Something went wrong");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Something went wrong");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
