//! Response bodies shared by the API endpoints.
//!
//! Every endpoint answers with one of two shapes: `{ "message": ... }` on
//! success or `{ "error": ... }` on failure.

use serde::{Deserialize, Serialize};

/// Success body carrying a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure body carrying a human-readable error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_response_serializes_single_key() {
        let json = serde_json::to_string(&MessageResponse::new("Server is running!")).unwrap();
        assert_eq!(json, r#"{"message":"Server is running!"}"#);
    }

    #[test]
    fn error_response_serializes_single_key() {
        let json = serde_json::to_string(&ErrorResponse::new("Failed to send email")).unwrap();
        assert_eq!(json, r#"{"error":"Failed to send email"}"#);
    }
}
