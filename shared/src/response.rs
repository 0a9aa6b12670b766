//! API Response types
//!
//! Error responses follow this envelope; successful calls return the
//! affected record directly.

use serde::{Deserialize, Serialize};

/// Standard API response code for success
pub const API_CODE_SUCCESS: &str = "E0000";

/// Unified API response structure
///
/// ```json
/// {
///     "code": "E0004",
///     "message": "Table 1 is already booked for 2024-06-01 18:00"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (E0000 = success, others = error codes)
    pub code: String,
    /// Human-readable message, surfaced verbatim to the end user
    pub message: String,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            code: API_CODE_SUCCESS.to_string(),
            message: "Success".to_string(),
            data: Some(data),
        }
    }

    /// Create a successful response with custom message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            code: API_CODE_SUCCESS.to_string(),
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_omits_data() {
        let response = ApiResponse::<()>::error("E0003", "Reservation 9 not found");
        let json = serde_json::to_value(&response).expect("serialize response");
        assert_eq!(json["code"], "E0003");
        assert_eq!(json["message"], "Reservation 9 not found");
        assert!(json.get("data").is_none());
    }
}
