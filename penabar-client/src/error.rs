//! API error types.

use serde::Deserialize;
use thiserror::Error;

/// Error type for backend API calls.
///
/// The taxonomy the rest of the client cares about:
/// - [`ApiError::Unauthorized`] - the credential was rejected (HTTP 401);
///   during bootstrap or a profile refresh this drives session eviction
///   instead of being shown to the user
/// - [`ApiError::Api`] - a validation/business rejection with an optional
///   server-supplied message, surfaced verbatim when present
/// - [`ApiError::Http`] / [`ApiError::Json`] - transport failures and
///   malformed responses, surfaced with a generic message
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the credential (HTTP 401).
    #[error("Authentication failed: invalid or expired credentials")]
    Unauthorized,

    /// Any other non-success status, with the server's detail if it sent one.
    #[error("API error (status {status}): {}", message.as_deref().unwrap_or("no detail"))]
    Api {
        /// HTTP status code.
        status: u16,
        /// `message` field of the JSON error body, when present.
        message: Option<String>,
    },

    /// HTTP request failed (network unreachable, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid base URL or path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Shape of the backend's JSON error bodies.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Maps a non-success HTTP status and its raw body to an error.
    ///
    /// 401 always means the credential is bad; everything else keeps the
    /// status and whatever `message` the body carried.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty());
        Self::Api { status, message }
    }

    /// Returns true if the credential was rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Message suitable for showing to the user: the server's detail when
    /// there is one, a generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized => "Your session has expired, please log in again".to_string(),
            Self::Api {
                message: Some(m), ..
            } => m.clone(),
            Self::Api { status, .. } => format!("The server rejected the request (status {status})"),
            Self::Http(_) | Self::Json(_) | Self::InvalidUrl(_) => {
                "Could not reach the server, try again".to_string()
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_maps_to_unauthorized_regardless_of_body() {
        let err = ApiError::from_status(401, r#"{"message":"Unauthenticated."}"#);
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_validation_error_keeps_server_message() {
        let err = ApiError::from_status(422, r#"{"message":"El nombre ya existe"}"#);
        match &err {
            ApiError::Api { status, message } => {
                assert_eq!(*status, 422);
                assert_eq!(message.as_deref(), Some("El nombre ya existe"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.user_message(), "El nombre ya existe");
    }

    #[test]
    fn test_unparseable_body_falls_back_to_generic_message() {
        let err = ApiError::from_status(500, "<html>Internal Server Error</html>");
        match &err {
            ApiError::Api { status, message } => {
                assert_eq!(*status, 500);
                assert!(message.is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.user_message().contains("500"));
    }

    #[test]
    fn test_empty_message_field_is_treated_as_absent() {
        let err = ApiError::from_status(400, r#"{"message":""}"#);
        match err {
            ApiError::Api { message, .. } => assert!(message.is_none()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
