//! Error types shared by the API client and the session store

use thiserror::Error;

/// Message used when a failed response carries no `message` field
pub const GENERIC_API_ERROR: &str = "API Error";

/// Errors surfaced by the authenticated fetch wrapper
///
/// `Display` yields the text shown to the user, so a failed status renders
/// as the server-provided message and nothing else.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response
    #[error("{message}")]
    Status { status: u16, message: String },
    /// Request could not be sent or the connection failed
    #[error("Network error: {0}")]
    Network(String),
    /// Request body could not be encoded
    #[error("Failed to encode request: {0}")]
    Encode(String),
    /// Response payload did not match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the credential
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

/// Errors from the hosted authentication provider
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    /// Provider answered with an error description
    #[error("{0}")]
    Provider(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Session storage failed: {0}")]
    Storage(String),
    #[error("Not signed in")]
    NotSignedIn,
    #[error("Invalid recovery link")]
    InvalidRecoveryLink,
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { message, .. } => AuthError::Provider(message),
            ApiError::Network(msg) => AuthError::Network(msg),
            ApiError::Encode(msg) | ApiError::Decode(msg) => AuthError::Provider(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_displays_message_only() {
        let err = ApiError::Status {
            status: 500,
            message: "db down".to_string(),
        };
        assert_eq!(err.to_string(), "db down");
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_unauthorized_detection() {
        let err = ApiError::Status {
            status: 401,
            message: GENERIC_API_ERROR.to_string(),
        };
        assert!(err.is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }

    #[test]
    fn test_api_error_into_auth_error() {
        let err: AuthError = ApiError::Status {
            status: 400,
            message: "Invalid login credentials".to_string(),
        }
        .into();
        assert_eq!(
            err,
            AuthError::Provider("Invalid login credentials".to_string())
        );
    }
}
