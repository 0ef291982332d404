//! Error taxonomy for commerce backend calls
//!
//! Every failure of a remote operation is reported as one [`NetworkError`].
//! Nothing in this crate retries or recovers; the caller decides what to show.

use serde::Deserialize;
use thiserror::Error;

/// Failure of a single remote operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// No response was received (connect, DNS, TLS, timeout, body read)
    #[error("Transport failure: {0}")]
    Transport(String),

    /// Non-2xx status not covered by a more specific variant
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message from the server
        message: String,
    },

    /// The response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The requested resource does not exist
    #[error("Not found: {resource}")]
    NotFound {
        /// Resource path or lookup that came back empty
        resource: String,
        /// `Some(404)` when the server answered 404, `None` for an empty lookup
        status: Option<u16>,
    },

    /// The server rejected the request payload
    #[error("Validation failed ({status}): {message}")]
    Validation {
        /// HTTP status code
        status: u16,
        /// Error details from the server
        message: String,
    },

    /// The request body could not be serialized
    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// The client could not be constructed from its configuration
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl NetworkError {
    /// HTTP status associated with the error, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            NetworkError::Server { status, .. } | NetworkError::Validation { status, .. } => {
                Some(*status)
            }
            NetworkError::NotFound { status, .. } => *status,
            _ => None,
        }
    }

    /// Check if the resource was absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, NetworkError::NotFound { .. })
    }

    /// Build the error for a non-2xx response
    ///
    /// `resource` names the request path, `body` is the raw response body.
    pub(crate) fn from_status(status: u16, resource: &str, body: &str) -> Self {
        let message = error_message(body);
        match status {
            404 => NetworkError::NotFound {
                resource: resource.to_string(),
                status: Some(404),
            },
            400 | 422 => NetworkError::Validation { status, message },
            _ => NetworkError::Server { status, message },
        }
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        NetworkError::Transport(err.to_string())
    }
}

/// Error body returned by the backend: `{"errors": "..."}` or `{"errors": {...}}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    errors: serde_json::Value,
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            errors: serde_json::Value::String(message),
        }) => message,
        Ok(ErrorBody { errors }) => errors.to_string(),
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(NetworkError::from_status(404, "customers/1", "").is_not_found());
        assert!(matches!(
            NetworkError::from_status(422, "customers", "{}"),
            NetworkError::Validation { status: 422, .. }
        ));
        assert!(matches!(
            NetworkError::from_status(400, "customers", "{}"),
            NetworkError::Validation { status: 400, .. }
        ));
        assert!(matches!(
            NetworkError::from_status(503, "products", ""),
            NetworkError::Server { status: 503, .. }
        ));
    }

    #[test]
    fn test_string_errors_body() {
        let err = NetworkError::from_status(401, "customers", r#"{"errors":"Unauthorized"}"#);
        assert_eq!(
            err,
            NetworkError::Server {
                status: 401,
                message: "Unauthorized".to_string(),
            }
        );
    }

    #[test]
    fn test_field_errors_body() {
        let err = NetworkError::from_status(
            422,
            "customers",
            r#"{"errors":{"email":["has already been taken"]}}"#,
        );
        match err {
            NetworkError::Validation { message, .. } => {
                assert!(message.contains("has already been taken"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(NetworkError::Transport("dns".to_string()).status(), None);
        assert_eq!(NetworkError::Decode("bad".to_string()).status(), None);
        assert_eq!(NetworkError::from_status(404, "customers/1", "").status(), Some(404));

        let empty_lookup = NetworkError::NotFound {
            resource: "customers?email=a@x.com".to_string(),
            status: None,
        };
        assert!(empty_lookup.is_not_found());
        assert_eq!(empty_lookup.status(), None);
    }

    #[test]
    fn test_display() {
        let err = NetworkError::Server {
            status: 500,
            message: "boom".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("500"));
        assert!(display.contains("boom"));
    }
}
