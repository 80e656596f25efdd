//! Error types for the Juxta client.

use juxta_domain::SourceKind;
use thiserror::Error;

/// Query failures
///
/// A query either yields both answers or one of these; no partial result is
/// ever returned.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The request was rejected before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// No identity token was supplied
    #[error("Authentication token not found. Please sign in again.")]
    Auth,

    /// An upstream answered HTTP 401
    #[error("Unauthorized by the {side} endpoint. Please sign in again.")]
    Unauthorized {
        /// Endpoint that refused the token
        side: SourceKind,
    },

    /// Network failure, non-2xx status, or a body that is not JSON
    #[error("Transport error from the {side} endpoint: {message}")]
    Transport {
        /// Endpoint that failed
        side: SourceKind,
        /// Underlying failure
        message: String,
    },

    /// The HTTP client could not be constructed
    #[error("Client error: {0}")]
    Client(String),
}

impl QueryError {
    /// Build a transport error for one side from a `reqwest` failure
    pub fn transport(side: SourceKind, e: reqwest::Error) -> Self {
        let message = if e.is_connect() {
            format!("connection failed: {}", e)
        } else if e.is_timeout() {
            "request timed out".to_string()
        } else if e.is_decode() {
            format!("response body is not valid JSON: {}", e)
        } else {
            e.to_string()
        };
        QueryError::Transport { side, message }
    }

    /// Whether the caller should re-authenticate
    pub fn needs_reauth(&self) -> bool {
        matches!(self, QueryError::Auth | QueryError::Unauthorized { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_side() {
        let err = QueryError::Unauthorized {
            side: SourceKind::Agent,
        };
        assert!(err.to_string().contains("agent"));

        let err = QueryError::Transport {
            side: SourceKind::Direct,
            message: "HTTP 500".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Transport error from the direct endpoint: HTTP 500"
        );
    }

    #[test]
    fn test_needs_reauth() {
        assert!(QueryError::Auth.needs_reauth());
        assert!(QueryError::Unauthorized {
            side: SourceKind::Direct
        }
        .needs_reauth());
        assert!(!QueryError::Validation("empty".to_string()).needs_reauth());
    }
}
