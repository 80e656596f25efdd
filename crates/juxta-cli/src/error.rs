//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Query against the two endpoints failed
    #[error("{0}")]
    Query(#[from] juxta_client::QueryError),

    /// On-device analysis failed
    #[error("Analysis error: {0}")]
    Analysis(#[from] juxta_llm::LlmError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation not permitted
    #[error("Operation not permitted: {0}")]
    NotPermitted(String),
}

impl CliError {
    /// Follow-up advice to print under the error, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Query(e) if e.needs_reauth() => Some(
                "Set a fresh identity token with `--token`, or with `token <T>` in the REPL",
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use juxta_client::QueryError;
    use juxta_domain::SourceKind;

    #[test]
    fn test_auth_failures_carry_a_hint() {
        assert!(CliError::Query(QueryError::Auth).hint().is_some());
        let stale = CliError::Query(QueryError::Unauthorized {
            side: SourceKind::Direct,
        });
        assert!(stale.hint().unwrap().contains("--token"));
    }

    #[test]
    fn test_other_failures_have_no_hint() {
        assert!(CliError::Query(QueryError::Validation("empty".to_string()))
            .hint()
            .is_none());
        assert!(CliError::Config("broken".to_string()).hint().is_none());
    }
}
