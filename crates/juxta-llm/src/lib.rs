//! Juxta On-Device Analysis Layer
//!
//! Implementations of the `AnalysisCapability` trait from `juxta-domain`,
//! plus the [`Analyzer`] that drives one scoped analysis session.
//!
//! # Capabilities
//!
//! - `MockCapability`: Deterministic mock for testing
//! - `OllamaCapability`: Local Ollama server integration
//!
//! # Examples
//!
//! ```
//! use juxta_llm::{Analyzer, MockCapability};
//!
//! # async fn example() -> Result<(), juxta_llm::LlmError> {
//! let capability = MockCapability::new("The agent adds air-quality data.");
//! let analyzer = Analyzer::new(capability.clone());
//!
//! let direct = vec!["Paris has the Louvre".to_string()];
//! let agent = vec!["Paris PM2.5 averages 14".to_string()];
//! let narrative = analyzer.analyze("Paris", &direct, &agent).await?;
//!
//! assert_eq!(narrative, "The agent adds air-quality data.");
//! assert_eq!(capability.sessions_destroyed(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod mock;
pub mod ollama;

use juxta_domain::Availability;
use thiserror::Error;

pub use analyzer::{build_prompt, Analyzer, SYSTEM_PROMPT};
pub use mock::MockCapability;
pub use ollama::{OllamaCapability, OllamaSession};

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum LlmError {
    /// The capability is not ready for sessions
    #[error("Analysis capability unavailable (availability: {0})")]
    CapabilityUnavailable(Availability),

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the model
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Session creation, prompt or teardown failure
    #[error("Session error: {0}")]
    Session(String),
}
