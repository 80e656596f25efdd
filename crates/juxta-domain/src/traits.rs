//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and the on-device
//! model used for narrative analysis. Implementations live in `juxta-llm`.

use async_trait::async_trait;
use std::fmt;

/// Readiness reported by an analysis capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    /// Usable right now
    Readily,

    /// Present but needs a model download before use
    AfterDownload,

    /// Not usable on this machine
    No,
}

impl Availability {
    /// Get the availability as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Readily => "readily",
            Availability::AfterDownload => "after-download",
            Availability::No => "no",
        }
    }

    /// Whether a session may be created now
    pub fn is_ready(&self) -> bool {
        matches!(self, Availability::Readily)
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration applied when a session is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Role framing sent as the system prompt
    pub system_prompt: String,
}

impl SessionOptions {
    /// Options with the given system prompt
    pub fn with_system_prompt(system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
        }
    }
}

/// An on-device model that can host analysis sessions
///
/// Implemented by the infrastructure layer (juxta-llm)
#[async_trait]
pub trait AnalysisCapability: Send + Sync {
    /// Error type for capability operations
    type Error: Send;

    /// Session handle produced by [`AnalysisCapability::create_session`]
    type Session: AnalysisSession<Error = Self::Error>;

    /// Report whether sessions can be created now
    async fn check_availability(&self) -> Availability;

    /// Acquire a new session; the caller owns it until `destroy`
    async fn create_session(&self, options: SessionOptions) -> Result<Self::Session, Self::Error>;
}

/// A live session on an analysis capability
#[async_trait]
pub trait AnalysisSession: Send {
    /// Error type for session operations
    type Error: Send;

    /// One request/response exchange
    async fn prompt(&mut self, text: &str) -> Result<String, Self::Error>;

    /// Release the session and whatever the capability holds for it
    async fn destroy(self) -> Result<(), Self::Error>
    where
        Self: Sized;
}
