//! Mock analysis capability for deterministic testing
//!
//! Returns a pre-configured narrative without any network calls and records
//! every session it hands out, so tests can assert that sessions were torn
//! down.

use crate::LlmError;
use async_trait::async_trait;
use juxta_domain::{AnalysisCapability, AnalysisSession, Availability, SessionOptions};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct MockState {
    system_prompts: Vec<String>,
    prompts: Vec<String>,
    created: usize,
    destroyed: usize,
}

/// Mock capability with a fixed response
///
/// Clones share their recorded state.
///
/// # Examples
///
/// ```
/// use juxta_domain::{AnalysisCapability, AnalysisSession, Availability, SessionOptions};
/// use juxta_llm::MockCapability;
///
/// # async fn example() {
/// let capability = MockCapability::new("Fixed response");
/// assert_eq!(capability.check_availability().await, Availability::Readily);
///
/// let mut session = capability
///     .create_session(SessionOptions::with_system_prompt("role"))
///     .await
///     .unwrap();
/// assert_eq!(session.prompt("any prompt").await.unwrap(), "Fixed response");
/// session.destroy().await.unwrap();
/// assert_eq!(capability.sessions_destroyed(), 1);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockCapability {
    response: String,
    availability: Availability,
    fail_sessions: bool,
    fail_prompts: bool,
    state: Arc<Mutex<MockState>>,
}

impl MockCapability {
    /// Create a ready capability that answers every prompt with `response`
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            availability: Availability::Readily,
            fail_sessions: false,
            fail_prompts: false,
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Report a different availability
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Make session creation fail
    pub fn failing_sessions(mut self) -> Self {
        self.fail_sessions = true;
        self
    }

    /// Make every prompt fail
    pub fn failing_prompts(mut self) -> Self {
        self.fail_prompts = true;
        self
    }

    /// Sessions handed out so far
    pub fn sessions_created(&self) -> usize {
        self.lock().created
    }

    /// Sessions destroyed so far
    pub fn sessions_destroyed(&self) -> usize {
        self.lock().destroyed
    }

    /// System prompts received, one per session
    pub fn system_prompts(&self) -> Vec<String> {
        self.lock().system_prompts.clone()
    }

    /// Prompts received across all sessions
    pub fn prompts(&self) -> Vec<String> {
        self.lock().prompts.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockCapability {
    fn default() -> Self {
        Self::new("Default mock analysis")
    }
}

#[async_trait]
impl AnalysisCapability for MockCapability {
    type Error = LlmError;
    type Session = MockSession;

    async fn check_availability(&self) -> Availability {
        self.availability
    }

    async fn create_session(&self, options: SessionOptions) -> Result<MockSession, LlmError> {
        if self.fail_sessions {
            return Err(LlmError::Session("Mock session creation failure".to_string()));
        }

        let mut state = self.lock();
        state.created += 1;
        state.system_prompts.push(options.system_prompt);

        Ok(MockSession {
            response: self.response.clone(),
            fail_prompts: self.fail_prompts,
            state: Arc::clone(&self.state),
        })
    }
}

/// Session handed out by [`MockCapability`]
#[derive(Debug)]
pub struct MockSession {
    response: String,
    fail_prompts: bool,
    state: Arc<Mutex<MockState>>,
}

#[async_trait]
impl AnalysisSession for MockSession {
    type Error = LlmError;

    async fn prompt(&mut self, text: &str) -> Result<String, LlmError> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .prompts
            .push(text.to_string());

        if self.fail_prompts {
            return Err(LlmError::Session("Mock prompt failure".to_string()));
        }
        Ok(self.response.clone())
    }

    async fn destroy(self) -> Result<(), LlmError> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .destroyed += 1;
        Ok(())
    }
}
