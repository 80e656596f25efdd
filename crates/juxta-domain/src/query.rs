//! Query module - one comparison cycle across both sources

use crate::answer::{AgentAnswer, DirectAnswer, RawAnswer};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Unique identifier for a query based on UUIDv7
///
/// UUIDv7 sorts by creation time, so a later query always has a larger id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryId(uuid::Uuid);

impl QueryId {
    /// Generate a new UUIDv7-based QueryId
    ///
    /// # Examples
    ///
    /// ```
    /// use juxta_domain::QueryId;
    ///
    /// let first = QueryId::new();
    /// let second = QueryId::new();
    /// assert!(second > first);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }
}

impl Default for QueryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Round an elapsed duration to seconds with two decimal places
///
/// # Examples
///
/// ```
/// use juxta_domain::round_latency;
/// use std::time::Duration;
///
/// assert_eq!(round_latency(Duration::from_millis(1234)), 1.23);
/// assert_eq!(round_latency(Duration::from_millis(1236)), 1.24);
/// ```
pub fn round_latency(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100.0).round() / 100.0
}

/// Both answers for one city, with independent latencies
///
/// Immutable once built; a new query produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    id: QueryId,
    timestamp: DateTime<Utc>,
    city: String,
    direct_answer: RawAnswer,
    agent_answer: RawAnswer,
    direct_latency_secs: f64,
    agent_latency_secs: f64,
}

impl QueryResult {
    /// Assemble a result stamped with a fresh id and the current time
    pub fn new(
        city: impl Into<String>,
        direct_answer: DirectAnswer,
        direct_latency_secs: f64,
        agent_answer: AgentAnswer,
        agent_latency_secs: f64,
    ) -> Self {
        Self {
            id: QueryId::new(),
            timestamp: Utc::now(),
            city: city.into(),
            direct_answer: RawAnswer::Direct(direct_answer),
            agent_answer: RawAnswer::Agent(agent_answer),
            direct_latency_secs,
            agent_latency_secs,
        }
    }

    /// Query identifier
    pub fn id(&self) -> QueryId {
        self.id
    }

    /// When the result was assembled
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// City as entered by the user, trimmed
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Answer from the direct source
    pub fn direct_answer(&self) -> &RawAnswer {
        &self.direct_answer
    }

    /// Answer from the agent source
    pub fn agent_answer(&self) -> &RawAnswer {
        &self.agent_answer
    }

    /// Seconds the direct call took, two decimal places
    pub fn direct_latency_secs(&self) -> f64 {
        self.direct_latency_secs
    }

    /// Seconds the agent call took, two decimal places
    pub fn agent_latency_secs(&self) -> f64 {
        self.agent_latency_secs
    }
}
