//! Answer module - what each upstream source said about a city

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which upstream produced an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Generative model called without retrieval augmentation
    Direct,

    /// Retrieval-augmented agent with a supplemental knowledge base
    Agent,
}

impl SourceKind {
    /// Get the source name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Direct => "direct",
            SourceKind::Agent => "agent",
        }
    }

    /// Path suffix of the endpoint serving this source
    pub fn path(&self) -> &'static str {
        match self {
            SourceKind::Direct => "/direct",
            SourceKind::Agent => "/agent",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured answer from the direct source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectAnswer {
    /// City name as normalised by the upstream
    pub city: String,

    /// Facts in the order the model produced them
    pub facts: Vec<String>,

    /// Fact count reported by the upstream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_facts: Option<u64>,

    /// Model identifier reported by the upstream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,

    /// Free-form source label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Human-readable status message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Unstructured answer from the agent source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentAnswer {
    /// City name as normalised by the upstream
    pub city: String,

    /// Prose expected to contain a numbered list
    pub agent_response: String,

    /// Agent identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,

    /// Agent session identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Free-form source label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Human-readable status message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Answer from one source: a closed two-variant tag
///
/// The variant is decided by which endpoint produced the payload, never by
/// sniffing the payload itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RawAnswer {
    /// Structured fact list
    Direct(DirectAnswer),

    /// Free prose
    Agent(AgentAnswer),
}

impl RawAnswer {
    /// Which source this answer came from
    pub fn kind(&self) -> SourceKind {
        match self {
            RawAnswer::Direct(_) => SourceKind::Direct,
            RawAnswer::Agent(_) => SourceKind::Agent,
        }
    }

    /// City name reported by the upstream
    pub fn city(&self) -> &str {
        match self {
            RawAnswer::Direct(answer) => &answer.city,
            RawAnswer::Agent(answer) => &answer.city,
        }
    }

    /// Status message reported by the upstream, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            RawAnswer::Direct(answer) => answer.message.as_deref(),
            RawAnswer::Agent(answer) => answer.message.as_deref(),
        }
    }
}

impl From<DirectAnswer> for RawAnswer {
    fn from(answer: DirectAnswer) -> Self {
        RawAnswer::Direct(answer)
    }
}

impl From<AgentAnswer> for RawAnswer {
    fn from(answer: AgentAnswer) -> Self {
        RawAnswer::Agent(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_paths() {
        assert_eq!(SourceKind::Direct.path(), "/direct");
        assert_eq!(SourceKind::Agent.path(), "/agent");
        assert_eq!(SourceKind::Agent.to_string(), "agent");
    }

    #[test]
    fn test_raw_answer_accessors() {
        let direct: RawAnswer = DirectAnswer {
            city: "Tokyo".to_string(),
            facts: vec!["Tokyo is large".to_string()],
            ..Default::default()
        }
        .into();
        assert_eq!(direct.kind(), SourceKind::Direct);
        assert_eq!(direct.city(), "Tokyo");
        assert!(direct.message().is_none());

        let agent: RawAnswer = AgentAnswer {
            city: "Paris".to_string(),
            agent_response: "1. Paris has a tower".to_string(),
            message: Some("ok".to_string()),
            ..Default::default()
        }
        .into();
        assert_eq!(agent.kind(), SourceKind::Agent);
        assert_eq!(agent.city(), "Paris");
        assert_eq!(agent.message(), Some("ok"));
    }

    #[test]
    fn test_direct_answer_tolerates_missing_fields() {
        let answer: DirectAnswer = serde_json::from_str(r#"{"city": "Lima"}"#).unwrap();
        assert_eq!(answer.city, "Lima");
        assert!(answer.facts.is_empty());
        assert!(answer.model_used.is_none());
    }
}
