//! Wire format of the two endpoints.
//!
//! Response bodies are read leniently: any JSON value is accepted and fields
//! that are missing or of the wrong type come out empty.

use juxta_domain::{AgentAnswer, DirectAnswer};
use serde::Serialize;
use serde_json::Value;

/// Request body sent to both endpoints
#[derive(Debug, Serialize)]
pub struct CityRequest<'a> {
    /// City name, already trimmed
    pub city: &'a str,
}

fn string_field(body: &Value, key: &str) -> Option<String> {
    body.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Read a direct-endpoint body
///
/// Non-string entries of `facts` are skipped.
pub fn direct_answer(body: &Value) -> DirectAnswer {
    let facts = body
        .get("facts")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    DirectAnswer {
        city: string_field(body, "city").unwrap_or_default(),
        facts,
        total_facts: body.get("total_facts").and_then(Value::as_u64),
        model_used: string_field(body, "model_used"),
        source: string_field(body, "source"),
        message: string_field(body, "message"),
    }
}

/// Read an agent-endpoint body
pub fn agent_answer(body: &Value) -> AgentAnswer {
    AgentAnswer {
        city: string_field(body, "city").unwrap_or_default(),
        agent_response: string_field(body, "agent_response").unwrap_or_default(),
        agent_id: string_field(body, "agent_id"),
        session_id: string_field(body, "session_id"),
        source: string_field(body, "source"),
        message: string_field(body, "message"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direct_answer_full() {
        let body = json!({
            "city": "Paris",
            "facts": ["Paris has the Louvre", "Paris hosted the 1900 Olympics"],
            "total_facts": 2,
            "model_used": "claude-3-haiku",
            "source": "direct_model",
            "message": "ok"
        });

        let answer = direct_answer(&body);
        assert_eq!(answer.city, "Paris");
        assert_eq!(answer.facts.len(), 2);
        assert_eq!(answer.total_facts, Some(2));
        assert_eq!(answer.model_used.as_deref(), Some("claude-3-haiku"));
        assert_eq!(answer.message.as_deref(), Some("ok"));
    }

    #[test]
    fn test_direct_answer_wrong_shape() {
        let body = json!({ "city": 7, "facts": "not a list" });
        let answer = direct_answer(&body);
        assert_eq!(answer, DirectAnswer::default());
    }

    #[test]
    fn test_direct_answer_skips_non_string_facts() {
        let body = json!({ "facts": ["one", 2, null, "three"] });
        assert_eq!(direct_answer(&body).facts, vec!["one", "three"]);
    }

    #[test]
    fn test_agent_answer() {
        let body = json!({
            "city": "Tokyo",
            "agent_response": "1. Tokyo is large",
            "agent_id": "AGENT1",
            "session_id": "abc"
        });

        let answer = agent_answer(&body);
        assert_eq!(answer.agent_response, "1. Tokyo is large");
        assert_eq!(answer.agent_id.as_deref(), Some("AGENT1"));
        assert_eq!(answer.session_id.as_deref(), Some("abc"));
        assert!(answer.source.is_none());
    }

    #[test]
    fn test_non_object_bodies() {
        assert_eq!(agent_answer(&json!([1, 2, 3])), AgentAnswer::default());
        assert_eq!(direct_answer(&Value::Null), DirectAnswer::default());
    }

    #[test]
    fn test_city_request_serialization() {
        let json = serde_json::to_string(&CityRequest { city: "Lima" }).unwrap();
        assert_eq!(json, r#"{"city":"Lima"}"#);
    }
}
