//! Scoped analysis session
//!
//! One call to [`Analyzer::analyze`] acquires a session, sends a single
//! prompt and always destroys the session before returning.

use crate::LlmError;
use juxta_domain::{AnalysisCapability, AnalysisSession, Availability, SessionOptions};
use tracing::{debug, info, warn};

/// Role framing given to every analysis session
pub const SYSTEM_PROMPT: &str =
    "You are an expert at analyzing and comparing information. Provide clear, concise insights.";

/// Drives narrative comparisons on an [`AnalysisCapability`]
pub struct Analyzer<C> {
    capability: C,
}

impl<C> Analyzer<C>
where
    C: AnalysisCapability<Error = LlmError>,
{
    /// Create a new Analyzer
    pub fn new(capability: C) -> Self {
        Self { capability }
    }

    /// Readiness of the underlying capability
    pub async fn availability(&self) -> Availability {
        self.capability.check_availability().await
    }

    /// Ask the on-device model to compare both fact lists
    ///
    /// # Errors
    ///
    /// - `LlmError::CapabilityUnavailable` unless the capability is ready
    /// - whatever the capability reports while creating the session or
    ///   answering the prompt
    ///
    /// The session is destroyed whether the prompt succeeds or fails; a
    /// teardown failure is logged and does not replace the prompt outcome.
    pub async fn analyze(
        &self,
        city: &str,
        direct_facts: &[String],
        agent_facts: &[String],
    ) -> Result<String, LlmError> {
        let availability = self.capability.check_availability().await;
        if !availability.is_ready() {
            return Err(LlmError::CapabilityUnavailable(availability));
        }

        info!(
            "Starting analysis for '{}' ({} direct / {} agent facts)",
            city,
            direct_facts.len(),
            agent_facts.len()
        );

        let mut session = self
            .capability
            .create_session(SessionOptions::with_system_prompt(SYSTEM_PROMPT))
            .await?;

        let prompt = build_prompt(city, direct_facts, agent_facts);
        debug!("Analysis prompt length: {} chars", prompt.len());

        let outcome = session.prompt(&prompt).await;

        if let Err(e) = session.destroy().await {
            warn!("Failed to destroy analysis session: {}", e);
        }

        outcome
    }
}

/// Build the single analysis prompt
///
/// Both lists are numbered from one and prefixed with their counts.
pub fn build_prompt(city: &str, direct_facts: &[String], agent_facts: &[String]) -> String {
    format!(
        r#"I have two different responses about the city "{city}":

DIRECT MODEL RESPONSE ({direct_count} facts):
{direct_list}

AGENT WITH KNOWLEDGE BASE RESPONSE ({agent_count} facts):
{agent_list}

Please analyze these two responses and provide:
1. Key differences in the type of information provided
2. Which response appears more detailed or specific
3. Any unique insights from the knowledge base (agent) response
4. Overall assessment of which approach provides better information

Keep your analysis concise and focused on the most important differences."#,
        city = city,
        direct_count = direct_facts.len(),
        direct_list = numbered(direct_facts),
        agent_count = agent_facts.len(),
        agent_list = numbered(agent_facts),
    )
}

fn numbered(facts: &[String]) -> String {
    facts
        .iter()
        .enumerate()
        .map(|(idx, fact)| format!("{}. {}", idx + 1, fact))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockCapability;

    fn facts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_prompt_numbers_both_lists() {
        let prompt = build_prompt(
            "Rome",
            &facts(&["Rome has the Colosseum", "Rome is old"]),
            &facts(&["Rome PM2.5 is 17"]),
        );

        assert!(prompt.contains(r#"about the city "Rome""#));
        assert!(prompt.contains("DIRECT MODEL RESPONSE (2 facts):\n1. Rome has the Colosseum\n2. Rome is old\n"));
        assert!(prompt.contains("AGENT WITH KNOWLEDGE BASE RESPONSE (1 facts):\n1. Rome PM2.5 is 17\n"));
    }

    #[test]
    fn test_prompt_with_empty_lists() {
        let prompt = build_prompt("Nowhere", &[], &[]);
        assert!(prompt.contains("DIRECT MODEL RESPONSE (0 facts):\n\n"));
    }

    #[tokio::test]
    async fn test_analyze_success_destroys_session() {
        let capability = MockCapability::new("narrative");
        let analyzer = Analyzer::new(capability.clone());

        let result = analyzer.analyze("Rome", &facts(&["a"]), &facts(&["b"])).await;

        assert_eq!(result.unwrap(), "narrative");
        assert_eq!(capability.sessions_created(), 1);
        assert_eq!(capability.sessions_destroyed(), 1);
        assert_eq!(capability.system_prompts(), vec![SYSTEM_PROMPT.to_string()]);
        assert_eq!(capability.prompts().len(), 1);
        assert!(capability.prompts()[0].contains("1. a"));
    }

    #[tokio::test]
    async fn test_analyze_failure_still_destroys_session() {
        let capability = MockCapability::new("unused").failing_prompts();
        let analyzer = Analyzer::new(capability.clone());

        let result = analyzer.analyze("Rome", &[], &[]).await;

        assert!(matches!(result, Err(LlmError::Session(_))));
        assert_eq!(capability.sessions_created(), 1);
        assert_eq!(capability.sessions_destroyed(), 1);
    }

    #[tokio::test]
    async fn test_analyze_unavailable() {
        let capability = MockCapability::new("unused").with_availability(Availability::AfterDownload);
        let analyzer = Analyzer::new(capability.clone());

        assert_eq!(analyzer.availability().await, Availability::AfterDownload);

        let result = analyzer.analyze("Rome", &[], &[]).await;
        assert!(matches!(
            result,
            Err(LlmError::CapabilityUnavailable(Availability::AfterDownload))
        ));
        assert_eq!(capability.sessions_created(), 0);
    }

    #[tokio::test]
    async fn test_analyze_create_failure() {
        let capability = MockCapability::new("unused").failing_sessions();
        let analyzer = Analyzer::new(capability.clone());

        let result = analyzer.analyze("Rome", &[], &[]).await;

        assert!(matches!(result, Err(LlmError::Session(_))));
        assert_eq!(capability.sessions_destroyed(), 0);
        assert!(capability.prompts().is_empty());
    }
}
