//! Fact lists for either answer variant

use crate::parser::extract;
use juxta_domain::{ParsedFacts, RawAnswer};

/// Facts an answer contributes to a comparison
///
/// The direct variant already carries a list. The agent variant is run
/// through [`extract`]; prose without a numbered list yields no facts.
pub fn answer_facts(answer: &RawAnswer) -> Vec<String> {
    match answer {
        RawAnswer::Direct(direct) => direct.facts.clone(),
        RawAnswer::Agent(agent) => extract(&agent.agent_response)
            .map(ParsedFacts::into_facts)
            .unwrap_or_default(),
    }
}

/// Structured view of an answer for display
///
/// The direct variant has no surrounding prose, so its facts are wrapped
/// with an empty preamble and postamble. `None` means there is nothing to
/// tabulate and the caller should fall back to the raw text.
pub fn parse_answer(answer: &RawAnswer) -> Option<ParsedFacts> {
    match answer {
        RawAnswer::Direct(direct) => ParsedFacts::new("", direct.facts.clone(), ""),
        RawAnswer::Agent(agent) => extract(&agent.agent_response),
    }
}
