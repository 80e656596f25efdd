//! Core Comparator implementation

use crate::config::{ComparatorConfig, ConsumptionTracking};
use crate::similarity::tokens_with;
use juxta_domain::{ComparisonResult, FactMatch, IndexedFact, RawAnswer};
use juxta_extractor::answer_facts;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Compare two fact lists with the default configuration
pub fn compare(direct: &[String], agent: &[String]) -> ComparisonResult {
    Comparator::default().compare(direct, agent)
}

/// Compare two fact lists with an explicit configuration
pub fn compare_with(
    direct: &[String],
    agent: &[String],
    config: &ComparatorConfig,
) -> ComparisonResult {
    Comparator::new(config.clone()).compare(direct, agent)
}

/// Compare the facts of two answers with the default configuration
///
/// Agent prose without a numbered list contributes no facts.
pub fn compare_answers(direct: &RawAnswer, agent: &RawAnswer) -> ComparisonResult {
    compare(&answer_facts(direct), &answer_facts(agent))
}

/// The Comparator classifies two fact lists against each other
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    config: ComparatorConfig,
}

/// Agent facts already paired with a direct fact
struct Consumed<'a> {
    tracking: ConsumptionTracking,
    values: HashSet<&'a str>,
    indices: Vec<bool>,
}

impl<'a> Consumed<'a> {
    fn new(tracking: ConsumptionTracking, len: usize) -> Self {
        Self {
            tracking,
            values: HashSet::new(),
            indices: vec![false; len],
        }
    }

    fn contains(&self, idx: usize, fact: &str) -> bool {
        match self.tracking {
            ConsumptionTracking::ByValue => self.values.contains(fact),
            ConsumptionTracking::ByIndex => self.indices[idx],
        }
    }

    fn insert(&mut self, idx: usize, fact: &'a str) {
        self.values.insert(fact);
        self.indices[idx] = true;
    }
}

impl Comparator {
    /// Create a new Comparator
    pub fn new(config: ComparatorConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    /// Classify `direct` and `agent` facts
    ///
    /// Direct facts are visited in order; each pairs with the first agent
    /// fact (in agent order) that is similar and not yet consumed. Whatever
    /// agent facts remain unconsumed afterwards are unique to the agent.
    pub fn compare(&self, direct: &[String], agent: &[String]) -> ComparisonResult {
        let agent_tokens: Vec<BTreeSet<String>> = agent
            .iter()
            .map(|fact| tokens_with(fact, self.config.min_token_chars))
            .collect();

        let mut consumed = Consumed::new(self.config.consumption, agent.len());
        let mut unique_to_direct = Vec::new();
        let mut similar = Vec::new();

        for (direct_idx, direct_fact) in direct.iter().enumerate() {
            let direct_tokens = tokens_with(direct_fact, self.config.min_token_chars);

            let partner = agent.iter().enumerate().find(|(agent_idx, agent_fact)| {
                !consumed.contains(*agent_idx, agent_fact)
                    && direct_tokens.intersection(&agent_tokens[*agent_idx]).count()
                        >= self.config.min_shared_tokens
            });

            match partner {
                Some((agent_idx, agent_fact)) => {
                    consumed.insert(agent_idx, agent_fact);
                    similar.push(FactMatch {
                        direct_fact: direct_fact.clone(),
                        agent_fact: agent_fact.clone(),
                        direct_index: direct_idx + 1,
                        agent_index: agent_idx + 1,
                    });
                }
                None => unique_to_direct.push(IndexedFact {
                    fact: direct_fact.clone(),
                    index: direct_idx + 1,
                }),
            }
        }

        let unique_to_agent: Vec<IndexedFact> = agent
            .iter()
            .enumerate()
            .filter(|(agent_idx, agent_fact)| !consumed.contains(*agent_idx, agent_fact))
            .map(|(agent_idx, agent_fact)| IndexedFact {
                fact: agent_fact.clone(),
                index: agent_idx + 1,
            })
            .collect();

        debug!(
            "Compared {} direct / {} agent facts: {} similar, {} direct-only, {} agent-only",
            direct.len(),
            agent.len(),
            similar.len(),
            unique_to_direct.len(),
            unique_to_agent.len()
        );

        ComparisonResult {
            unique_to_direct,
            unique_to_agent,
            similar,
            direct_total: direct.len(),
            agent_total: agent.len(),
        }
    }
}
