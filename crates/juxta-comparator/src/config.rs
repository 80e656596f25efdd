//! Configuration for the Comparator

use crate::similarity::{MIN_SHARED_TOKENS, MIN_TOKEN_CHARS};
use serde::{Deserialize, Serialize};

/// How a matched agent fact is remembered as used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumptionTracking {
    /// By fact text: identical agent texts act as one consumable value, so a
    /// duplicate of a matched fact is neither matched again nor reported as
    /// unique
    #[default]
    ByValue,

    /// By position: exact one-to-one pairing even when texts repeat
    ByIndex,
}

/// Configuration for the Comparator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparatorConfig {
    /// Minimum characters for a word to count as a token
    pub min_token_chars: usize,

    /// Distinct shared tokens needed for two facts to be similar
    pub min_shared_tokens: usize,

    /// How matched agent facts are tracked
    pub consumption: ConsumptionTracking,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            min_token_chars: MIN_TOKEN_CHARS,
            min_shared_tokens: MIN_SHARED_TOKENS,
            consumption: ConsumptionTracking::ByValue,
        }
    }
}
