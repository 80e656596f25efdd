//! Comparison module - how two fact lists relate to each other

use serde::Serialize;

/// A fact together with its 1-based position in its source list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedFact {
    /// Fact text
    pub fact: String,

    /// 1-based position in the source list
    pub index: usize,
}

/// A direct fact paired with a lexically similar agent fact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactMatch {
    /// Fact from the direct source
    pub direct_fact: String,

    /// Fact from the agent source
    pub agent_fact: String,

    /// 1-based position in the direct list
    pub direct_index: usize,

    /// 1-based position in the agent list
    pub agent_index: usize,
}

/// Classification of both fact lists
///
/// Every direct fact lands in exactly one of `unique_to_direct` or a
/// `similar` entry; the same holds for agent facts whenever the agent list
/// has no duplicate texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    /// Direct facts with no similar agent fact
    pub unique_to_direct: Vec<IndexedFact>,

    /// Agent facts not paired with any direct fact
    pub unique_to_agent: Vec<IndexedFact>,

    /// Pairs judged similar, in direct-list order
    pub similar: Vec<FactMatch>,

    /// Number of direct facts compared
    pub direct_total: usize,

    /// Number of agent facts compared
    pub agent_total: usize,
}

impl ComparisonResult {
    /// True when neither side produced any fact
    pub fn is_empty(&self) -> bool {
        self.direct_total == 0 && self.agent_total == 0
    }

    /// Share of direct facts that found a partner, in `[0.0, 1.0]`
    pub fn direct_overlap(&self) -> f64 {
        if self.direct_total == 0 {
            return 0.0;
        }
        self.similar.len() as f64 / self.direct_total as f64
    }
}
