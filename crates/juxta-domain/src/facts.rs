//! Parsed facts - a numbered list recovered from free text

use serde::Serialize;
use std::fmt;

/// A numbered fact list together with the prose around it
///
/// Only constructible with at least one fact; "no structured facts" is
/// represented by `Option::None` at the call site instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedFacts {
    preamble: String,
    facts: Vec<String>,
    postamble: String,
}

impl ParsedFacts {
    /// Build a fact list, or `None` when `facts` is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use juxta_domain::ParsedFacts;
    ///
    /// assert!(ParsedFacts::new("intro", vec![], "").is_none());
    ///
    /// let parsed = ParsedFacts::new("intro", vec!["a fact".to_string()], "").unwrap();
    /// assert_eq!(parsed.facts(), ["a fact"]);
    /// ```
    pub fn new(
        preamble: impl Into<String>,
        facts: Vec<String>,
        postamble: impl Into<String>,
    ) -> Option<Self> {
        if facts.is_empty() {
            return None;
        }
        Some(Self {
            preamble: preamble.into(),
            facts,
            postamble: postamble.into(),
        })
    }

    /// Text that appeared before the first numbered line
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Facts in encounter order
    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    /// Text that appeared after the first numbered line
    pub fn postamble(&self) -> &str {
        &self.postamble
    }

    /// Number of facts (always at least one)
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Always false; present for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Consume and return only the facts
    pub fn into_facts(self) -> Vec<String> {
        self.facts
    }

    /// Reassemble as a canonical numbered list
    ///
    /// Preamble first, then `1. fact` lines renumbered from one, then the
    /// postamble. Empty prose sections are omitted.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.facts.len() + 2);
        if !self.preamble.is_empty() {
            lines.push(self.preamble.clone());
        }
        lines.extend(
            self.facts
                .iter()
                .enumerate()
                .map(|(idx, fact)| format!("{}. {}", idx + 1, fact)),
        );
        if !self.postamble.is_empty() {
            lines.push(self.postamble.clone());
        }
        lines.join("\n")
    }
}

impl fmt::Display for ParsedFacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_facts_rejected() {
        assert!(ParsedFacts::new("only prose", Vec::new(), "more prose").is_none());
    }

    #[test]
    fn test_to_text_renumbers() {
        let parsed = ParsedFacts::new(
            "Here you go:",
            vec!["First".to_string(), "Second".to_string()],
            "Hope that helps.",
        )
        .unwrap();

        assert_eq!(
            parsed.to_text(),
            "Here you go:\n1. First\n2. Second\nHope that helps."
        );
        assert_eq!(parsed.len(), 2);
        assert!(!parsed.is_empty());
    }

    #[test]
    fn test_to_text_without_prose() {
        let parsed = ParsedFacts::new("", vec!["Only".to_string()], "").unwrap();
        assert_eq!(parsed.to_string(), "1. Only");
    }
}
