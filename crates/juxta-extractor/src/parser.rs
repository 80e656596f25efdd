//! Parse free text into a numbered fact list

use juxta_domain::ParsedFacts;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Digits, then `.` or `)`, then whitespace, then the fact content
static FACT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[.)]\s+(.+)$").expect("fact line pattern is valid"));

/// Parse numbered facts out of a model response
///
/// Lines are trimmed and blank ones dropped. Every line that starts with a
/// number followed by `.` or `)` and whitespace contributes its remaining text as a fact,
/// in the order encountered; the number itself is discarded. Other lines
/// before the first fact form the preamble, other lines after it form the
/// postamble (even when more facts follow).
///
/// Returns `None` when no numbered line exists, which tells callers to treat
/// the whole text as prose.
///
/// # Examples
///
/// ```
/// use juxta_extractor::extract;
///
/// let parsed = extract("Intro line\n1. Fact one\n2. Fact two\nTrailing note").unwrap();
/// assert_eq!(parsed.preamble(), "Intro line");
/// assert_eq!(parsed.facts(), ["Fact one", "Fact two"]);
/// assert_eq!(parsed.postamble(), "Trailing note");
///
/// assert!(extract("just some prose").is_none());
/// ```
pub fn extract(raw: &str) -> Option<ParsedFacts> {
    let mut preamble: Vec<&str> = Vec::new();
    let mut facts: Vec<String> = Vec::new();
    let mut postamble: Vec<&str> = Vec::new();
    let mut in_facts_section = false;

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(content) = fact_content(line) {
            in_facts_section = true;
            facts.push(content.to_string());
        } else if in_facts_section {
            postamble.push(line);
        } else {
            preamble.push(line);
        }
    }

    if facts.is_empty() {
        debug!("No numbered facts in {} chars of text", raw.len());
        return None;
    }

    debug!(
        "Extracted {} facts ({} preamble lines, {} postamble lines)",
        facts.len(),
        preamble.len(),
        postamble.len()
    );

    ParsedFacts::new(preamble.join("\n"), facts, postamble.join("\n"))
}

/// Content of a numbered line, without its marker
fn fact_content(line: &str) -> Option<&str> {
    FACT_LINE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_content_with_period() {
        assert_eq!(fact_content("1. Paris is old"), Some("Paris is old"));
    }

    #[test]
    fn test_fact_content_with_parenthesis() {
        assert_eq!(fact_content("12) Twelve"), Some("Twelve"));
    }

    #[test]
    fn test_fact_content_requires_content() {
        assert_eq!(fact_content("3."), None);
        assert_eq!(fact_content("4)"), None);
    }

    #[test]
    fn test_fact_content_requires_whitespace_after_marker() {
        assert_eq!(fact_content("3.7 million residents"), None);
        assert_eq!(fact_content("2)b"), None);
        assert_eq!(fact_content("1.	Tabbed"), Some("Tabbed"));
    }

    #[test]
    fn test_decimal_prose_is_not_a_list() {
        assert!(extract("Population: about\n3.7 million residents live in the city.").is_none());
    }

    #[test]
    fn test_decimal_line_stays_in_preamble() {
        let parsed =
            extract("2.5 million people visit every year.\nHere are facts:\n1. Paris is old").unwrap();
        assert_eq!(
            parsed.preamble(),
            "2.5 million people visit every year.\nHere are facts:"
        );
        assert_eq!(parsed.facts(), ["Paris is old"]);
        assert_eq!(parsed.postamble(), "");
    }

    #[test]
    fn test_fact_content_rejects_other_markers() {
        assert_eq!(fact_content("- bullet"), None);
        assert_eq!(fact_content("Step 1. do it"), None);
        assert_eq!(fact_content("1: colon"), None);
        assert_eq!(fact_content("a) lettered"), None);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract("").is_none());
        assert!(extract("\n\n   \n").is_none());
    }

    #[test]
    fn test_no_numeric_markers() {
        assert!(extract("Tokyo is big.\nIt has many people.").is_none());
    }

    #[test]
    fn test_preamble_fact_postamble() {
        let parsed = extract("Intro line\n1. Fact one\n2. Fact two\nTrailing note").unwrap();
        assert_eq!(parsed.preamble(), "Intro line");
        assert_eq!(parsed.facts(), ["Fact one", "Fact two"]);
        assert_eq!(parsed.postamble(), "Trailing note");
    }

    #[test]
    fn test_numbers_do_not_reorder() {
        let parsed = extract("3. third\n1. first\n1. first again").unwrap();
        assert_eq!(parsed.facts(), ["third", "first", "first again"]);
    }

    #[test]
    fn test_postamble_accumulates_across_gaps() {
        let parsed = extract("1. a\nbetween\n2. b\nafter").unwrap();
        assert_eq!(parsed.facts(), ["a", "b"]);
        assert_eq!(parsed.preamble(), "");
        assert_eq!(parsed.postamble(), "between\nafter");
    }

    #[test]
    fn test_blank_lines_dropped() {
        let parsed = extract("Intro\n\nmore intro\n\n1. a\n\n\n2. b\n\nend").unwrap();
        assert_eq!(parsed.preamble(), "Intro\nmore intro");
        assert_eq!(parsed.facts(), ["a", "b"]);
        assert_eq!(parsed.postamble(), "end");
    }

    #[test]
    fn test_indented_and_crlf_lines() {
        let parsed = extract("  Intro  \r\n   1.   spaced fact   \r\n\t2) tabbed\r\n").unwrap();
        assert_eq!(parsed.preamble(), "Intro");
        assert_eq!(parsed.facts(), ["spaced fact", "tabbed"]);
        assert_eq!(parsed.postamble(), "");
    }
}
