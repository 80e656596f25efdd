//! Lexical similarity between two facts

use std::collections::BTreeSet;

/// Minimum characters for a word to count as a token
pub const MIN_TOKEN_CHARS: usize = 4;

/// Distinct shared tokens needed for two facts to be similar
pub const MIN_SHARED_TOKENS: usize = 3;

/// Distinct lower-cased tokens of a fact
///
/// # Examples
///
/// ```
/// use juxta_comparator::tokenize;
///
/// let tokens = tokenize("The Tower was built in 1889, tower");
/// assert_eq!(tokens.into_iter().collect::<Vec<_>>(), ["1889,", "built", "tower"]);
/// ```
pub fn tokenize(fact: &str) -> BTreeSet<String> {
    tokens_with(fact, MIN_TOKEN_CHARS)
}

/// Number of distinct tokens two facts have in common
pub fn shared_tokens(a: &str, b: &str) -> usize {
    tokenize(a).intersection(&tokenize(b)).count()
}

/// Whether two facts describe overlapping content
///
/// # Examples
///
/// ```
/// use juxta_comparator::is_similar;
///
/// assert!(is_similar(
///     "The Eiffel Tower was built in 1889 Paris",
///     "Paris built the Eiffel Tower in year 1889",
/// ));
/// assert!(!is_similar("Tokyo has many temples", "Tokyo subway system is efficient"));
/// ```
pub fn is_similar(a: &str, b: &str) -> bool {
    shared_tokens(a, b) >= MIN_SHARED_TOKENS
}

pub(crate) fn tokens_with(fact: &str, min_chars: usize) -> BTreeSet<String> {
    fact.to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() >= min_chars)
        .map(str::to_string)
        .collect()
}
