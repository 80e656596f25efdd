//! Juxta Comparator
//!
//! Classifies the facts of two answers as unique-to-direct, unique-to-agent
//! or similar, using plain lexical overlap.
//!
//! # Algorithm
//!
//! - **Tokens**: lower-cased whitespace-separated words longer than three
//!   characters; short words carry too little signal to count.
//! - **Similar**: two facts share at least three distinct tokens.
//! - **Matching**: first-match, direct-anchored. Each direct fact takes the
//!   first unconsumed similar agent fact in agent order, not the best one.
//!
//! # Example
//!
//! ```
//! use juxta_comparator::compare;
//!
//! let direct = vec!["The Eiffel Tower was built in 1889 Paris".to_string()];
//! let agent = vec!["Paris built the Eiffel Tower in year 1889".to_string()];
//!
//! let result = compare(&direct, &agent);
//! assert_eq!(result.similar.len(), 1);
//! assert!(result.unique_to_direct.is_empty());
//! assert!(result.unique_to_agent.is_empty());
//! ```

#![warn(missing_docs)]

mod compare;
mod config;
mod similarity;

pub use compare::{compare, compare_answers, compare_with, Comparator};
pub use config::{ComparatorConfig, ConsumptionTracking};
pub use similarity::{is_similar, shared_tokens, tokenize, MIN_SHARED_TOKENS, MIN_TOKEN_CHARS};
