//! Juxta Extractor
//!
//! Recovers a numbered fact list from free model output.
//!
//! # Overview
//!
//! The agent source answers in prose that usually contains a numbered list.
//! The extractor pulls the list out line by line and keeps the text around
//! it, so a renderer can show the prose and the comparator can work on the
//! facts alone.
//!
//! ```text
//! agent_response → extract → ParsedFacts { preamble, facts, postamble }
//!                          ↘ None (no numbered lines: treat as prose)
//! ```
//!
//! Extraction never fails. Upstream text is unstructured by nature, so
//! "no structure found" is an ordinary return value.
//!
//! # Example Usage
//!
//! ```
//! use juxta_domain::{AgentAnswer, RawAnswer};
//! use juxta_extractor::answer_facts;
//!
//! let answer = RawAnswer::Agent(AgentAnswer {
//!     city: "Lisbon".to_string(),
//!     agent_response: "Sure!\n1. Lisbon has trams\n2. Lisbon is hilly".to_string(),
//!     ..Default::default()
//! });
//!
//! assert_eq!(answer_facts(&answer), ["Lisbon has trams", "Lisbon is hilly"]);
//! ```

#![warn(missing_docs)]

mod answer;
mod parser;


pub use answer::{answer_facts, parse_answer};
pub use parser::extract;
