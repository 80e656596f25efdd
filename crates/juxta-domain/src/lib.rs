//! Juxta Domain Layer
//!
//! Core value types and trait interfaces shared by every other Juxta crate.
//! Nothing in here performs I/O; infrastructure lives in the outer crates.
//!
//! ## Key Concepts
//!
//! - **RawAnswer**: what one upstream source said about a city, either a
//!   structured fact list (direct source) or free prose (agent source)
//! - **ParsedFacts**: a numbered list recovered from prose, with the text
//!   that surrounded it
//! - **QueryResult**: both answers plus their independent latencies
//! - **ComparisonResult**: facts classified as unique-to-direct,
//!   unique-to-agent or similar
//! - **AnalysisCapability**: the seam to an on-device model that can narrate
//!   the comparison

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod answer;
pub mod comparison;
pub mod facts;
pub mod query;
pub mod traits;

// Re-exports for convenience
pub use answer::{AgentAnswer, DirectAnswer, RawAnswer, SourceKind};
pub use comparison::{ComparisonResult, FactMatch, IndexedFact};
pub use facts::ParsedFacts;
pub use query::{round_latency, QueryId, QueryResult};
pub use traits::{AnalysisCapability, AnalysisSession, Availability, SessionOptions};
