//! Juxta Client
//!
//! Issues the direct and agent calls for one city concurrently, times each
//! independently and correlates both answers into a single `QueryResult`.
//!
//! # Example
//!
//! ```no_run
//! use juxta_client::JuxtaClient;
//!
//! # async fn example() -> Result<(), juxta_client::QueryError> {
//! let client = JuxtaClient::new("http://localhost:3000/prod")?;
//! let result = client.run_query("Tokyo", Some("id-token")).await?;
//!
//! println!(
//!     "direct {:.2}s / agent {:.2}s",
//!     result.direct_latency_secs(),
//!     result.agent_latency_secs()
//! );
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod cities;
mod client;
mod error;
pub mod prompts;
pub mod wire;

pub use cities::{has_knowledge_base, matching_cities, KNOWLEDGE_BASE_CITIES};
pub use client::{JuxtaClient, DEFAULT_TIMEOUT_SECS};
pub use error::QueryError;
