//! Juxta client implementation.

use crate::error::QueryError;
use crate::wire::{self, CityRequest};
use juxta_domain::{round_latency, QueryResult, SourceKind};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Default request timeout (120 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// One side's parsed body and its latency in seconds
type SideOutcome = Result<(Value, f64), QueryError>;

/// Client for the direct and agent endpoints
#[derive(Debug, Clone)]
pub struct JuxtaClient {
    api_base_url: String,
    http: reqwest::Client,
}

impl JuxtaClient {
    /// Create a client with the default request timeout
    pub fn new(api_base_url: impl Into<String>) -> Result<Self, QueryError> {
        Self::with_timeout(api_base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(
        api_base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, QueryError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QueryError::Client(format!("Failed to build HTTP client: {}", e)))?;

        let api_base_url: String = api_base_url.into();
        Ok(Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Base URL both endpoint paths are appended to
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Ask both sources about `city` concurrently
    ///
    /// The city is trimmed before it is sent and recorded. Each latency
    /// covers its own call from dispatch until the body has been parsed.
    ///
    /// # Errors
    ///
    /// - `QueryError::Validation` when the trimmed city is empty
    /// - `QueryError::Auth` when no token is available
    /// - `QueryError::Unauthorized` when either endpoint answers 401; this
    ///   wins over a transport failure on the other side
    /// - `QueryError::Transport` for any other failure on either side
    pub async fn run_query(
        &self,
        city: &str,
        auth_token: Option<&str>,
    ) -> Result<QueryResult, QueryError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(QueryError::Validation("Please enter a city name".to_string()));
        }

        let token = auth_token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(QueryError::Auth)?;

        info!("Querying both sources for '{}'", city);

        let (direct, agent) = tokio::join!(
            self.call(SourceKind::Direct, city, token),
            self.call(SourceKind::Agent, city, token),
        );

        let ((direct_body, direct_secs), (agent_body, agent_secs)) = settle(direct, agent)?;

        info!(
            "Both sources answered for '{}' (direct {:.2}s, agent {:.2}s)",
            city, direct_secs, agent_secs
        );

        Ok(QueryResult::new(
            city,
            wire::direct_answer(&direct_body),
            direct_secs,
            wire::agent_answer(&agent_body),
            agent_secs,
        ))
    }

    async fn call(&self, side: SourceKind, city: &str, token: &str) -> SideOutcome {
        let url = format!("{}{}", self.api_base_url, side.path());
        debug!("POST {}", url);

        let started = Instant::now();
        let response = self
            .http
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, token)
            .json(&CityRequest { city })
            .send()
            .await
            .map_err(|e| QueryError::transport(side, e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!("The {} endpoint rejected the identity token", side);
            return Err(QueryError::Unauthorized { side });
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(QueryError::Transport {
                side,
                message: format!("HTTP {}: {}", status, error_text),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| QueryError::transport(side, e))?;
        let latency = round_latency(started.elapsed());

        debug!("The {} endpoint answered in {:.2}s", side, latency);
        Ok((body, latency))
    }
}

/// Combine both outcomes, letting a 401 on either side win
fn settle(
    direct: SideOutcome,
    agent: SideOutcome,
) -> Result<((Value, f64), (Value, f64)), QueryError> {
    match (direct, agent) {
        (Ok(d), Ok(a)) => Ok((d, a)),
        (Err(e @ QueryError::Unauthorized { .. }), _)
        | (_, Err(e @ QueryError::Unauthorized { .. })) => Err(e),
        (Err(e), _) | (_, Err(e)) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok() -> SideOutcome {
        Ok((json!({}), 0.1))
    }

    fn transport(side: SourceKind) -> SideOutcome {
        Err(QueryError::Transport {
            side,
            message: "boom".to_string(),
        })
    }

    fn unauthorized(side: SourceKind) -> SideOutcome {
        Err(QueryError::Unauthorized { side })
    }

    #[test]
    fn test_client_trims_base_url() {
        let client = JuxtaClient::new("http://localhost:3000/prod/").unwrap();
        assert_eq!(client.api_base_url(), "http://localhost:3000/prod");
    }

    #[test]
    fn test_settle_both_ok() {
        assert!(settle(ok(), ok()).is_ok());
    }

    #[test]
    fn test_settle_unauthorized_beats_transport() {
        let err = settle(transport(SourceKind::Direct), unauthorized(SourceKind::Agent)).unwrap_err();
        assert!(matches!(
            err,
            QueryError::Unauthorized {
                side: SourceKind::Agent
            }
        ));

        let err = settle(unauthorized(SourceKind::Direct), transport(SourceKind::Agent)).unwrap_err();
        assert!(matches!(
            err,
            QueryError::Unauthorized {
                side: SourceKind::Direct
            }
        ));
    }

    #[test]
    fn test_settle_single_failure() {
        let err = settle(ok(), transport(SourceKind::Agent)).unwrap_err();
        assert!(matches!(
            err,
            QueryError::Transport {
                side: SourceKind::Agent,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_empty_city_is_rejected_before_network() {
        let client = JuxtaClient::new("http://127.0.0.1:1").unwrap();
        let result = client.run_query("   ", Some("token")).await;
        assert!(matches!(result, Err(QueryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_missing_token_is_rejected_before_network() {
        let client = JuxtaClient::new("http://127.0.0.1:1").unwrap();
        assert!(matches!(
            client.run_query("Paris", None).await,
            Err(QueryError::Auth)
        ));
        assert!(matches!(
            client.run_query("Paris", Some("  ")).await,
            Err(QueryError::Auth)
        ));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_transport() {
        let client = JuxtaClient::new("http://127.0.0.1:1").unwrap();
        let result = client.run_query("Paris", Some("token")).await;
        assert!(matches!(result, Err(QueryError::Transport { .. })));
    }
}
