//! End-to-end tests for the compare flow: fake endpoints, real comparator, mock analysis

use axum::{http::StatusCode, routing::post, Json, Router};
use juxta_cli::commands::run_compare;
use juxta_cli::config::{Config, Profile};
use juxta_cli::CliError;
use juxta_client::QueryError;
use juxta_domain::Availability;
use juxta_llm::{Analyzer, LlmError, MockCapability};
use serde_json::{json, Value};

async fn direct() -> Json<Value> {
    Json(json!({
        "city": "Paris",
        "facts": [
            "The Eiffel Tower was built in 1889 for the World Fair",
            "Paris is divided into twenty administrative arrondissements"
        ],
        "total_facts": 2
    }))
}

async fn agent() -> Json<Value> {
    Json(json!({
        "city": "Paris",
        "agent_response": "Here is what I found:\n1. Built in 1889, the Eiffel Tower was for the World's Fair\n2. Paris PM2.5 averages 14 µg/m³\nLet me know if you need more."
    }))
}

async fn unauthorized() -> StatusCode {
    StatusCode::UNAUTHORIZED
}

async fn spawn(app: Router) -> Config {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut config = Config::default();
    config.set_profile("default".to_string(), Profile::new(format!("http://{}", addr)));
    config
}

fn healthy_upstream() -> Router {
    Router::new()
        .route("/direct", post(direct))
        .route("/agent", post(agent))
}

#[tokio::test]
async fn test_compare_classifies_facts() {
    let config = spawn(healthy_upstream()).await;

    let report = run_compare::<MockCapability>(&config, "Paris", Some("token"), None)
        .await
        .unwrap();

    assert_eq!(report.comparison.direct_total, 2);
    assert_eq!(report.comparison.agent_total, 2);
    assert_eq!(report.comparison.similar.len(), 1);
    assert_eq!(report.comparison.similar[0].direct_index, 1);
    assert_eq!(report.comparison.similar[0].agent_index, 1);
    assert_eq!(report.comparison.unique_to_direct[0].index, 2);
    assert_eq!(report.comparison.unique_to_agent[0].fact, "Paris PM2.5 averages 14 µg/m³");
    assert!(report.analysis.is_none());
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn test_compare_with_analysis() {
    let config = spawn(healthy_upstream()).await;
    let capability = MockCapability::new("The agent adds air-quality figures.");
    let analyzer = Analyzer::new(capability.clone());

    let report = run_compare(&config, "Paris", Some("token"), Some(&analyzer))
        .await
        .unwrap();

    assert_eq!(report.analysis.as_deref(), Some("The agent adds air-quality figures."));
    assert_eq!(capability.sessions_destroyed(), 1);

    let prompt = &capability.prompts()[0];
    assert!(prompt.contains("DIRECT MODEL RESPONSE (2 facts)"));
    assert!(prompt.contains("2. Paris PM2.5 averages 14 µg/m³"));
}

#[tokio::test]
async fn test_unavailable_analysis_is_a_warning() {
    let config = spawn(healthy_upstream()).await;
    let analyzer = Analyzer::new(MockCapability::default().with_availability(Availability::No));

    let report = run_compare(&config, "Paris", Some("token"), Some(&analyzer))
        .await
        .unwrap();

    assert!(report.analysis.is_none());
    assert!(report.analysis_error.is_none());
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("unavailable"));
}

#[tokio::test]
async fn test_failed_analysis_keeps_comparison() {
    let config = spawn(healthy_upstream()).await;
    let analyzer = Analyzer::new(MockCapability::default().failing_prompts());

    let report = run_compare(&config, "Paris", Some("token"), Some(&analyzer))
        .await
        .unwrap();

    assert_eq!(report.comparison.similar.len(), 1);
    assert!(matches!(report.analysis_error, Some(LlmError::Session(_))));
}

#[tokio::test]
async fn test_unauthorized_surfaces_as_query_error() {
    let app = Router::new()
        .route("/direct", post(direct))
        .route("/agent", post(unauthorized));
    let config = spawn(app).await;

    let result = run_compare::<MockCapability>(&config, "Paris", Some("stale"), None).await;
    assert!(matches!(
        result,
        Err(CliError::Query(QueryError::Unauthorized { .. }))
    ));
}

#[tokio::test]
async fn test_missing_token() {
    let config = spawn(healthy_upstream()).await;

    let result = run_compare::<MockCapability>(&config, "Paris", None, None).await;
    assert!(matches!(result, Err(CliError::Query(QueryError::Auth))));
}
