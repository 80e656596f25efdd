//! Ollama Capability Implementation
//!
//! Runs the narrative analysis on a local Ollama server, so no fact list
//! leaves the machine.
//!
//! # Lifecycle
//!
//! - readiness: `GET /api/tags`, model installed → `Readily`
//! - session creation: `POST /api/generate` without a prompt loads the model
//! - prompt: `POST /api/chat` with the system role and the user message
//! - teardown: `POST /api/generate` with `keep_alive: 0` unloads the model
//!
//! # Examples
//!
//! ```no_run
//! use juxta_llm::{Analyzer, OllamaCapability};
//!
//! # async fn example() -> Result<(), juxta_llm::LlmError> {
//! let capability = OllamaCapability::new("http://localhost:11434", "llama3.2")?;
//! let analyzer = Analyzer::new(capability);
//! let narrative = analyzer.analyze("Tokyo", &[], &[]).await?;
//! # Ok(())
//! # }
//! ```

use crate::LlmError;
use async_trait::async_trait;
use juxta_domain::{AnalysisCapability, AnalysisSession, Availability, SessionOptions};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default timeout for model requests (120 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Ollama server acting as the on-device analysis capability
#[derive(Debug, Clone)]
pub struct OllamaCapability {
    endpoint: String,
    model: String,
    client: reqwest::Client,
}

/// Chat message in Ollama's wire format
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

impl ChatMessage {
    fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the chat API
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

/// Response from the chat API
#[derive(Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

/// Load (no `keep_alive`) or unload (`keep_alive: 0`) a model
#[derive(Serialize)]
struct ModelControlRequest<'a> {
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    keep_alive: Option<u64>,
    stream: bool,
}

/// Response from the tags API
#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Deserialize)]
struct ModelTag {
    name: String,
}

impl OllamaCapability {
    /// Create a new Ollama capability
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    /// - `model`: Model to use (e.g., "llama3.2", "mistral")
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::Communication(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(endpoint, model, client))
    }

    /// Create a new Ollama capability on the default endpoint
    pub fn default_endpoint(model: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// Create a capability that reuses an existing HTTP client
    pub fn with_client(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        let endpoint: String = endpoint.into();
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.into(),
            client,
        }
    }

    /// Configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Configured model
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn installed_models(&self) -> Result<Vec<String>, LlmError> {
        let url = format!("{}/api/tags", self.endpoint);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(LlmError::Communication(format!("HTTP {}", response.status())));
        }

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse tags: {}", e)))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }
}

/// Whether an installed model name satisfies the configured one
///
/// An untagged name such as `llama3.2` accepts any tag of that model.
fn model_matches(installed: &str, wanted: &str) -> bool {
    if installed == wanted {
        return true;
    }
    !wanted.contains(':') && installed.split(':').next() == Some(wanted)
}

async fn model_control(
    client: &reqwest::Client,
    endpoint: &str,
    model: &str,
    keep_alive: Option<u64>,
) -> Result<(), LlmError> {
    let url = format!("{}/api/generate", endpoint);
    let body = ModelControlRequest {
        model,
        keep_alive,
        stream: false,
    };

    let response = client
        .post(&url)
        .json(&body)
        .send()
        .await
        .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(LlmError::ModelNotAvailable(model.to_string()));
    }
    if !response.status().is_success() {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(LlmError::Communication(format!("HTTP {}: {}", status, error_text)));
    }
    Ok(())
}

#[async_trait]
impl AnalysisCapability for OllamaCapability {
    type Error = LlmError;
    type Session = OllamaSession;

    async fn check_availability(&self) -> Availability {
        match self.installed_models().await {
            Ok(models) if models.iter().any(|m| model_matches(m, &self.model)) => {
                Availability::Readily
            }
            Ok(_) => {
                debug!("Ollama reachable but model '{}' is not installed", self.model);
                Availability::AfterDownload
            }
            Err(e) => {
                debug!("Ollama not reachable at {}: {}", self.endpoint, e);
                Availability::No
            }
        }
    }

    async fn create_session(&self, options: SessionOptions) -> Result<OllamaSession, LlmError> {
        model_control(&self.client, &self.endpoint, &self.model, None).await?;
        info!("Loaded model '{}' for analysis", self.model);

        Ok(OllamaSession {
            endpoint: self.endpoint.clone(),
            model: self.model.clone(),
            client: self.client.clone(),
            messages: vec![ChatMessage::new("system", options.system_prompt)],
        })
    }
}

/// Conversation held against a loaded Ollama model
#[derive(Debug)]
pub struct OllamaSession {
    endpoint: String,
    model: String,
    client: reqwest::Client,
    messages: Vec<ChatMessage>,
}

#[async_trait]
impl AnalysisSession for OllamaSession {
    type Error = LlmError;

    async fn prompt(&mut self, text: &str) -> Result<String, LlmError> {
        let url = format!("{}/api/chat", self.endpoint);
        self.messages.push(ChatMessage::new("user", text));

        let request = ChatRequest {
            model: &self.model,
            messages: &self.messages,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.model.clone()));
        }
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!("HTTP {}: {}", status, error_text)));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let content = chat.message.content.clone();
        self.messages.push(chat.message);
        Ok(content)
    }

    async fn destroy(self) -> Result<(), LlmError> {
        model_control(&self.client, &self.endpoint, &self.model, Some(0)).await?;
        debug!("Unloaded model '{}'", self.model);
        Ok(())
    }
}
