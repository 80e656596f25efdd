//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name
    #[serde(default = "default_profile")]
    pub active_profile: String,

    /// Available profiles
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// On-device analysis settings
    #[serde(default)]
    pub analysis: AnalysisSettings,

    /// File this configuration was loaded from and is saved to
    #[serde(skip)]
    location: Option<PathBuf>,
}

/// Endpoint profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Base URL the `/direct` and `/agent` paths are appended to
    pub api_base_url: String,

    /// Identity token; `--token` and `JUXTA_ID_TOKEN` take precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// On-device analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Allow `--analyze` to reach the local model
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Ollama endpoint
    #[serde(default = "default_analysis_endpoint")]
    pub endpoint: String,

    /// Ollama model name
    #[serde(default = "default_analysis_model")]
    pub model: String,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".juxta").join("config.toml"))
    }

    /// Load configuration from `path`, or the default path when `None`.
    ///
    /// A missing file yields the default configuration, remembered against
    /// that path so a later `save` creates it.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };
        Self::load_from(&path)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = fs::read_to_string(path)?;
            toml::from_str::<Config>(&contents)?
        } else {
            Self::default()
        };
        config.location = Some(path.to_path_buf());
        Ok(config)
    }

    /// Save configuration to the file it was loaded from.
    pub fn save(&self) -> Result<()> {
        let path = match &self.location {
            Some(path) => path.clone(),
            None => Self::default_path()?,
        };
        self.save_to(&path)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Whether the file this configuration belongs to exists
    pub fn is_persisted(&self) -> bool {
        self.location.as_deref().is_some_and(Path::exists)
    }

    /// Directory holding the configuration file
    pub fn directory(&self) -> Option<&Path> {
        self.location.as_deref().and_then(Path::parent)
    }

    /// Get the active profile.
    pub fn get_active_profile(&self) -> Result<&Profile> {
        self.profiles
            .get(&self.active_profile)
            .ok_or_else(|| CliError::Config(format!("Profile '{}' not found", self.active_profile)))
    }

    /// Add or update a profile.
    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    /// Switch to a different profile.
    pub fn switch_profile(&mut self, name: String) -> Result<()> {
        if !self.profiles.contains_key(&name) {
            return Err(CliError::Config(format!("Profile '{}' does not exist", name)));
        }
        self.active_profile = name;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert("default".to_string(), Profile::default());

        Self {
            active_profile: "default".to_string(),
            profiles,
            settings: Settings::default(),
            analysis: AnalysisSettings::default(),
            location: None,
        }
    }
}

impl Profile {
    /// Profile for a base URL with the default timeout and no stored token
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            id_token: None,
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new("http://localhost:3000/prod")
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_analysis_endpoint(),
            model: default_analysis_model(),
        }
    }
}

fn default_profile() -> String {
    "default".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_timeout_secs() -> u64 {
    juxta_client::DEFAULT_TIMEOUT_SECS
}

fn default_analysis_endpoint() -> String {
    juxta_llm::ollama::DEFAULT_ENDPOINT.to_string()
}

fn default_analysis_model() -> String {
    "llama3.2".to_string()
}
