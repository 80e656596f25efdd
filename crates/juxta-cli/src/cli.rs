//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Juxta CLI - Compare what a direct model and a knowledge-base agent say about a city.
#[derive(Debug, Parser)]
#[command(name = "juxta")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (minimal)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Query both sources about a city and compare their facts
    Compare(CompareArgs),

    /// Parse a numbered fact list from a file or stdin
    Extract(ExtractArgs),

    /// List cities with supplemental knowledge-base data
    Cities(CitiesArgs),

    /// Manage configuration profiles
    Profile(ProfileArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the compare command.
#[derive(Debug, Parser)]
pub struct CompareArgs {
    /// City name (any city, real or fictional)
    pub city: String,

    /// Identity token sent to both endpoints
    #[arg(short, long, env = "JUXTA_ID_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Ask the on-device model for a narrative comparison
    #[arg(short, long)]
    pub analyze: bool,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// File containing the response text (reads stdin when omitted)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the cities command.
#[derive(Debug, Parser)]
pub struct CitiesArgs {
    /// Only show cities containing this text
    pub filter: Option<String>,
}

/// Arguments for profile management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile management actions.
#[derive(Debug, PartialEq, Subcommand)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Show active profile
    Show,

    /// Switch to a different profile
    Switch {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set {
        /// Profile name
        name: String,
        /// API base URL the `/direct` and `/agent` paths are appended to
        #[arg(short, long)]
        url: String,
        /// Identity token to store with the profile
        #[arg(long)]
        token: Option<String>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
