//! Juxta CLI - Compare a direct model with a knowledge-base agent.

use clap::Parser;
use juxta_cli::commands;
use juxta_cli::repl;
use juxta_cli::{Cli, Command, Config, Formatter};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.hint() {
            eprintln!("{}", hint);
        }
        std::process::exit(1);
    }
}

async fn run() -> juxta_cli::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    if !config.is_persisted() {
        if let Err(e) = config.save() {
            debug!("Could not write default config: {}", e);
        }
    }

    if let Some(profile_name) = cli.profile {
        config.switch_profile(profile_name)?;
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled).with_prompts(cli.verbose);

    match cli.command {
        None | Some(Command::Repl) => {
            let token = repl::session_token(&config)?;
            repl::run_repl(&mut config, &formatter, token).await?;
        }
        Some(Command::Compare(args)) => {
            commands::execute_compare(args, &config, &formatter).await?;
        }
        Some(Command::Extract(args)) => {
            commands::execute_extract(args, &formatter).await?;
        }
        Some(Command::Cities(args)) => {
            commands::execute_cities(args, &formatter).await?;
        }
        Some(Command::Profile(args)) => {
            commands::execute_profile(args, &mut config, &formatter).await?;
        }
    }

    Ok(())
}

/// Log to stderr; `--verbose` forces debug, otherwise `RUST_LOG` or warn.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
