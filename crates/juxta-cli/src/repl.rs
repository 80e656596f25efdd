//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! Any line that is not a command is treated as a city to compare.

use crate::cli::{ProfileAction, ProfileArgs};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use juxta_client::matching_cities;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// REPL command type.
#[derive(Debug, PartialEq)]
enum ReplCommand {
    Exit,
    Help,
    Compare(String),
    Cities(String),
    Token(Option<String>),
    Analyze(bool),
    Profile(ProfileAction),
}

/// Mutable state carried between REPL lines.
struct ReplState {
    token: Option<String>,
    analyze: bool,
}

/// Run the interactive REPL.
///
/// `token` is the identity token resolved at startup; `token <value>` replaces
/// it for the rest of the session.
pub async fn run_repl(
    config: &mut Config,
    formatter: &Formatter,
    token: Option<String>,
) -> Result<()> {
    println!(
        "{}",
        formatter.info("Juxta REPL - Enter a city to compare, 'help' for commands, 'exit' to quit")
    );
    println!();

    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::other(format!(
            "Failed to initialize editor: {}",
            e
        )))
    })?;

    let history_path = get_history_path(config)?;
    let _ = editor.load_history(&history_path);

    let mut state = ReplState {
        token,
        analyze: false,
    };

    loop {
        let prompt = if state.token.is_some() {
            "juxta> "
        } else {
            "juxta (no token)> "
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => print_help(formatter),
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, &mut state, config, formatter).await
                        {
                            eprintln!("{}", formatter.error(&e.to_string()));
                            if let Some(hint) = e.hint() {
                                eprintln!("{}", formatter.warning(hint));
                            }
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// Token a REPL session starts with: `JUXTA_ID_TOKEN`, then the active profile.
pub fn session_token(config: &Config) -> Result<Option<String>> {
    token_for_active_profile(std::env::var("JUXTA_ID_TOKEN").ok(), config)
}

fn token_for_active_profile(env: Option<String>, config: &Config) -> Result<Option<String>> {
    Ok(commands::resolve_token(env, config.get_active_profile()?))
}

/// Execute a REPL command.
async fn execute_repl_command(
    cmd: ReplCommand,
    state: &mut ReplState,
    config: &mut Config,
    formatter: &Formatter,
) -> Result<()> {
    match cmd {
        ReplCommand::Compare(city) => {
            commands::compare_and_print(
                &city,
                state.token.as_deref(),
                state.analyze,
                config,
                formatter,
            )
            .await?;
        }
        ReplCommand::Cities(filter) => {
            println!("{}", formatter.format_cities(&matching_cities(&filter))?);
        }
        ReplCommand::Token(token) => {
            let message = if token.is_some() {
                "Token set for this session"
            } else {
                "Token cleared"
            };
            state.token = token;
            println!("{}", formatter.success(message));
        }
        ReplCommand::Analyze(on) => {
            state.analyze = on;
            println!(
                "{}",
                formatter.success(&format!(
                    "On-device analysis {}",
                    if on { "on" } else { "off" }
                ))
            );
        }
        ReplCommand::Profile(action) => {
            let switched = matches!(action, ProfileAction::Switch { .. });
            commands::execute_profile(ProfileArgs { action }, config, formatter).await?;
            if switched {
                state.token = session_token(config)?;
            }
        }
        ReplCommand::Exit | ReplCommand::Help => {}
    }

    Ok(())
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0] {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "compare" => {
            if parts.len() < 2 {
                return Err(CliError::InvalidInput("Usage: compare <city>".to_string()));
            }
            Ok(ReplCommand::Compare(parts[1..].join(" ")))
        }
        "cities" => Ok(ReplCommand::Cities(parts[1..].join(" "))),
        "token" => Ok(ReplCommand::Token(parts.get(1).map(|s| s.to_string()))),
        "analyze" => match parts.get(1) {
            Some(&"on") | None => Ok(ReplCommand::Analyze(true)),
            Some(&"off") => Ok(ReplCommand::Analyze(false)),
            Some(other) => Err(CliError::InvalidInput(format!(
                "Usage: analyze [on|off], got '{}'",
                other
            ))),
        },
        "profile" => parse_profile_command(&parts[1..]),
        _ => Ok(ReplCommand::Compare(parts.join(" "))),
    }
}

fn parse_profile_command(args: &[&str]) -> Result<ReplCommand> {
    if args.is_empty() {
        return Ok(ReplCommand::Profile(ProfileAction::Show));
    }

    let action = match args[0] {
        "list" => ProfileAction::List,
        "show" => ProfileAction::Show,
        "switch" => {
            if args.len() < 2 {
                return Err(CliError::InvalidInput("Usage: profile switch <name>".to_string()));
            }
            ProfileAction::Switch {
                name: args[1].to_string(),
            }
        }
        _ => return Err(CliError::InvalidInput(format!("Unknown profile action: {}", args[0]))),
    };

    Ok(ReplCommand::Profile(action))
}

fn get_history_path(config: &Config) -> Result<PathBuf> {
    let dir = match config.directory() {
        Some(dir) => dir.to_path_buf(),
        None => {
            let home = dirs::home_dir()
                .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
            home.join(".juxta")
        }
    };
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <city>                         - Compare both sources for a city");
    println!("  compare <city>                 - Same, for names that clash with a command");
    println!("  cities [filter]                - List knowledge-base cities");
    println!("  token [value]                  - Set or clear the identity token");
    println!("  analyze [on|off]               - Toggle on-device analysis");
    println!("  profile [list|show|switch]     - Manage profiles");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Profile;

    #[test]
    fn test_token_follows_active_profile() {
        let mut config = Config::default();
        let mut first = Profile::new("https://one.example.com");
        first.id_token = Some("first-token".to_string());
        let mut second = Profile::new("https://two.example.com");
        second.id_token = Some("second-token".to_string());
        config.set_profile("one".to_string(), first);
        config.set_profile("two".to_string(), second);

        config.switch_profile("one".to_string()).unwrap();
        assert_eq!(
            token_for_active_profile(None, &config).unwrap().as_deref(),
            Some("first-token")
        );

        config.switch_profile("two".to_string()).unwrap();
        assert_eq!(
            token_for_active_profile(None, &config).unwrap().as_deref(),
            Some("second-token")
        );
        assert_eq!(
            token_for_active_profile(Some("from-env".to_string()), &config)
                .unwrap()
                .as_deref(),
            Some("from-env")
        );
    }

    #[test]
    fn test_profile_without_token() {
        let config = Config::default();
        assert!(token_for_active_profile(None, &config).unwrap().is_none());
    }

    #[test]
    fn test_bare_line_is_a_city() {
        assert_eq!(
            parse_repl_command("Rio de Janeiro").unwrap(),
            ReplCommand::Compare("Rio de Janeiro".to_string())
        );
    }

    #[test]
    fn test_compare_keyword() {
        assert_eq!(
            parse_repl_command("compare   help").unwrap(),
            ReplCommand::Compare("help".to_string())
        );
        assert!(parse_repl_command("compare").is_err());
    }

    #[test]
    fn test_control_commands() {
        assert_eq!(parse_repl_command("q").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("?").unwrap(), ReplCommand::Help);
        assert_eq!(parse_repl_command("analyze off").unwrap(), ReplCommand::Analyze(false));
        assert_eq!(parse_repl_command("analyze").unwrap(), ReplCommand::Analyze(true));
        assert!(parse_repl_command("analyze maybe").is_err());
        assert_eq!(parse_repl_command("token").unwrap(), ReplCommand::Token(None));
        assert_eq!(
            parse_repl_command("cities new").unwrap(),
            ReplCommand::Cities("new".to_string())
        );
    }

    #[test]
    fn test_profile_commands() {
        assert!(matches!(
            parse_repl_command("profile").unwrap(),
            ReplCommand::Profile(ProfileAction::Show)
        ));
        assert!(matches!(
            parse_repl_command("profile switch prod").unwrap(),
            ReplCommand::Profile(ProfileAction::Switch { ref name }) if name == "prod"
        ));
        assert!(parse_repl_command("profile switch").is_err());
        assert!(parse_repl_command("profile nuke").is_err());
    }
}
