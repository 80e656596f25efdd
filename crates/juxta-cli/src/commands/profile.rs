//! Profile command implementation.

use crate::cli::{ProfileAction, ProfileArgs};
use crate::config::{Config, Profile};
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the profile command.
pub async fn execute_profile(
    args: ProfileArgs,
    config: &mut Config,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ProfileAction::List => list_profiles(config, formatter),
        ProfileAction::Show => show_active_profile(config, formatter),
        ProfileAction::Switch { name } => switch_profile(config, name, formatter),
        ProfileAction::Set {
            name,
            url,
            token,
            timeout,
        } => set_profile(config, name, url, token, timeout, formatter),
        ProfileAction::Delete { name } => delete_profile(config, name, formatter),
    }
}

/// List all profiles.
fn list_profiles(config: &Config, formatter: &Formatter) -> Result<()> {
    if config.profiles.is_empty() {
        println!("{}", formatter.info("No profiles configured"));
        return Ok(());
    }

    println!("Available profiles:");
    for (name, profile) in &config.profiles {
        if name == &config.active_profile {
            println!("* {}", formatter.success(name));
        } else {
            println!("  {}", name);
        }
        print_profile(profile, "    ");
    }

    Ok(())
}

/// Show the active profile.
fn show_active_profile(config: &Config, formatter: &Formatter) -> Result<()> {
    let profile = config.get_active_profile()?;

    println!("Active profile: {}", formatter.success(&config.active_profile));
    print_profile(profile, "  ");
    println!(
        "  Analysis: {} ({} at {})",
        if config.analysis.enabled { "enabled" } else { "disabled" },
        config.analysis.model,
        config.analysis.endpoint
    );

    Ok(())
}

fn print_profile(profile: &Profile, indent: &str) {
    println!("{}URL: {}", indent, profile.api_base_url);
    println!(
        "{}Token: {}",
        indent,
        if profile.id_token.is_some() { "stored" } else { "not stored" }
    );
    println!("{}Timeout: {}s", indent, profile.request_timeout_secs);
}

/// Switch to a different profile.
fn switch_profile(config: &mut Config, name: String, formatter: &Formatter) -> Result<()> {
    config.switch_profile(name.clone())?;
    config.save()?;
    println!(
        "{}",
        formatter.success(&format!("Switched to profile '{}'", name))
    );
    Ok(())
}

/// Create or update a profile.
///
/// Updating keeps the stored token and timeout unless new ones are given.
fn set_profile(
    config: &mut Config,
    name: String,
    url: String,
    token: Option<String>,
    timeout: Option<u64>,
    formatter: &Formatter,
) -> Result<()> {
    if timeout == Some(0) {
        return Err(CliError::InvalidInput(
            "Timeout must be at least one second".to_string(),
        ));
    }

    let existing = config.profiles.get(&name);
    let action = if existing.is_some() { "Updated" } else { "Created" };

    let mut profile = existing.cloned().unwrap_or_else(|| Profile::new(url.clone()));
    profile.api_base_url = url;
    if token.is_some() {
        profile.id_token = token;
    }
    if let Some(secs) = timeout {
        profile.request_timeout_secs = secs;
    }

    config.set_profile(name.clone(), profile);
    config.save()?;

    println!(
        "{}",
        formatter.success(&format!("{} profile '{}'", action, name))
    );

    Ok(())
}

/// Delete a profile.
fn delete_profile(config: &mut Config, name: String, formatter: &Formatter) -> Result<()> {
    if name == config.active_profile {
        return Err(CliError::NotPermitted(
            "Cannot delete the active profile".to_string(),
        ));
    }

    if config.profiles.remove(&name).is_some() {
        config.save()?;
        println!(
            "{}",
            formatter.success(&format!("Deleted profile '{}'", name))
        );
    } else {
        println!(
            "{}",
            formatter.warning(&format!("Profile '{}' does not exist", name))
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    fn temp_config(dir: &TempDir) -> Config {
        Config::load_from(&dir.path().join("config.toml")).unwrap()
    }

    #[test]
    fn test_set_and_switch_profile() {
        let dir = TempDir::new().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        set_profile(
            &mut config,
            "test".to_string(),
            "http://localhost:3000/prod".to_string(),
            Some("token".to_string()),
            Some(15),
            &formatter,
        )
        .unwrap();

        assert!(config.profiles.contains_key("test"));

        switch_profile(&mut config, "test".to_string(), &formatter).unwrap();
        assert_eq!(config.active_profile, "test");

        let reloaded = temp_config(&dir);
        assert_eq!(reloaded.active_profile, "test");
        assert_eq!(reloaded.profiles["test"].request_timeout_secs, 15);
    }

    #[test]
    fn test_update_keeps_stored_token() {
        let dir = TempDir::new().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        set_profile(
            &mut config,
            "prod".to_string(),
            "https://old.example.com".to_string(),
            Some("secret".to_string()),
            None,
            &formatter,
        )
        .unwrap();
        set_profile(
            &mut config,
            "prod".to_string(),
            "https://new.example.com".to_string(),
            None,
            None,
            &formatter,
        )
        .unwrap();

        let profile = &config.profiles["prod"];
        assert_eq!(profile.api_base_url, "https://new.example.com");
        assert_eq!(profile.id_token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let dir = TempDir::new().unwrap();
        let mut config = temp_config(&dir);
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = set_profile(
            &mut config,
            "x".to_string(),
            "http://localhost".to_string(),
            None,
            Some(0),
            &formatter,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_delete_active_profile() {
        let mut config = Config::default();
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = delete_profile(&mut config, "default".to_string(), &formatter);
        assert!(result.is_err());
    }
}
