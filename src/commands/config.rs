//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config set`: Set a configuration value
//! - `config get`: Print a single configuration value

use owo_colors::OwoColorize;
use serde_json::{Value, json};

use crate::config::{Config, VALID_KEYS};
use crate::error::{AnalysisError, Result};

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let path = Config::config_path()?;

    if output_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&config_json(&config, &path.to_string_lossy()))?
        );
        return Ok(());
    }

    let token_status = if config.api_token().is_some() {
        "configured".green().to_string()
    } else {
        "not configured".dimmed().to_string()
    };

    println!("{}\n", "Configuration:".cyan().bold());
    println!("{}:", "api".cyan());
    println!("  url: {}", config.api_url());
    println!("  token: {token_status}");
    println!("  timeout: {}s", config.request_timeout);
    println!();
    println!("{}", format!("Config file: {}", path.display()).dimmed());
    Ok(())
}

/// JSON view of the effective configuration; the token itself is never included
pub fn config_json(config: &Config, path: &str) -> Value {
    json!({
        "api": {
            "url": config.api_url(),
            "token_configured": config.api_token().is_some(),
            "timeout": config.request_timeout,
        },
        "config_file": path,
    })
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output_json: bool) -> Result<()> {
    validate_config_key(key)?;

    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    if output_json {
        let out = json!({ "action": "config_set", "key": key, "success": true });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Set {}", key.cyan());
    }
    Ok(())
}

/// Get a configuration value
pub fn cmd_config_get(key: &str, output_json: bool) -> Result<()> {
    validate_config_key(key)?;

    let config = Config::load()?;
    let value = config
        .get(key)?
        .ok_or_else(|| AnalysisError::Config(format!("{key} not set")))?;

    if output_json {
        let out = json!({
            "key": key,
            "value": value,
            "masked": key == "api.token",
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{value}");
    }
    Ok(())
}

/// Reject underscore spellings like `api_url` with a dot-notation hint
fn validate_config_key(key: &str) -> Result<&str> {
    if VALID_KEYS.contains(&key) {
        return Ok(key);
    }

    if let Some(pos) = key.find('_') {
        let dot_version = format!("{}.{}", &key[..pos], &key[pos + 1..]);
        if VALID_KEYS.contains(&dot_version.as_str()) {
            return Err(AnalysisError::Config(format!(
                "invalid config key '{key}'. Use dot notation: '{dot_version}'"
            )));
        }
    }

    Err(AnalysisError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_KEYS.join(", ")
    )))
}
