//! Application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config
//! directory (e.g. `~/.config/ticket-analysis/`) and includes:
//! - Base URL of the analysis API
//! - Optional bearer token
//! - Request timeout
//!
//! `TICKET_ANALYSIS_CONFIG` points at an alternate file. The API URL and token
//! can also be supplied through `TICKET_ANALYSIS_API_URL` and
//! `TICKET_ANALYSIS_API_TOKEN`, which take precedence over the file.

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

pub const CONFIG_PATH_ENV: &str = "TICKET_ANALYSIS_CONFIG";
pub const API_URL_ENV: &str = "TICKET_ANALYSIS_API_URL";
pub const API_TOKEN_ENV: &str = "TICKET_ANALYSIS_API_TOKEN";

/// Keys accepted by `config set` / `config get`
pub const VALID_KEYS: &[&str] = &["api.url", "api.token", "api.timeout"];

const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Main configuration structure
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the analysis API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer token sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: None,
            request_timeout: default_request_timeout(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }

        directories::ProjectDirs::from("", "", "ticket-analysis")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
            .ok_or_else(|| {
                AnalysisError::Config("could not determine a config directory".to_string())
            })
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            AnalysisError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            AnalysisError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        // Owner read/write only, the file may hold a token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    /// Get the API base URL from environment or config file
    pub fn api_url(&self) -> String {
        if let Ok(url) = env::var(API_URL_ENV)
            && !url.is_empty()
        {
            return url;
        }

        self.api_url.clone()
    }

    /// Get the API token from environment or config file
    pub fn api_token(&self) -> Option<String> {
        if let Ok(token) = env::var(API_TOKEN_ENV)
            && !token.is_empty()
        {
            return Some(token);
        }

        self.api_token.clone()
    }

    /// Get the request timeout duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Set a value by dotted key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.url" => {
                url::Url::parse(value).map_err(|e| {
                    AnalysisError::Config(format!("invalid api.url '{value}': {e}"))
                })?;
                self.api_url = value.to_string();
            }
            "api.token" => {
                self.api_token = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "api.timeout" => {
                self.request_timeout = value.parse().map_err(|_| {
                    AnalysisError::Config(format!(
                        "invalid api.timeout '{value}': expected seconds"
                    ))
                })?;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Get a value by dotted key; the token is masked
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match key {
            "api.url" => Ok(Some(self.api_url())),
            "api.token" => Ok(self.api_token().map(|t| mask_sensitive_value(&t))),
            "api.timeout" => Ok(Some(self.request_timeout.to_string())),
            _ => Err(unknown_key(key)),
        }
    }
}

fn unknown_key(key: &str) -> AnalysisError {
    AnalysisError::Config(format!(
        "unknown config key '{key}', expected one of: {}",
        VALID_KEYS.join(", ")
    ))
}

/// Mask a sensitive value by showing only the first 2 and last 2 characters
pub fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}
