//! Chat service configuration loaded from `~/.git-sage/config.yml`.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Environment variable overriding the configured API key.
pub const API_KEY_ENV: &str = "GIT_SAGE_API_KEY";

/// Directory under `$HOME` holding the config file and global prompts.
pub const CONFIG_DIR_NAME: &str = ".git-sage";

pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Settings for reaching the chat service.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SageConfig {
    /// OpenAI-compatible chat completions endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: Url,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Bearer token for the endpoint.
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Global prompts directory; `~/.git-sage/prompts` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompts_dir: Option<PathBuf>,
}

impl Default for SageConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: default_api_key(),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            prompts_dir: None,
        }
    }
}

impl fmt::Debug for SageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SageConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .field("prompts_dir", &self.prompts_dir)
            .finish()
    }
}

impl SageConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::InvalidConfig(
                "temperature must be between 0.0 and 2.0".to_string(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        Ok(())
    }

    /// Replace the API key when the environment provides a non-empty one.
    pub fn apply_api_key_override(&mut self, api_key: Option<String>) {
        if let Some(key) = api_key.filter(|key| !key.trim().is_empty()) {
            self.api_key = key;
        }
    }

    /// Apply the fields set in `update`. Returns whether anything was given.
    pub fn apply(&mut self, update: ConfigUpdate) -> Result<bool, AppError> {
        let mut changed = false;

        if let Some(endpoint) = update.endpoint {
            self.endpoint = Url::parse(&endpoint).map_err(|e| {
                let reason = format!("endpoint '{}' is not a valid URL: {}", endpoint, e);
                AppError::InvalidConfig(reason)
            })?;
            changed = true;
        }
        if let Some(model) = update.model {
            self.model = model;
            changed = true;
        }
        if let Some(api_key) = update.api_key {
            self.api_key = api_key;
            changed = true;
        }
        if let Some(timeout_secs) = update.timeout_secs {
            self.timeout_secs = timeout_secs;
            changed = true;
        }

        if changed {
            self.validate()?;
        }
        Ok(changed)
    }

    /// Human-readable listing with the API key masked.
    pub fn describe(&self) -> String {
        let prompts_dir = self
            .prompts_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|| format!("~/{}/prompts", CONFIG_DIR_NAME));
        format!(
            "Endpoint: {}\nModel: {}\nAPI key: {}\nTimeout: {}s\nTemperature: {}\nPrompts dir: {}",
            self.endpoint,
            self.model,
            "*".repeat(8),
            self.timeout_secs,
            self.temperature,
            prompts_dir
        )
    }
}

/// Field changes requested through `gsg config`.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Parse config file content; a blank file yields defaults.
pub fn parse_config_content(content: &str) -> Result<SageConfig, AppError> {
    if content.trim().is_empty() {
        return Ok(SageConfig::default());
    }
    let config: SageConfig = serde_yaml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

fn default_endpoint() -> Url {
    Url::parse("http://localhost:11434/v1/chat/completions")
        .expect("Default endpoint URL must be valid")
}

fn default_model() -> String {
    "qwen2.5-coder:7b".to_string()
}

fn default_api_key() -> String {
    "ollama".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_temperature() -> f32 {
    0.5
}
