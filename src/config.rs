//! Configuration management for Parley
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{ParleyError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Parley
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Chat behavior configuration
    #[serde(default)]
    pub chat: ChatConfig,

    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Chat behavior configuration
///
/// Controls the model menu, the simulated reply latency, and the
/// suggestion texts offered for quick-send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Model label selected when none has been persisted yet
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Model labels offered by the `/model` menu
    #[serde(default = "default_models")]
    pub models: Vec<String>,

    /// Delay before the fabricated assistant reply lands (milliseconds)
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Prompts offered as quick-send suggestions in an empty session
    #[serde(default = "default_suggestions")]
    pub suggestions: Vec<String>,
}

fn default_model() -> String {
    "ChatGPT 4.1".to_string()
}

fn default_models() -> Vec<String> {
    vec![
        "ChatGPT 4.1".to_string(),
        "ChatGPT 4o".to_string(),
        "ChatGPT 4o mini".to_string(),
    ]
}

fn default_reply_delay_ms() -> u64 {
    crate::service::DEFAULT_REPLY_DELAY_MS
}

fn default_suggestions() -> Vec<String> {
    vec![
        "Draft a checklist for my next project kickoff".to_string(),
        "Explain a tricky concept in simple terms".to_string(),
        "Brainstorm names for a side project".to_string(),
        "Outline a plan for learning something new".to_string(),
    ]
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_model: default_model(),
            models: default_models(),
            reply_delay_ms: default_reply_delay_ms(),
            suggestions: default_suggestions(),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store directory override; defaults to the user data dir when unset
    #[serde(default)]
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from file with CLI overrides applied
    ///
    /// Falls back to defaults when the file does not exist.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::debug!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ParleyError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| ParleyError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(store_path) = &cli.store_path {
            self.storage.path = Some(store_path.clone());
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any validation check fails.
    pub fn validate(&self) -> Result<()> {
        if self.chat.default_model.trim().is_empty() {
            return Err(ParleyError::Config("default_model cannot be empty".to_string()).into());
        }

        if self.chat.models.is_empty() {
            return Err(
                ParleyError::Config("at least one model label is required".to_string()).into(),
            );
        }

        if self.chat.reply_delay_ms == 0 {
            return Err(ParleyError::Config(
                "reply_delay_ms must be greater than 0".to_string(),
            )
            .into());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chat: ChatConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chat.reply_delay_ms, 450);
        assert!(config.chat.models.contains(&config.chat.default_model));
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let cli = Cli::default();
        let config = Config::load("definitely/not/here.yaml", &cli).expect("load failed");
        assert_eq!(config.chat.default_model, "ChatGPT 4.1");
    }

    #[test]
    fn test_config_from_yaml() {
        let yaml = r#"
chat:
  default_model: "Custom Model"
  reply_delay_ms: 100
  models:
    - "Custom Model"
storage:
  path: "/tmp/parley-test"
"#;
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, yaml).expect("write failed");

        let cli = Cli::default();
        let config = Config::load(path.to_str().unwrap(), &cli).expect("load failed");
        assert_eq!(config.chat.default_model, "Custom Model");
        assert_eq!(config.chat.reply_delay_ms, 100);
        assert_eq!(config.storage.path, Some("/tmp/parley-test".to_string()));
        // Unspecified sections keep their defaults.
        assert!(!config.chat.suggestions.is_empty());
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "chat: [not, a, mapping").expect("write failed");

        let cli = Cli::default();
        assert!(Config::load(path.to_str().unwrap(), &cli).is_err());
    }

    #[test]
    fn test_cli_store_path_overrides_file_value() {
        let cli = Cli {
            store_path: Some("/tmp/from-cli".to_string()),
            ..Cli::default()
        };
        let config = Config::load("definitely/not/here.yaml", &cli).expect("load failed");
        assert_eq!(config.storage.path, Some("/tmp/from-cli".to_string()));
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = Config::default();
        config.chat.default_model = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_model_menu() {
        let mut config = Config::default();
        config.chat.models.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_delay() {
        let mut config = Config::default();
        config.chat.reply_delay_ms = 0;
        assert!(config.validate().is_err());
    }
}
