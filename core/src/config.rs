use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ConfigError;
use crate::sum::is_numeric;

/// Environment variable holding an inline YAML configuration.
pub const CONFIG_ENV_VAR: &str = "GREETING_CONFIG";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct HandlerConfig {
    /// Name greeted when the event carries no `name`.
    pub default_name: String,
    /// Sequence summed when the event carries no `numbers`.
    pub default_numbers: Vec<Value>,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            default_name: "World".to_string(),
            default_numbers: (1..=5).map(Value::from).collect(),
        }
    }
}

/// Loads the configuration from `config_path` when given, otherwise from
/// [`CONFIG_ENV_VAR`], otherwise falls back to the built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<HandlerConfig> {
    let config = match config_path {
        Some(path) => HandlerConfig::from_file(path)
            .with_context(|| format!("reading handler config {path}"))?,
        None => HandlerConfig::from_env()?.unwrap_or_default(),
    };
    config.validate().context("validating handler config")?;
    Ok(config)
}

impl HandlerConfig {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            origin: path.to_string(),
            error: Box::new(e),
        })?;
        Self::from_yaml(path, &content)
    }

    /// Returns `None` when the variable is not set.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(config_str) => Self::from_yaml(CONFIG_ENV_VAR, &config_str).map(Some),
            Err(_) => Ok(None),
        }
    }

    fn from_yaml(origin: &str, content: &str) -> Result<Self, ConfigError> {
        // an empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConfigError::LoadFailed {
            origin: origin.to_string(),
            error: Box::new(e),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self.default_numbers.iter().position(|v| !is_numeric(v)) {
            return Err(ConfigError::ValidationFailed {
                reason: format!(
                    "default_numbers[{index}] is not numeric: {}",
                    self.default_numbers[index]
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn defaults_match_unconfigured_behavior() {
        let config = HandlerConfig::default();
        config.validate().unwrap();
        assert_eq!(config.default_name, "World");
        assert_eq!(Value::from(config.default_numbers), json!([1, 2, 3, 4, 5]));
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let config = HandlerConfig::from_yaml("test", "default_name: Lambda\n").unwrap();
        assert_eq!(config.default_name, "Lambda");
        assert_eq!(config.default_numbers.len(), 5);
    }

    #[test]
    fn empty_document_is_all_defaults() {
        let config = HandlerConfig::from_yaml("test", "  \n").unwrap();
        assert_eq!(config, HandlerConfig::default());
    }

    #[test]
    fn parse_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_name: Ada").unwrap();
        writeln!(file, "default_numbers: [2, 2.5]").unwrap();

        let path = file.path().to_str().unwrap();
        let config = load_config(Some(path)).unwrap();
        assert_eq!(config.default_name, "Ada");
        assert_eq!(Value::from(config.default_numbers), json!([2, 2.5]));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = HandlerConfig::from_file("/nonexistent/greeting.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/greeting.yaml"));
    }

    #[test]
    fn validate_rejects_non_numeric_defaults() {
        let config = HandlerConfig {
            default_numbers: vec![json!(1), json!("two")],
            ..HandlerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("default_numbers[1]"));
    }
}
