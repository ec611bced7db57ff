//! Wayfarer configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::llm::LlmError;

/// Main Wayfarer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider configuration
    pub llm: LlmConfig,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .wayfarer.yml
        let local_config = PathBuf::from(".wayfarer.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/wayfarer/wayfarer.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("wayfarer").join("wayfarer.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Peek at the log-level key before logging is initialized
    ///
    /// Runs before `setup_logging`, so it must not log and must swallow
    /// every failure; `load` reports those properly later.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let path = match config_path {
            Some(p) => p.clone(),
            None => {
                let local = PathBuf::from(".wayfarer.yml");
                if local.exists() {
                    local
                } else {
                    dirs::config_dir()?.join("wayfarer").join("wayfarer.yml")
                }
            }
        };

        let content = fs::read_to_string(path).ok()?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content).ok()?;
        value.get("log-level")?.as_str().map(String::from)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// LLM provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name (currently only "openai" supported)
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Maximum tokens per response
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl LlmConfig {
    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Result<String, LlmError> {
        std::env::var(&self.api_key_env).map_err(|_| LlmError::MissingApiKey(self.api_key_env.clone()))
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            base_url: "https://api.openai.com".to_string(),
            max_tokens: 4096,
            timeout_ms: 300_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.model, "gpt-3.5-turbo");
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_llm_config_defaults() {
        let config = LlmConfig::default();

        assert_eq!(config.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.base_url, "https://api.openai.com");
        assert_eq!(config.max_tokens, 4096);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
log-level: DEBUG

llm:
  provider: openai
  model: gpt-4o-mini
  api-key-env: MY_API_KEY
  base-url: https://api.example.com
  max-tokens: 8192
  timeout-ms: 60000
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.log_level.as_deref(), Some("DEBUG"));
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.api_key_env, "MY_API_KEY");
        assert_eq!(config.llm.max_tokens, 8192);
        assert_eq!(config.llm.timeout_ms, 60000);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
llm:
  model: gpt-4o
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // Specified value
        assert_eq!(config.llm.model, "gpt-4o");

        // Defaults for unspecified
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.llm.base_url, "https://api.openai.com");
    }

    #[test]
    fn test_load_explicit_path() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wayfarer.yml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "llm:\n  model: gpt-4o").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.llm.model, "gpt-4o");
    }

    #[test]
    fn test_load_log_level_from_file() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wayfarer.yml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "log-level: WARN").unwrap();

        assert_eq!(Config::load_log_level(Some(&path)).as_deref(), Some("WARN"));
    }
}
