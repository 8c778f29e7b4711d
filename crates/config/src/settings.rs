//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{generation, memory, retrieval};
use crate::ConfigError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub llm: LlmSettings,

    #[serde(default)]
    pub rag: RagSettings,

    #[serde(default)]
    pub memory: MemorySettings,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty or "*" means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_true")]
    pub cors_enabled: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            cors_enabled: true,
        }
    }
}

/// Text-completion service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// When false, the composer runs in template mode only
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_model")]
    pub model: String,

    /// OpenAI-compatible chat-completions base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key; prefer the ADALAT_LLM__API_KEY environment variable
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            model: default_model(),
            endpoint: default_endpoint(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagSettings {
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    #[serde(default = "default_max_context_chars")]
    pub max_context_chars: usize,

    /// Distance threshold; chunks farther than this are dropped.
    /// None disables filtering.
    #[serde(default)]
    pub score_threshold: Option<f32>,
}

impl Default for RagSettings {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            max_context_chars: default_max_context_chars(),
            score_threshold: None,
        }
    }
}

/// Session-memory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemorySettings {
    /// Messages included in the prompt context window
    #[serde(default = "default_context_window")]
    pub context_window: usize,
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self {
            context_window: default_context_window(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_true() -> bool {
    true
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_endpoint() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    generation::DEFAULT_TIMEOUT_SECS
}

fn default_max_retries() -> u32 {
    generation::DEFAULT_MAX_RETRIES
}

fn default_top_k() -> usize {
    retrieval::DEFAULT_TOP_K
}

fn default_max_context_chars() -> usize {
    retrieval::DEFAULT_MAX_CONTEXT_CHARS
}

fn default_context_window() -> usize {
    memory::DEFAULT_CONTEXT_WINDOW
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rag.top_k == 0 {
            return Err(ConfigError::InvalidValue {
                field: "rag.top_k".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(threshold) = self.rag.score_threshold {
            if threshold <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: "rag.score_threshold".to_string(),
                    message: "must be positive when set".to_string(),
                });
            }
        }
        if self.llm.enabled && self.llm.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "llm.timeout_secs".to_string(),
                message: "completion calls must be bounded".to_string(),
            });
        }
        Ok(())
    }
}

/// Load settings from files and environment
///
/// Layering, later wins: `config/default.toml`, `config/{env}.toml`,
/// `ADALAT_`-prefixed environment variables (`__` separates sections,
/// e.g. `ADALAT_SERVER__PORT=9000`). Missing files are fine; defaults
/// cover everything.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    if Path::new("config/default.toml").exists() {
        builder = builder.add_source(File::with_name("config/default"));
    }

    if let Some(env_name) = env {
        let env_path = format!("config/{}", env_name);
        if Path::new(&format!("{}.toml", env_path)).exists() {
            builder = builder.add_source(File::with_name(&env_path));
        } else {
            tracing::warn!(env = env_name, "Environment config file not found, skipping");
        }
    }

    builder = builder.add_source(Environment::with_prefix("ADALAT").separator("__"));

    let settings: Settings = builder.build()?.try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.rag.top_k, 5);
        assert_eq!(settings.rag.max_context_chars, 3000);
        assert_eq!(settings.llm.timeout_secs, 30);
        assert!(!settings.llm.enabled);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_top_k() {
        let mut settings = Settings::default();
        settings.rag.top_k = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unbounded_llm() {
        let mut settings = Settings::default();
        settings.llm.enabled = true;
        settings.llm.timeout_secs = 0;
        assert!(settings.validate().is_err());
    }
}
