//! Configuration management for the legal assistant
//!
//! Supports loading configuration from:
//! - TOML files (`config/default.toml`, then `config/{env}.toml`)
//! - Environment variables (`ADALAT_` prefix, `__` separator)
//!
//! Tunable defaults shared across crates live in [`constants`].

pub mod constants;
pub mod settings;

pub use settings::{
    load_settings, LlmSettings, MemorySettings, RagSettings, ServerSettings, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<ConfigError> for adalat_core::Error {
    fn from(err: ConfigError) -> Self {
        adalat_core::Error::Config(err.to_string())
    }
}
