//! Chat-completions backend
//!
//! Speaks the OpenAI-compatible `/chat/completions` protocol, which
//! covers Groq, OpenAI and local servers (vLLM, Ollama in compat mode).
//! Every call is bounded by the configured timeout; transient network
//! failures are retried with exponential backoff.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use adalat_config::constants::generation;
use adalat_core::TextGenerator;

use crate::LlmError;

/// Completion-backend configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model name/ID
    pub model: String,
    /// API base URL (the `/chat/completions` path is appended)
    pub endpoint: String,
    /// API key; optional for local endpoints
    pub api_key: Option<String>,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: usize,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum retry attempts for transient failures
    pub max_retries: u32,
    /// Initial backoff duration, doubling each retry
    pub initial_backoff: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "llama-3.3-70b-versatile".to_string(),
            endpoint: "https://api.groq.com/openai/v1".to_string(),
            api_key: None,
            temperature: 0.0,
            max_tokens: 1024,
            timeout: Duration::from_secs(generation::DEFAULT_TIMEOUT_SECS),
            max_retries: generation::DEFAULT_MAX_RETRIES,
            initial_backoff: Duration::from_millis(generation::DEFAULT_INITIAL_BACKOFF_MS),
        }
    }
}

impl From<&adalat_config::LlmSettings> for LlmConfig {
    fn from(settings: &adalat_config::LlmSettings) -> Self {
        Self {
            model: settings.model.clone(),
            endpoint: settings.endpoint.clone(),
            api_key: settings.api_key.clone(),
            timeout: Duration::from_secs(settings.timeout_secs),
            max_retries: settings.max_retries,
            ..Default::default()
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: usize,
    stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// OpenAI-compatible completion backend
pub struct ChatApiBackend {
    config: LlmConfig,
    client: Client,
}

impl ChatApiBackend {
    /// Create a new backend
    ///
    /// Remote endpoints require an API key; local ones do not.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        if config.api_key.is_none()
            && !config.endpoint.starts_with("http://localhost")
            && !config.endpoint.starts_with("http://127.0.0.1")
        {
            return Err(LlmError::Configuration(
                "API key required for remote endpoints".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                LlmError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    fn chat_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.endpoint.trim_end_matches('/')
        )
    }

    async fn execute_request(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let mut builder = self.client.post(self.chat_url()).json(request);
        if let Some(ref key) = self.config.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                LlmError::Timeout(self.config.timeout.as_secs())
            } else {
                LlmError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            // 5xx errors are retryable, 4xx are not
            if status.is_server_error() {
                return Err(LlmError::Network(format!("HTTP {}: {}", status, error_text)));
            }
            return Err(LlmError::Api(format!("HTTP {}: {}", status, error_text)));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let text = parsed
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .ok_or_else(|| LlmError::InvalidResponse("No choices in response".to_string()))?;

        if text.is_empty() {
            return Err(LlmError::InvalidResponse("Empty completion".to_string()));
        }
        Ok(text)
    }

    fn is_retryable(error: &LlmError) -> bool {
        matches!(error, LlmError::Network(_) | LlmError::Timeout(_))
    }

    /// Generate with retry and exponential backoff
    async fn generate_with_retry(&self, prompt: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            stream: false,
        };

        let mut last_error = None;
        let mut backoff = self.config.initial_backoff;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::warn!(
                    ?backoff,
                    attempt,
                    max = self.config.max_retries,
                    "Completion request failed, retrying"
                );
                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }

            match self.execute_request(&request).await {
                Ok(text) => return Ok(text),
                Err(e) if Self::is_retryable(&e) => {
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| LlmError::Network("Max retries exceeded".to_string())))
    }
}

#[async_trait]
impl TextGenerator for ChatApiBackend {
    async fn generate(&self, prompt: &str) -> adalat_core::Result<String> {
        Ok(self.generate_with_retry(prompt).await?)
    }

    async fn is_available(&self) -> bool {
        // A models listing is the cheapest authenticated round trip the
        // protocol offers.
        let url = format!("{}/models", self.config.endpoint.trim_end_matches('/'));
        let mut builder = self.client.get(url);
        if let Some(ref key) = self.config.api_key {
            builder = builder.bearer_auth(key);
        }
        matches!(builder.send().await, Ok(resp) if resp.status().is_success())
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_endpoint_requires_api_key() {
        let config = LlmConfig::default();
        assert!(ChatApiBackend::new(config).is_err());
    }

    #[test]
    fn test_local_endpoint_needs_no_key() {
        let config = LlmConfig {
            endpoint: "http://localhost:11434/v1".to_string(),
            ..Default::default()
        };
        let backend = ChatApiBackend::new(config).unwrap();
        assert_eq!(backend.chat_url(), "http://localhost:11434/v1/chat/completions");
    }

    #[test]
    fn test_chat_url_trims_trailing_slash() {
        let config = LlmConfig {
            endpoint: "http://127.0.0.1:8080/v1/".to_string(),
            ..Default::default()
        };
        let backend = ChatApiBackend::new(config).unwrap();
        assert_eq!(backend.chat_url(), "http://127.0.0.1:8080/v1/chat/completions");
    }

    #[test]
    fn test_retryable_classification() {
        assert!(ChatApiBackend::is_retryable(&LlmError::Timeout(30)));
        assert!(ChatApiBackend::is_retryable(&LlmError::Network("reset".into())));
        assert!(!ChatApiBackend::is_retryable(&LlmError::Api("bad key".into())));
        assert!(!ChatApiBackend::is_retryable(&LlmError::InvalidResponse("empty".into())));
    }
}
