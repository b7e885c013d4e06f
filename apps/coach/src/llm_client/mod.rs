//! LLM Client: the single point of entry for text-completion calls.
//!
//! No other module talks to the Generative Language API directly. One request
//! per call, no retries: callers treat any `LlmError` as a signal to fall back
//! to the heuristic pipeline.
use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

pub mod prompts;

pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned no text content")]
    EmptyContent,
}

/// Per-call generation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: PromptBody<'a>,
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
struct PromptBody<'a> {
    text: &'a str,
}

/// Thin wrapper over the `models/{model}:generate` endpoint using API-key auth.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl std::fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmClient")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl LlmClient {
    pub fn new(api_key: String, config: &Config) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Options for this client's default model.
    pub fn options(&self, max_output_tokens: u32, temperature: f32) -> CompletionOptions {
        CompletionOptions {
            model: self.model.clone(),
            max_output_tokens,
            temperature,
        }
    }

    /// Sends `prompt` and returns the generated text.
    pub async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<String, LlmError> {
        let url = format!("{}/models/{}:generate", self.api_base, options.model);
        let body = GenerateRequest {
            prompt: PromptBody { text: prompt },
            temperature: options.temperature,
            max_output_tokens: options.max_output_tokens,
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            // the request URL carries the key
            .map_err(|e| LlmError::Http(e.without_url()))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| LlmError::Http(e.without_url()))?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(&raw),
            });
        }

        let json: Value = serde_json::from_str(&raw)?;
        let text = extract_text(&json).ok_or(LlmError::EmptyContent)?;

        debug!(
            "LLM call succeeded: model={}, prompt_chars={}, output_chars={}",
            options.model,
            prompt.len(),
            text.len()
        );

        Ok(text)
    }
}

/// Pulls generated text out of the response, trying the known response shapes in order.
fn extract_text(json: &Value) -> Option<String> {
    if let Some(candidate) = json
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|c| c.first())
    {
        for key in ["content", "output", "text"] {
            if let Some(text) = candidate.get(key).and_then(Value::as_str) {
                return non_blank(text);
            }
        }
        if let Some(message) = candidate.get("message") {
            let text = message
                .get("content")
                .and_then(Value::as_str)
                .or_else(|| message.get("text").and_then(Value::as_str));
            if let Some(text) = text {
                return non_blank(text);
            }
        }
    }

    json.get("output").and_then(Value::as_str).and_then(non_blank)
}

fn non_blank(text: &str) -> Option<String> {
    (!text.trim().is_empty()).then(|| text.to_string())
}

/// Prefers `error.message` from a JSON error body, else the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .map(String::from)
        })
        .unwrap_or_else(|| body.to_string())
}
