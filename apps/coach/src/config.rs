use tracing::warn;

use crate::errors::AppError;

pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta2";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
/// Nothing here is required at startup: the credential is only demanded
/// by code paths that call the completion endpoint. `.env` is loaded by `main`
/// before logging starts, since it may carry `RUST_LOG`.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            google_api_key: optional_env(API_KEY_ENV),
            model: optional_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            timeout_secs: parse_timeout(optional_env("LLM_TIMEOUT_SECS")),
        }
    }

    /// An explicit key (from the command line) takes precedence over the environment.
    pub fn with_api_key_override(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.google_api_key = Some(key);
        }
        self
    }

    pub fn require_api_key(&self) -> Result<&str, AppError> {
        self.google_api_key.as_deref().ok_or_else(|| {
            AppError::Config(format!(
                "{API_KEY_ENV} must be set in the environment or provided with --api-key"
            ))
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            google_api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// A malformed timeout must not block commands that never reach the network.
fn parse_timeout(raw: Option<String>) -> u64 {
    match raw {
        Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
            warn!(
                "LLM_TIMEOUT_SECS='{raw}' is not a whole number of seconds, using {DEFAULT_TIMEOUT_SECS}"
            );
            DEFAULT_TIMEOUT_SECS
        }),
        None => DEFAULT_TIMEOUT_SECS,
    }
}
