// src/config.rs
// Explicit AI configuration - single source of truth, no ambient globals

use tracing::{debug, info, warn};

/// Default timeout callers should apply at the completion boundary, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// AI provider configuration passed explicitly into the orchestrating
/// components (tag suggestion, mood classification, insight generation).
///
/// All fields are optional: an empty config simply means every component
/// runs on its deterministic local path.
#[derive(Debug, Clone, Default)]
pub struct AiConfig {
    /// Provider API key (GEMINI_API_KEY or GOOGLE_API_KEY)
    pub api_key: Option<String>,
    /// Model name override; adapters pick their own default when absent
    pub model: Option<String>,
    /// Completion timeout in seconds, enforced by the adapter
    pub timeout_secs: Option<u64>,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// Set `CARNET_DISABLE_LLM=1` to suppress the key even when present
    /// (forces every component onto its local fallback).
    pub fn from_env() -> Self {
        if parse_bool_env("CARNET_DISABLE_LLM").unwrap_or(false) {
            info!("CARNET_DISABLE_LLM is set - LLM disabled, using local fallbacks");
            return Self::default();
        }

        let api_key = read_env("GEMINI_API_KEY").or_else(|| read_env("GOOGLE_API_KEY"));
        let model = read_env("CARNET_AI_MODEL");
        let timeout_secs = read_env("CARNET_AI_TIMEOUT_SECS").and_then(|v| v.parse().ok());

        let config = Self {
            api_key,
            model,
            timeout_secs,
        };
        config.log_status();
        config
    }

    /// Whether an LLM path is configured at all.
    pub fn has_llm(&self) -> bool {
        self.api_key.is_some()
    }

    /// Effective completion timeout in seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    /// Log what is configured without exposing the key value.
    fn log_status(&self) {
        if self.api_key.is_none() {
            warn!("No AI API key configured - analysis will use local fallbacks only");
        } else {
            debug!(model = ?self.model, timeout_secs = self.timeout_secs(), "AI config loaded");
        }
    }
}

/// Read an environment variable, filtering empty values
fn read_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parse a boolean environment variable ("1", "true", "yes" are truthy)
fn parse_bool_env(name: &str) -> Option<bool> {
    std::env::var(name)
        .ok()
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
}
