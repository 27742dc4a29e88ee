// src/llm.rs
// Text-completion capability boundary and response cleanup helpers

use async_trait::async_trait;

use crate::error::Result;

/// The single capability this library needs from an LLM provider.
///
/// Adapters over Gemini, Groq, or any other backend live outside this crate;
/// they own retries-for-rate-limits, timeouts, and wire formats. From this
/// side a completion may block for seconds and may fail arbitrarily - every
/// caller in this crate converts failure into a deterministic local result.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Send a prompt, get the raw model text back.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Strip a markdown code fence wrapper from a model response, if present.
///
/// Models regularly wrap JSON in ```json ... ``` despite instructions not to.
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.starts_with("```") {
        trimmed
            .lines()
            .skip(1)
            .take_while(|l| !l.starts_with("```"))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        trimmed.to_string()
    }
}

/// Extract the first balanced-looking `{...}` substring from model output.
///
/// Takes everything from the first `{` to the last `}` - forgiving of
/// leading/trailing prose around the object.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&text[start..=end])
}

/// Extract the first `[...]` substring from model output.
pub fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end <= start {
        return None;
    }
    Some(&text[start..=end])
}
