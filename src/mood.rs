// src/mood.rs
// LLM mood classification with a strict JSON contract

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::AiConfig;
use crate::llm::{extract_json_object, TextCompletion};

/// Entry content sent to the model is truncated to this many characters.
const MAX_PROMPT_CONTENT_CHARS: usize = 2000;

/// Mood of a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Neutral,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification outcome. `error` carries capability failures, `note`
/// carries soft degradations (parse failures); both are None on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodResult {
    pub mood: Mood,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MoodResult {
    fn neutral(confidence: f64) -> Self {
        Self {
            mood: Mood::Neutral,
            confidence,
            error: None,
            note: None,
        }
    }
}

/// Classifies entry mood via the completion capability.
///
/// There is deliberately no keyword fallback here: when the model path fails
/// the result is neutral with near-zero confidence, because a wrong mood is
/// worse than no mood.
pub struct MoodClassifier {
    config: AiConfig,
    llm: Option<Arc<dyn TextCompletion>>,
}

impl MoodClassifier {
    pub fn new(config: AiConfig, llm: Option<Arc<dyn TextCompletion>>) -> Self {
        Self { config, llm }
    }

    /// Classify the mood of `content`. Never fails: every failure mode maps
    /// to a neutral result with `error` or `note` set.
    pub async fn classify(&self, content: &str) -> MoodResult {
        if content.trim().is_empty() {
            return MoodResult::neutral(0.0);
        }

        let llm = match (&self.llm, self.config.has_llm()) {
            (Some(llm), true) => llm,
            _ => {
                debug!("Mood classification requested without an API key");
                return MoodResult {
                    error: Some("No API key configured".to_string()),
                    ..MoodResult::neutral(0.0)
                };
            }
        };

        let snippet = truncate_chars(content, MAX_PROMPT_CONTENT_CHARS);

        let response = match llm.complete(&few_shot_prompt(snippet)).await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "Mood completion failed");
                return MoodResult {
                    error: Some(e.to_string()),
                    ..MoodResult::neutral(0.0)
                };
            }
        };

        if let Some((mood, confidence)) = parse_mood_response(&response) {
            return MoodResult {
                mood,
                confidence,
                error: None,
                note: None,
            };
        }

        warn!("Mood response did not parse, retrying with strict prompt");
        let response = match llm.complete(&retry_prompt(snippet)).await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "Mood retry completion failed");
                return MoodResult {
                    error: Some(e.to_string()),
                    ..MoodResult::neutral(0.0)
                };
            }
        };

        if let Some((mood, confidence)) = parse_mood_response(&response) {
            return MoodResult {
                mood,
                confidence,
                error: None,
                note: None,
            };
        }

        warn!("Mood retry response did not parse either, defaulting to neutral");
        MoodResult {
            note: Some("AI parsing failed, defaulting to neutral".to_string()),
            ..MoodResult::neutral(0.1)
        }
    }
}

/// Parse a `{"label": ..., "confidence": ...}` object out of model text.
///
/// Takes the first balanced-looking `{...}` substring, so fences and prose
/// around the object are tolerated. A label outside {happy, sad, neutral}
/// counts as a parse failure. A missing or non-numeric confidence defaults
/// to 0.5; numeric strings are accepted.
fn parse_mood_response(text: &str) -> Option<(Mood, f64)> {
    let json_str = extract_json_object(text)?;
    let parsed: serde_json::Value = serde_json::from_str(json_str).ok()?;

    let label = parsed.get("label")?.as_str()?.trim().to_lowercase();
    let mood = match label.as_str() {
        "happy" => Mood::Happy,
        "sad" => Mood::Sad,
        "neutral" => Mood::Neutral,
        _ => return None,
    };

    let confidence = match parsed.get("confidence") {
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(0.5),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.5),
        _ => 0.5,
    };

    Some((mood, confidence.clamp(0.0, 1.0)))
}

/// Truncate at a char boundary.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn few_shot_prompt(content: &str) -> String {
    format!(
        r#"You are an expert sentiment analyst. Read the journal entry below and return EXACTLY one valid JSON object (and nothing else).

RESPONSE FORMAT (json only):
{{"label": "happy" OR "sad" OR "neutral", "confidence": <number 0.0-1.0>}}

RULES (must follow):
1) Choose 'happy' for clearly positive emotions (joy, excitement, relief, gratitude, contentment).
2) Choose 'sad' for clearly negative emotions OR when the entry expresses exhaustion, overwhelm, loneliness, despair, persistent stress, hopelessness, crying, or other signs of negative mental state - even if the writer doesn't use the word "sad".
   Examples of indirect sad signals: "tired", "exhausted", "drained", "empty", "couldn't sleep", "couldn't get out of bed", "I cried", "feeling distant", "overwhelmed", "so stressed I can't think".
3) Choose 'neutral' only for purely factual, descriptive, or balanced entries that do not convey a dominant positive or negative emotional tone.
4) If emotions are mixed, pick the dominant overall tone. If truly balanced, pick 'neutral'.
5) Confidence should reflect your certainty. Use high values (>=0.9) for clear cases, 0.5-0.8 for moderate, <0.5 for ambiguous.

FEW-SHOT EXAMPLES (input -> output):
"I had a wonderful day, I felt joyful after meeting friends." -> {{"label": "happy", "confidence": 0.95}}
"I felt lonely and disappointed today, everything went wrong." -> {{"label": "sad", "confidence": 0.92}}
"Today was a long day, I felt tired and exhausted and nothing went as planned." -> {{"label": "sad", "confidence": 0.85}}
"I felt stressed and overwhelmed at work, very hard and frustrating day." -> {{"label": "sad", "confidence": 0.88}}
"I went to the store and did some chores. Nothing notable." -> {{"label": "neutral", "confidence": 0.90}}
"The meeting was okay, some good points and some concerns were raised." -> {{"label": "neutral", "confidence": 0.75}}
"I was anxious but it turned out fine and I felt relieved." -> {{"label": "happy", "confidence": 0.70}}
"Not a bad day, actually felt pretty good about things." -> {{"label": "happy", "confidence": 0.80}}
"I couldn't get out of bed today, I felt empty and cried a few times." -> {{"label": "sad", "confidence": 0.92}}
"I've been so drained and overwhelmed, nothing helps." -> {{"label": "sad", "confidence": 0.90}}

Now analyze this journal entry and return ONLY the JSON (no extra text):

{content}

JSON Output:"#
    )
}

fn retry_prompt(content: &str) -> String {
    format!(
        r#"Return EXACTLY one JSON object and nothing else.

Format: {{"label": "happy"|"sad"|"neutral", "confidence": <0.0-1.0>}}

IMPORTANT: If the text contains negative emotional signals (including exhaustion, overwhelm, loneliness,
crying, inability to function, hopelessness, persistent stress, or similar), prefer 'sad' rather than
defaulting to 'neutral'. Only choose 'neutral' if the entry is purely factual or clearly balanced.

Analyze the emotional tone of the following journal entry and respond ONLY with the JSON:

{content}

JSON only:"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // parse_mood_response tests
    // ============================================================================

    #[test]
    fn test_parse_clean_object() {
        assert_eq!(
            parse_mood_response("{\"label\": \"happy\", \"confidence\": 0.9}"),
            Some((Mood::Happy, 0.9))
        );
    }

    #[test]
    fn test_parse_with_fence_and_prose() {
        let text = "```json\n{\"label\": \"sad\", \"confidence\": 0.8}\n```";
        assert_eq!(parse_mood_response(text), Some((Mood::Sad, 0.8)));
    }

    #[test]
    fn test_parse_label_case_and_whitespace() {
        let text = "{\"label\": \"  Happy \", \"confidence\": 0.7}";
        assert_eq!(parse_mood_response(text), Some((Mood::Happy, 0.7)));
    }

    #[test]
    fn test_parse_unknown_label_fails() {
        assert_eq!(
            parse_mood_response("{\"label\": \"ecstatic\", \"confidence\": 0.9}"),
            None
        );
    }

    #[test]
    fn test_parse_missing_confidence_defaults() {
        assert_eq!(
            parse_mood_response("{\"label\": \"neutral\"}"),
            Some((Mood::Neutral, 0.5))
        );
    }

    #[test]
    fn test_parse_string_confidence_accepted() {
        assert_eq!(
            parse_mood_response("{\"label\": \"happy\", \"confidence\": \"0.75\"}"),
            Some((Mood::Happy, 0.75))
        );
    }

    #[test]
    fn test_parse_confidence_clamped() {
        assert_eq!(
            parse_mood_response("{\"label\": \"happy\", \"confidence\": 1.7}"),
            Some((Mood::Happy, 1.0))
        );
        assert_eq!(
            parse_mood_response("{\"label\": \"sad\", \"confidence\": -0.2}"),
            Some((Mood::Sad, 0.0))
        );
    }

    #[test]
    fn test_parse_no_object_fails() {
        assert_eq!(parse_mood_response("the mood is happy"), None);
        assert_eq!(parse_mood_response(""), None);
    }

    // ============================================================================
    // classify tests
    // ============================================================================

    #[tokio::test]
    async fn test_blank_content_is_neutral_zero() {
        let classifier = MoodClassifier::new(AiConfig::default(), None);
        let result = classifier.classify("   ").await;
        assert_eq!(result.mood, Mood::Neutral);
        assert_eq!(result.confidence, 0.0);
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_no_api_key_reports_error() {
        let classifier = MoodClassifier::new(AiConfig::default(), None);
        let result = classifier.classify("une belle journée").await;
        assert_eq!(result.mood, Mood::Neutral);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.error.as_deref(), Some("No API key configured"));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "é".repeat(3000);
        let truncated = truncate_chars(&text, MAX_PROMPT_CONTENT_CHARS);
        assert_eq!(truncated.chars().count(), MAX_PROMPT_CONTENT_CHARS);
    }
}
