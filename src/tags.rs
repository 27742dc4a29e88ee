// src/tags.rs
// Tag suggestion: LLM extraction with a frequency-based local fallback

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::AiConfig;
use crate::lexicon::FALLBACK_TAG_STOPWORDS;
use crate::llm::{extract_json_array, strip_code_fences, TextCompletion};
use crate::normalize::normalize;

/// Candidate pool size for the frequency fallback before normalization.
const FALLBACK_POOL: usize = 10;

// Accented-letter-aware words of four or more characters, hyphens allowed.
#[allow(clippy::unwrap_used)]
static FALLBACK_WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zà-ÿ0-9-]{4,}").unwrap());

/// Suggests tags for a journal entry.
///
/// When a completion client is available the tags come from a French
/// noun-extraction prompt; otherwise, or on any failure along that path, the
/// most frequent qualifying words of the text are used instead. `suggest`
/// never fails.
pub struct TagSuggester {
    config: AiConfig,
    llm: Option<Arc<dyn TextCompletion>>,
}

impl TagSuggester {
    pub fn new(config: AiConfig, llm: Option<Arc<dyn TextCompletion>>) -> Self {
        Self { config, llm }
    }

    /// Suggest up to `tag_count` tags for `text`. `tag_count` is clamped to
    /// 1..=3.
    pub async fn suggest(&self, text: &str, tag_count: usize) -> Vec<String> {
        let tag_count = tag_count.clamp(1, 3);

        if self.config.has_llm() {
            if let Some(llm) = &self.llm {
                match llm.complete(&generation_prompt(text, tag_count)).await {
                    Ok(response) => {
                        let tags = parse_tag_response(&response, tag_count);
                        if !tags.is_empty() {
                            return tags;
                        }
                        warn!("Tag response yielded no usable tags, using keyword fallback");
                    }
                    Err(e) => {
                        warn!(error = %e, "Tag completion failed, using keyword fallback");
                    }
                }
            }
        } else {
            debug!("No LLM configured for tag suggestion, using keyword fallback");
        }

        fallback_tags(text, tag_count)
    }
}

/// French noun-extraction prompt. The request line adapts to the desired
/// tag count.
fn generation_prompt(text: &str, tag_count: usize) -> String {
    let request = match tag_count {
        1 => "Propose exactement 1 tag, le plus pertinent",
        2 => "Propose exactement 2 tags, les plus pertinents",
        _ => "Propose exactement 3 tags, les plus pertinents",
    };
    format!(
        "Tu es un assistant qui extrait des tags de noms/substantifs pour un agenda personnel. \
         Règles strictes : \
         - Extrais SEULEMENT les noms, lieux, objets, concepts (ex: école, étude, amour, travail, santé, famille) \
         - IGNORE tous les verbes (marcher, manger, faire, aller, etc.) \
         - Corrige l'orthographe des mots mal écrits \
         - {request} \
         - Format : liste JSON en minuscules \
         - Évite les doublons et mots vides \
         Texte:\n{text}"
    )
}

/// Parse a model tag response: JSON array of strings first, comma/newline
/// split second, then normalization and truncation.
fn parse_tag_response(response: &str, tag_count: usize) -> Vec<String> {
    let cleaned = strip_code_fences(response);

    let candidates: Vec<String> = match extract_json_array(&cleaned)
        .and_then(|a| serde_json::from_str::<Vec<serde_json::Value>>(a).ok())
    {
        Some(values) => values
            .into_iter()
            .filter_map(|v| match v {
                serde_json::Value::String(s) => Some(s),
                other => Some(other.to_string()),
            })
            .collect(),
        None => cleaned
            .split(['\n', ','])
            .map(|s| s.to_string())
            .collect(),
    };

    let mut tags = normalize(&candidates);
    tags.truncate(tag_count);
    tags
}

/// Frequency fallback: qualifying words ranked by (frequency desc, word asc),
/// top of the pool normalized and truncated.
fn fallback_tags(text: &str, tag_count: usize) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut freq: HashMap<&str, usize> = HashMap::new();
    for m in FALLBACK_WORD_PATTERN.find_iter(&lower) {
        let word = m.as_str();
        if FALLBACK_TAG_STOPWORDS.contains(word) {
            continue;
        }
        *freq.entry(word).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = freq.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let candidates: Vec<String> = ranked
        .into_iter()
        .take(FALLBACK_POOL)
        .map(|(w, _)| w.to_string())
        .collect();

    let mut tags = normalize(&candidates);
    tags.truncate(tag_count);
    tags
}
