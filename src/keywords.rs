// src/keywords.rs
// Frequency-based keyword and phrase extraction

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::lexicon::EXTRACTOR_STOPWORDS;
use crate::sentiment::SentimentLabel;

/// Bigrams are rarer than unigrams, so matching counts should outrank them.
const BIGRAM_WEIGHT: f64 = 1.5;

// Runs of (accented) letters, digits, or apostrophes.
#[allow(clippy::unwrap_used)]
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zà-ÿ0-9']+").unwrap());

/// A keyword or two-word phrase with its frequency score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPhrase {
    pub phrase: String,
    pub score: f64,
}

/// Extract the top keywords/phrases from free text by unigram and bigram
/// frequency, bigrams weighted higher.
///
/// The ranked list is deduplicated by root word (the first word of each
/// phrase) so "travail" and "travail difficile" never both appear. Empty or
/// all-stopword text yields an empty list.
pub fn extract_phrases(text: &str, max_phrases: usize) -> Vec<ScoredPhrase> {
    let words = tokenize(text);
    if words.is_empty() {
        return Vec::new();
    }

    let mut unigram_counts: HashMap<&str, usize> = HashMap::new();
    for w in &words {
        *unigram_counts.entry(w.as_str()).or_insert(0) += 1;
    }

    let mut bigram_counts: HashMap<String, usize> = HashMap::new();
    for pair in words.windows(2) {
        let bigram = format!("{} {}", pair[0], pair[1]);
        *bigram_counts.entry(bigram).or_insert(0) += 1;
    }

    let mut scored: Vec<ScoredPhrase> = unigram_counts
        .into_iter()
        .map(|(phrase, count)| ScoredPhrase {
            phrase: phrase.to_string(),
            score: count as f64,
        })
        .chain(bigram_counts.into_iter().map(|(phrase, count)| ScoredPhrase {
            phrase,
            score: count as f64 * BIGRAM_WEIGHT,
        }))
        .collect();

    // Score descending; ties broken by phrase so ranking is deterministic.
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.phrase.cmp(&b.phrase))
    });

    let mut seen_roots: HashSet<String> = HashSet::new();
    let mut chosen = Vec::new();
    for entry in scored {
        let root = entry
            .phrase
            .split(' ')
            .next()
            .unwrap_or(entry.phrase.as_str())
            .to_string();
        if !seen_roots.insert(root) {
            continue;
        }
        chosen.push(entry);
        if chosen.len() >= max_phrases {
            break;
        }
    }

    chosen
}

/// Lowercase the text and keep word-pattern tokens that are not stopwords
/// and at least three characters long.
fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .filter(|w| !EXTRACTOR_STOPWORDS.contains(w.as_str()) && w.chars().count() > 2)
        .collect()
}

/// Scale a raw phrase score into a 0.55-0.85 confidence band.
pub fn phrase_confidence(score: f64) -> f64 {
    0.55 + (score * 0.05).min(0.3)
}

/// Confidence nudge applied when ranking phrases from text with a known
/// sentiment: positive entries get a small boost, negative ones a penalty.
pub fn sentiment_adjustment(label: SentimentLabel) -> f64 {
    match label {
        SentimentLabel::Positive => 0.05,
        SentimentLabel::Neutral => 0.0,
        SentimentLabel::Negative => -0.05,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_empty_list() {
        assert!(extract_phrases("", 5).is_empty());
    }

    #[test]
    fn test_all_stopword_text_yields_empty_list() {
        assert!(extract_phrases("le la les et ou de", 5).is_empty());
    }

    #[test]
    fn test_repeated_word_ranks_first() {
        // "le", "et", "au" are stopwords (and too short anyway).
        let phrases = extract_phrases("le travail et le travail difficile au travail", 3);
        assert!(!phrases.is_empty());
        assert!(phrases[0].phrase.starts_with("travail"));
        assert_eq!(phrases[0].score, 3.0);
    }

    #[test]
    fn test_root_word_dedup() {
        let phrases = extract_phrases("le travail et le travail difficile au travail", 5);
        let roots: Vec<&str> = phrases
            .iter()
            .map(|p| p.phrase.split(' ').next().unwrap())
            .collect();
        let unique: HashSet<_> = roots.iter().collect();
        assert_eq!(unique.len(), roots.len());
    }

    #[test]
    fn test_bigram_outranks_equal_frequency_unigram() {
        // "projet important" appears twice (3.0 weighted), "cuisine" twice (2.0).
        let text = "projet important projet important cuisine cuisine";
        let phrases = extract_phrases(text, 5);
        assert_eq!(phrases[0].phrase, "projet important");
        assert_eq!(phrases[0].score, 3.0);
    }

    #[test]
    fn test_short_tokens_dropped() {
        let phrases = extract_phrases("ai vu un chat noir", 5);
        assert!(phrases.iter().all(|p| p.phrase != "ai" && p.phrase != "vu"));
    }

    #[test]
    fn test_respects_max_phrases() {
        let text = "pomme poire banane cerise fraise abricot raisin";
        assert_eq!(extract_phrases(text, 3).len(), 3);
    }

    #[test]
    fn test_phrase_confidence_band() {
        assert_eq!(phrase_confidence(0.0), 0.55);
        assert!((phrase_confidence(2.0) - 0.65).abs() < 1e-9);
        // Saturates at 0.85 for very frequent phrases.
        assert!((phrase_confidence(100.0) - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_sentiment_adjustment_mapping() {
        assert_eq!(sentiment_adjustment(SentimentLabel::Positive), 0.05);
        assert_eq!(sentiment_adjustment(SentimentLabel::Neutral), 0.0);
        assert_eq!(sentiment_adjustment(SentimentLabel::Negative), -0.05);
    }

    #[test]
    fn test_sentiment_nudge_orders_equal_scores() {
        // Equal frequency, different entry sentiment: the nudged confidence
        // ranks the positive-context phrase above the negative one.
        let base = phrase_confidence(2.0);
        let boosted = base + sentiment_adjustment(SentimentLabel::Positive);
        let damped = base + sentiment_adjustment(SentimentLabel::Negative);
        assert!(boosted > base);
        assert!(base > damped);
        assert!((boosted - 0.70).abs() < 1e-9);
        assert!((damped - 0.60).abs() < 1e-9);
    }
}
