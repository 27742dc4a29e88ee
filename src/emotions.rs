// src/emotions.rs
// Keyword-set emotion detection and theme identification

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::lexicon::{EMOTION_KEYWORDS, THEME_KEYWORDS};

/// Maximum number of themes reported for a single text.
const MAX_THEMES: usize = 3;

/// A detected theme with its match evidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeMatch {
    pub theme: &'static str,
    /// Fraction of the theme's keyword set found in the text.
    pub confidence: f64,
    /// The keywords that actually matched, sorted.
    pub matched_keywords: Vec<String>,
}

/// Count emotion-keyword hits per category.
///
/// Each distinct word in the text counts at most once per emotion, so
/// repeating "fatigué" ten times does not inflate the tally. Only emotions
/// with at least one hit appear; the map is ordered by emotion name.
pub fn detect_emotions(text: &str) -> BTreeMap<&'static str, usize> {
    let words = word_set(text);
    let mut counts = BTreeMap::new();

    for &(emotion, keywords) in EMOTION_KEYWORDS {
        let hits = keywords.iter().filter(|k| words.contains(**k)).count();
        if hits > 0 {
            counts.insert(emotion, hits);
        }
    }

    counts
}

/// Identify the dominant themes of a text.
///
/// Confidence is the fraction of the theme's keyword set present in the
/// text. Themes with no matches are dropped; at most [`MAX_THEMES`] are
/// returned, strongest first.
pub fn identify_themes(text: &str) -> Vec<ThemeMatch> {
    let words = word_set(text);
    let mut matches = Vec::new();

    for &(theme, keywords) in THEME_KEYWORDS {
        let mut matched: Vec<String> = keywords
            .iter()
            .filter(|k| words.contains(**k))
            .map(|k| k.to_string())
            .collect();
        if matched.is_empty() {
            continue;
        }
        matched.sort();
        matches.push(ThemeMatch {
            theme,
            confidence: matched.len() as f64 / keywords.len() as f64,
            matched_keywords: matched,
        });
    }

    // Stable sort keeps lexicon order on confidence ties.
    matches.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(MAX_THEMES);
    matches
}

/// Distinct lowercase whitespace-delimited words of the text.
fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|w| w.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // detect_emotions tests
    // ============================================================================

    #[test]
    fn test_empty_text_no_emotions() {
        assert!(detect_emotions("").is_empty());
    }

    #[test]
    fn test_single_emotion_detected() {
        let counts = detect_emotions("je suis très heureux aujourd'hui");
        assert_eq!(counts.get("happy"), Some(&1));
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_multiple_hits_in_one_emotion() {
        let counts = detect_emotions("heureux et content et joyeux");
        assert_eq!(counts.get("happy"), Some(&3));
    }

    #[test]
    fn test_repeated_word_counts_once() {
        let counts = detect_emotions("fatigué fatigué fatigué");
        assert_eq!(counts.get("tired"), Some(&1));
    }

    #[test]
    fn test_word_in_several_emotion_sets() {
        // "fier" is both a productive marker and absent elsewhere; "réussi"
        // appears in productive only among emotions.
        let counts = detect_emotions("fier et réussi");
        assert_eq!(counts.get("productive"), Some(&2));
    }

    #[test]
    fn test_zero_count_emotions_omitted() {
        let counts = detect_emotions("triste");
        assert!(counts.contains_key("sad"));
        assert!(!counts.contains_key("happy"));
    }

    // ============================================================================
    // identify_themes tests
    // ============================================================================

    #[test]
    fn test_empty_text_no_themes() {
        assert!(identify_themes("").is_empty());
    }

    #[test]
    fn test_work_theme_detected() {
        let themes = identify_themes("grosse journée de travail avec mes collègues sur le projet");
        assert_eq!(themes[0].theme, "work");
        assert_eq!(
            themes[0].matched_keywords,
            vec!["collègues", "projet", "travail"]
        );
        assert!((themes[0].confidence - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_themes_sorted_by_confidence() {
        // Three health keywords versus one hobby keyword.
        let themes = identify_themes("sport exercice sommeil et un peu de musique");
        assert_eq!(themes[0].theme, "health");
        assert_eq!(themes[1].theme, "hobbies");
        assert!(themes[0].confidence > themes[1].confidence);
    }

    #[test]
    fn test_at_most_three_themes() {
        let text = "travail école famille ami sport musique voyage penser";
        assert_eq!(identify_themes(text).len(), 3);
    }
}
