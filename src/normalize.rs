// src/normalize.rs
// Candidate tag cleanup: strip, correct, filter, dedupe, cap

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::{EXCLUDED_TAG_WORDS, SPELLING_CORRECTIONS};

/// Hard cap on a normalized tag list.
pub const MAX_TAGS: usize = 30;

// Keep word characters (unicode), whitespace and hyphens; drop the rest.
#[allow(clippy::unwrap_used)]
static STRIP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());

/// Normalize a list of raw tag candidates (model output lines, user input,
/// extracted keywords) into a clean, deduplicated, capped tag list.
///
/// Each candidate is stripped of punctuation, lowercased, whitespace
/// collapsed, spell-corrected, then dropped if empty or on the exclusion
/// list. First occurrence wins on duplicates; at most [`MAX_TAGS`] survive.
///
/// Idempotent: normalizing an already-normalized list is a no-op.
pub fn normalize(candidates: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut normalized = Vec::new();

    for candidate in candidates {
        let tag = clean_candidate(candidate);
        if tag.is_empty() || EXCLUDED_TAG_WORDS.contains(tag.as_str()) {
            continue;
        }
        if !seen.insert(tag.clone()) {
            continue;
        }
        normalized.push(tag);
        if normalized.len() >= MAX_TAGS {
            break;
        }
    }

    normalized
}

/// Clean a single candidate: strip, lowercase, collapse whitespace, correct
/// spelling. Returns an empty string when nothing survives.
fn clean_candidate(raw: &str) -> String {
    let stripped = STRIP_PATTERN.replace_all(raw, "");
    let lowered = stripped.trim().to_lowercase();
    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");

    match SPELLING_CORRECTIONS.get(collapsed.as_str()) {
        Some(corrected) => (*corrected).to_string(),
        None => collapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_strips_punctuation_and_lowercases() {
        assert_eq!(normalize(&strings(&["  Travail!!  "])), vec!["travail"]);
    }

    #[test]
    fn test_collapses_internal_whitespace() {
        assert_eq!(
            normalize(&strings(&["vie   de    famille"])),
            vec!["vie de famille"]
        );
    }

    #[test]
    fn test_keeps_hyphens_and_accents() {
        assert_eq!(
            normalize(&strings(&["week-end", "café"])),
            vec!["week-end", "café"]
        );
    }

    #[test]
    fn test_opinion_word_dropped_spelling_corrected_duplicate_collapsed() {
        // Documented scenario: the apostrophe is stripped ("j'aime" -> "jaime",
        // excluded), "ecole" gains its accent, and the case variant collapses.
        assert_eq!(
            normalize(&strings(&["j'aime", "ecole", "Ecole"])),
            vec!["école"]
        );
    }

    #[test]
    fn test_empty_and_punctuation_only_dropped() {
        assert!(normalize(&strings(&["", "   ", "!!!", "..."])).is_empty());
    }

    #[test]
    fn test_dedupe_preserves_first_occurrence_order() {
        assert_eq!(
            normalize(&strings(&["sport", "musique", "Sport", "musique"])),
            vec!["sport", "musique"]
        );
    }

    #[test]
    fn test_caps_at_thirty() {
        let many: Vec<String> = (0..50).map(|i| format!("tag{i}")).collect();
        assert_eq!(normalize(&many).len(), MAX_TAGS);
    }

    #[test]
    fn test_idempotent() {
        let input = strings(&["j'adore", "feuilleton", "École", "Vie   Pro", "vie pro"]);
        let once = normalize(&input);
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_duplicates_in_output() {
        let input = strings(&["a1", "b2", "a1", "B2", "a1!"]);
        let out = normalize(&input);
        let unique: std::collections::HashSet<_> = out.iter().collect();
        assert_eq!(unique.len(), out.len());
    }
}
