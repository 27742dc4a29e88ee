// src/sentiment.rs
// Lexicon-based sentiment scoring

use serde::{Deserialize, Serialize};

use crate::lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS};

/// Cutoff separating neutral from polar sentiment, applied symmetrically.
const POLARITY_CUTOFF: f64 = 0.05;

/// Coarse sentiment label derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score text against the positive/negative lexicons.
///
/// The score is `(positive hits - negative hits) / total words`, so it lives
/// in [-1.0, 1.0] and dilutes with entry length. Scores within
/// [`POLARITY_CUTOFF`] of zero are neutral. Empty or whitespace-only text is
/// `(0.0, Neutral)`.
pub fn analyze_sentiment(text: &str) -> (f64, SentimentLabel) {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    if words.is_empty() {
        return (0.0, SentimentLabel::Neutral);
    }

    let mut positive = 0usize;
    let mut negative = 0usize;
    for word in &words {
        if POSITIVE_WORDS.contains(word) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(word) {
            negative += 1;
        }
    }

    let score = (positive as f64 - negative as f64) / words.len() as f64;
    (score, label_for(score))
}

fn label_for(score: f64) -> SentimentLabel {
    if score > POLARITY_CUTOFF {
        SentimentLabel::Positive
    } else if score < -POLARITY_CUTOFF {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}
