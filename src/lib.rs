// src/lib.rs
// Carnet - text analytics and mood intelligence for journal entries

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod color;
pub mod config;
pub mod emotions;
pub mod error;
pub mod insights;
pub mod keywords;
pub mod lexicon;
pub mod llm;
pub mod mood;
pub mod normalize;
pub mod sentiment;
pub mod tags;

pub use color::color_for;
pub use config::AiConfig;
pub use emotions::{ThemeMatch, detect_emotions, identify_themes};
pub use error::{AnalysisError, Result};
pub use insights::{AggregateStats, InsightBundle, InsightGenerator};
pub use keywords::{ScoredPhrase, extract_phrases};
pub use llm::TextCompletion;
pub use mood::{Mood, MoodClassifier, MoodResult};
pub use normalize::normalize;
pub use sentiment::{SentimentLabel, analyze_sentiment};
pub use tags::TagSuggester;
