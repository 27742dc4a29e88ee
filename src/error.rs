// src/error.rs
// Standardized error types for the analysis library

use thiserror::Error;

/// Main error type for the Carnet analysis library.
///
/// None of the public analysis operations surface these to callers: every
/// LLM or parse failure degrades to a documented fallback value. The type
/// exists for the [`crate::llm::TextCompletion`] boundary and for internal
/// parse plumbing.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("LLM error: {0}")]
    Llm(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Result using AnalysisError
pub type Result<T> = std::result::Result<T, AnalysisError>;
