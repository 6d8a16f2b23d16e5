//! Error types for bias-forge operations.
//!
//! Defines error types for the major subsystems:
//! - Template expansion
//! - Corpus export (filesystem, JSON)
//! - Recipe generation and evaluation

use thiserror::Error;

/// Errors that can occur during template expansion.
#[derive(Debug, Error)]
pub enum ExpansionError {
    #[error("Placeholder '{{{placeholder}}}' in {bias_type}/{test_type} template has no matching variable")]
    UnboundPlaceholder {
        bias_type: String,
        test_type: String,
        placeholder: String,
    },
}

/// Errors that can occur during corpus export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No examples to export")]
    NoExamples,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during recipe operations.
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Missing API key: OPENROUTER_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
