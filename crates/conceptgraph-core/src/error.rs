use crate::types::TextAnalysis;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConceptGraphError {
    /// Input text failed the admissibility gate. Terminal: the caller must
    /// surface the message and suggestions verbatim and never retry.
    #[error("content validation failed: {message}")]
    Validation {
        message: String,
        suggestions: Vec<String>,
        analysis: Option<TextAnalysis>,
    },

    /// Extraction produced fewer than the minimum usable number of concepts.
    /// Carries whatever was found so the caller can show it.
    #[error("could not extract enough concepts from the text (found {})", .found.len())]
    InsufficientConcepts { found: Vec<String> },

    /// The text-generation service exhausted its retries during concept or
    /// relationship extraction, where no local fallback exists.
    #[error("text generation failed: {0}")]
    Generation(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConceptGraphError>;
