//! Error types for rapid_summarizer

use thiserror::Error;

/// Result type alias for summarization operations
pub type Result<T> = std::result::Result<T, SummaryError>;

/// Errors surfaced by the summarization core.
///
/// The first four variants describe the content itself and are expected
/// in normal operation; callers typically react to them with fallback
/// content (see [`crate::summarizer::fallback::fallback_summary`]).
#[derive(Error, Debug)]
pub enum SummaryError {
    /// Text is empty or whitespace-only after normalization
    #[error("no extractable content: input is empty after normalization")]
    EmptyInput,

    /// Normalized text is shorter than the configured floor
    #[error("insufficient content: {length} characters after normalization, need at least {minimum}")]
    InsufficientContent { length: usize, minimum: usize },

    /// Segmentation produced no usable sentences
    #[error("no candidate sentences survived segmentation")]
    NoCandidateSentences,

    /// Assembled summary body is too short to be meaningful
    #[error("summary too short to be meaningful: {length} characters, need at least {minimum}")]
    SummaryTooShort { length: usize, minimum: usize },

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SummaryError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Returns `true` for errors caused by the document content rather
    /// than by the caller's configuration.
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::InsufficientContent { .. }
                | Self::NoCandidateSentences
                | Self::SummaryTooShort { .. }
        )
    }
}
