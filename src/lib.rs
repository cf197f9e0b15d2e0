//! # rapid_summarizer
//!
//! Heuristic extractive summarization for document and transcript text.
//!
//! Given already-extracted text (one blob, or one string per page), the
//! crate strips boilerplate, segments sentences, counts terms and phrases,
//! scores and selects a keyword-diverse set of key points, picks topic
//! labels, and assembles a structured [`SummaryRecord`].
//!
//! ## Features
//!
//! - **Deterministic**: identical input always yields an identical record
//! - **Configurable**: every threshold is a named [`SummaryConfig`] field
//! - **Parallel**: [`summarize_batch`] fans documents out over `rayon`
//! - **Observable**: per-stage `tracing` spans (`tracing` feature, on by
//!   default) and [`pipeline::observer::PipelineObserver`] hooks
//!
//! ## Example
//!
//! ```rust
//! use rapid_summarizer::{summarize, SummaryOptions};
//!
//! let text = "Photosynthesis converts light energy into chemical energy. \
//!     Plants use photosynthesis to build sugars from carbon dioxide and water. \
//!     The primary pigment involved in photosynthesis is chlorophyll. \
//!     Chlorophyll absorbs red and blue light most strongly. \
//!     About 90% of plant dry mass comes from carbon fixed this way.";
//!
//! let record = summarize(text, &SummaryOptions::default()).unwrap();
//! assert!(!record.key_points.is_empty());
//! ```

pub mod errors;
pub mod nlp;
pub mod phrase;
pub mod pipeline;
pub mod presets;
pub mod summarizer;
pub mod types;

use rayon::prelude::*;

// Re-export commonly used types
pub use errors::{Result, SummaryError};
pub use types::{
    Document, KeyPoint, QualityAssessment, QualityLevel, ScoredSentence, ScoringWeights,
    SentenceCandidate, SummaryConfig, SummaryMetadata, SummaryOptions, SummaryRecord,
    TextSource, Topic,
};

// Re-export main functionality
pub use nlp::{
    normalizer::TextNormalizer, segmenter::SentenceSegmenter, stopwords::StopwordFilter,
};
pub use phrase::{
    frequency::{FrequencyAnalyzer, TermFrequencyTable},
    topics::TopicExtractor,
};
pub use pipeline::runner::SummaryPipeline;
pub use presets::Preset;
pub use summarizer::{
    assembler::SummaryAssembler, fallback::fallback_summary, scorer::SentenceScorer,
    selector::KeyPointSelector,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize a plain-text blob with the three public options
pub fn summarize(text: &str, options: &SummaryOptions) -> Result<SummaryRecord> {
    summarize_with_config(text, &options.to_config())
}

/// Summarize a plain-text blob with a full configuration
pub fn summarize_with_config(text: &str, config: &SummaryConfig) -> Result<SummaryRecord> {
    summarize_document(&Document::from_text(text), config)
}

/// Summarize a [`Document`] (paged text, metadata title, OCR fallback)
pub fn summarize_document(document: &Document, config: &SummaryConfig) -> Result<SummaryRecord> {
    SummaryPipeline::new(config.clone())?.summarize(document)
}

/// Summarize many documents in parallel; results keep input order
pub fn summarize_batch(
    documents: &[Document],
    config: &SummaryConfig,
) -> Vec<Result<SummaryRecord>> {
    match SummaryPipeline::new(config.clone()) {
        Ok(pipeline) => documents
            .par_iter()
            .map(|document| pipeline.summarize(document))
            .collect(),
        Err(err) => {
            let message = match err {
                SummaryError::InvalidConfig(message) => message,
                other => other.to_string(),
            };
            documents
                .iter()
                .map(|_| Err(SummaryError::invalid_config(message.clone())))
                .collect()
        }
    }
}
