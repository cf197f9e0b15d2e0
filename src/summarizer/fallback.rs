//! Caller-side fallback content
//!
//! The core never substitutes filler on its own; it fails with a typed
//! [`SummaryError`]. Callers that must always show *something* (an upload
//! handler, a history view) build a deterministic stand-in record here.

use super::assembler::{resolve_title, DISCLAIMER};
use crate::errors::SummaryError;
use crate::types::{Document, KeyPoint, SummaryMetadata, SummaryRecord};

/// Short human-readable cause for a failed summarization
pub fn failure_reason(error: &SummaryError) -> &'static str {
    match error {
        SummaryError::EmptyInput => "no extractable text was found",
        SummaryError::InsufficientContent { .. } => "the document contains too little text",
        SummaryError::NoCandidateSentences => "no complete sentences were found",
        SummaryError::SummaryTooShort { .. } => "too little summarizable content was found",
        SummaryError::InvalidConfig(_) | SummaryError::Json(_) => {
            "the summarizer was misconfigured"
        }
    }
}

/// Deterministic stand-in record for a document that failed to summarize
pub fn fallback_summary(document: &Document, error: &SummaryError) -> SummaryRecord {
    let title = resolve_title(document, document.first_segment());

    let key_points: Vec<KeyPoint> = [
        format!(
            "An automatic summary could not be produced because {}.",
            failure_reason(error)
        ),
        "Please review the original document for its full content.".to_string(),
    ]
    .into_iter()
    .enumerate()
    .map(|(position, text)| KeyPoint {
        text,
        page: None,
        position,
        score: 0.0,
    })
    .collect();

    let numbered: Vec<String> = key_points
        .iter()
        .enumerate()
        .map(|(i, kp)| format!("{}. {}", i + 1, kp.text))
        .collect();
    let formatted_summary = format!("{}\n\n{DISCLAIMER}", numbered.join("\n"));

    let word_count = document
        .segments
        .iter()
        .map(|s| s.split_whitespace().count())
        .sum();

    SummaryRecord {
        title,
        key_points,
        topics: Vec::new(),
        formatted_summary,
        word_count,
        metadata: SummaryMetadata {
            page_count: document.page_count(),
            ..Default::default()
        },
    }
}
