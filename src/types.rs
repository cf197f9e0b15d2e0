//! Core types for rapid_summarizer
//!
//! This module defines the data model shared by every stage: the input
//! document, intermediate sentence candidates, the summary record handed
//! back to callers, and the configuration that parameterizes each stage.

use crate::errors::{Result, SummaryError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Document
// ============================================================================

/// A document ready for summarization.
///
/// Text extraction (PDF parsing, OCR) happens upstream; the core only sees
/// the already materialized segments. A document is immutable once built
/// and is consumed by a single summarization call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Title taken from document metadata, if the extractor found one
    #[serde(default)]
    pub title: Option<String>,
    /// Original file name, used as the last-resort title
    #[serde(default)]
    pub file_name: Option<String>,
    /// Text segments in reading order (one per page, or a single blob)
    pub segments: Vec<String>,
    /// Whether `segments` correspond to source pages
    #[serde(default)]
    pub paged: bool,
    /// OCR text per page, when an OCR pass was run
    #[serde(default)]
    pub ocr_segments: Option<Vec<String>>,
    /// Mean OCR engine confidence on a 0-100 scale
    #[serde(default)]
    pub ocr_confidence: Option<f64>,
}

impl Document {
    /// Create a document from a single blob of text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            segments: vec![text.into()],
            ..Default::default()
        }
    }

    /// Create a document from per-page text
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: pages.into_iter().map(Into::into).collect(),
            paged: true,
            ..Default::default()
        }
    }

    /// Builder method: set the metadata title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder method: set the source file name
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Builder method: attach OCR output
    pub fn with_ocr<I, S>(mut self, pages: I, confidence: Option<f64>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ocr_segments = Some(pages.into_iter().map(Into::into).collect());
        self.ocr_confidence = confidence;
        self
    }

    /// Number of source pages (1 for a single blob)
    pub fn page_count(&self) -> usize {
        self.segments.len().max(1)
    }

    /// Text of the first segment, or `""`
    pub fn first_segment(&self) -> &str {
        self.segments.first().map(String::as_str).unwrap_or("")
    }
}

// ============================================================================
// Intermediate artifacts
// ============================================================================

/// A sentence that survived segmentation filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceCandidate {
    /// Sentence exactly as sliced from the normalized text
    pub raw: String,
    /// Trimmed text with interior line breaks folded to spaces
    pub text: String,
    /// Length of `text` in characters
    pub length: usize,
    /// 0-based index among all sentences split from the document
    pub position: usize,
    /// 1-based source page, when the document is paged
    pub page: Option<usize>,
}

/// A candidate with its importance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    pub candidate: SentenceCandidate,
    /// Non-negative score, unbounded above
    pub score: f64,
}

impl ScoredSentence {
    /// Original document-order index
    pub fn position(&self) -> usize {
        self.candidate.position
    }
}

/// A selected sentence in the final summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPoint {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip)]
    pub position: usize,
    #[serde(skip)]
    pub score: f64,
}

impl KeyPoint {
    /// Build a key point from a scored sentence
    pub fn from_scored(scored: &ScoredSentence) -> Self {
        Self {
            text: scored.candidate.text.clone(),
            page: scored.candidate.page,
            position: scored.candidate.position,
            score: scored.score,
        }
    }
}

/// A topic label with the frequency-table count it was ranked by
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub label: String,
    pub frequency: usize,
}

// ============================================================================
// Summary record
// ============================================================================

/// Where the summarized text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    /// Text layer extracted from the document
    #[default]
    Extracted,
    /// Text recognized by OCR
    Ocr,
}

/// Coarse quality bucket for OCR text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityLevel {
    High,
    Medium,
    Low,
}

/// Quality assessment attached to summaries produced from OCR text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityAssessment {
    pub level: QualityLevel,
    /// Blended confidence in `[0, 1]`
    pub confidence: f64,
    /// Share of non-whitespace characters that are alphabetic
    pub alphabetic_ratio: f64,
    /// Share of tokens that look like plausible words
    pub word_ratio: f64,
}

/// Bookkeeping about how a summary was produced
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetadata {
    pub source: TextSource,
    pub page_count: usize,
    /// Candidates that survived segmentation
    pub sentence_count: usize,
    /// Key points accepted despite sharing a keyword with an earlier pick
    pub relaxed_selections: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityAssessment>,
}

/// The structured result of one summarization request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    pub title: String,
    pub key_points: Vec<KeyPoint>,
    pub topics: Vec<String>,
    pub formatted_summary: String,
    pub word_count: usize,
    #[serde(default)]
    pub metadata: SummaryMetadata,
}

// ============================================================================
// Configuration
// ============================================================================

/// Multiplicative scoring policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Applied when the sentence contains an importance marker word
    pub importance_boost: f64,
    /// Applied when the sentence contains a number or percentage
    pub numeric_boost: f64,
    /// Applied when the sentence opens with a main-point lead-in
    pub lead_in_boost: f64,
    /// Position boost falls linearly from 1.0 to `1.0 - position_decay`
    pub position_decay: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            importance_boost: 1.3,
            numeric_boost: 1.2,
            lead_in_boost: 1.25,
            position_decay: 0.5,
        }
    }
}

/// Configuration for a summarization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Maximum number of key points to return
    pub max_key_points: usize,
    /// Maximum number of topics to return
    pub max_topics: usize,
    /// Shortest accepted sentence, in characters
    pub min_sentence_chars: usize,
    /// Longest accepted sentence, in characters
    pub max_sentence_chars: usize,
    /// Normalized text shorter than this is rejected
    pub min_content_chars: usize,
    /// Summary bodies shorter than this are rejected
    pub min_summary_chars: usize,
    /// Shortest word counted by the frequency analyzer
    pub min_word_chars: usize,
    /// Shortest word used as a diversity keyword
    pub min_keyword_chars: usize,
    /// Single words below this count are dropped from the table
    pub min_word_occurrences: usize,
    /// Count added per 2-gram occurrence
    pub bigram_weight: usize,
    /// Count added per 3-gram occurrence
    pub trigram_weight: usize,
    /// Shortest accepted 2-gram, in characters including the space
    pub bigram_min_chars: usize,
    /// Shortest accepted 3-gram, in characters including spaces
    pub trigram_min_chars: usize,
    pub scoring: ScoringWeights,
    /// Stopword language; `None` uses the built-in summary list
    pub language: Option<String>,
    /// Extra stopwords appended to the active list
    pub extra_stopwords: Vec<String>,
    /// Prefix the summary text with a "Main Topics:" line
    pub include_topics_line: bool,
    /// Close the summary text with the auto-generated disclaimer
    pub include_disclaimer: bool,
    /// Substitute a placeholder key point when no sentence survives
    pub placeholder_on_empty: bool,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_key_points: 15,
            max_topics: 10,
            min_sentence_chars: 30,
            max_sentence_chars: 250,
            min_content_chars: 200,
            min_summary_chars: 50,
            min_word_chars: 4,
            min_keyword_chars: 5,
            min_word_occurrences: 2,
            bigram_weight: 3,
            trigram_weight: 5,
            bigram_min_chars: 7,
            trigram_min_chars: 10,
            scoring: ScoringWeights::default(),
            language: None,
            extra_stopwords: Vec::new(),
            include_topics_line: true,
            include_disclaimer: true,
            placeholder_on_empty: true,
        }
    }
}

impl SummaryConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config (missing fields take defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_key_points == 0 {
            return Err(SummaryError::invalid_config("max_key_points must be > 0"));
        }

        if self.min_sentence_chars == 0 {
            return Err(SummaryError::invalid_config(
                "min_sentence_chars must be > 0",
            ));
        }

        if self.max_sentence_chars < self.min_sentence_chars {
            return Err(SummaryError::invalid_config(format!(
                "max_sentence_chars ({}) must be >= min_sentence_chars ({})",
                self.max_sentence_chars, self.min_sentence_chars
            )));
        }

        if self.min_word_occurrences == 0 {
            return Err(SummaryError::invalid_config(
                "min_word_occurrences must be > 0",
            ));
        }

        let weights = &self.scoring;
        for (name, value) in [
            ("importance_boost", weights.importance_boost),
            ("numeric_boost", weights.numeric_boost),
            ("lead_in_boost", weights.lead_in_boost),
        ] {
            if !value.is_finite() || value < 1.0 {
                return Err(SummaryError::invalid_config(format!(
                    "{name} must be a finite value >= 1.0, got {value}"
                )));
            }
        }

        if !(0.0..=1.0).contains(&weights.position_decay) {
            return Err(SummaryError::invalid_config(format!(
                "position_decay must be between 0 and 1, got {}",
                weights.position_decay
            )));
        }

        Ok(())
    }

    /// Builder method: set key point cap
    pub fn with_max_key_points(mut self, max: usize) -> Self {
        self.max_key_points = max;
        self
    }

    /// Builder method: set topic cap
    pub fn with_max_topics(mut self, max: usize) -> Self {
        self.max_topics = max;
        self
    }

    /// Builder method: set the accepted sentence length band
    pub fn with_sentence_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_sentence_chars = min;
        self.max_sentence_chars = max;
        self
    }

    /// Builder method: set the normalized content floor
    pub fn with_min_content_chars(mut self, min: usize) -> Self {
        self.min_content_chars = min;
        self
    }

    /// Builder method: set the summary body floor
    pub fn with_min_summary_chars(mut self, min: usize) -> Self {
        self.min_summary_chars = min;
        self
    }

    /// Builder method: set stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Builder method: set scoring weights
    pub fn with_scoring(mut self, scoring: ScoringWeights) -> Self {
        self.scoring = scoring;
        self
    }

    /// Builder method: toggle the empty-document placeholder
    pub fn with_placeholder_on_empty(mut self, enabled: bool) -> Self {
        self.placeholder_on_empty = enabled;
        self
    }
}

/// The three knobs exposed at the public function boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryOptions {
    pub max_key_points: usize,
    pub max_topics: usize,
    /// Inclusive `(min, max)` sentence length in characters
    pub sentence_length_bounds: (usize, usize),
}

impl Default for SummaryOptions {
    fn default() -> Self {
        let config = SummaryConfig::default();
        Self {
            max_key_points: config.max_key_points,
            max_topics: config.max_topics,
            sentence_length_bounds: (config.min_sentence_chars, config.max_sentence_chars),
        }
    }
}

impl SummaryOptions {
    /// Expand into a full config on top of the defaults
    pub fn to_config(&self) -> SummaryConfig {
        let (min, max) = self.sentence_length_bounds;
        SummaryConfig::default()
            .with_max_key_points(self.max_key_points)
            .with_max_topics(self.max_topics)
            .with_sentence_bounds(min, max)
    }
}

impl From<SummaryOptions> for SummaryConfig {
    fn from(options: SummaryOptions) -> Self {
        options.to_config()
    }
}
