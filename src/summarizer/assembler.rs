//! Summary assembly and title resolution

use std::path::Path;

use crate::errors::{Result, SummaryError};
use crate::nlp::segmenter::split_sentences;
use crate::types::{Document, KeyPoint, SummaryConfig, SummaryMetadata, SummaryRecord, Topic};

/// Closing line of every formatted summary
pub const DISCLAIMER: &str =
    "This summary was generated automatically from the document text and may omit details.";

/// Key point used when no sentence survives segmentation
pub const PLACEHOLDER_KEY_POINT: &str =
    "No meaningful content could be extracted from this document.";

/// Title used when every other source is empty
pub const UNTITLED: &str = "Untitled Document";

const MAX_TITLE_CHARS: usize = 100;
const MIN_SENTENCE_TITLE_CHARS: usize = 10;
const CAPS_SCAN_LINES: usize = 5;

/// Pick a title for `document`.
///
/// Tried in order: the metadata title, the first line of the first page
/// when shorter than 100 characters, the first ALL-CAPS line among the
/// first five, the first sentence when 10 to 100 characters long, and
/// finally the file name without its extension.
pub fn resolve_title(document: &Document, first_page: &str) -> String {
    if let Some(title) = document.title.as_deref().map(str::trim) {
        if !title.is_empty() {
            return title.to_string();
        }
    }

    let lines: Vec<&str> = first_page
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if let Some(first) = lines.first() {
        if first.chars().count() < MAX_TITLE_CHARS {
            return first.to_string();
        }
    }

    if let Some(caps) = lines
        .iter()
        .take(CAPS_SCAN_LINES)
        .find(|l| is_all_caps(l) && l.chars().count() < MAX_TITLE_CHARS)
    {
        return caps.to_string();
    }

    if let Some(sentence) = split_sentences(first_page).first().map(|s| s.trim()) {
        let len = sentence.chars().count();
        if (MIN_SENTENCE_TITLE_CHARS..=MAX_TITLE_CHARS).contains(&len) {
            return sentence.to_string();
        }
    }

    document
        .file_name
        .as_deref()
        .and_then(|name| Path::new(name).file_stem())
        .map(|stem| stem.to_string_lossy().trim().to_string())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string())
}

fn is_all_caps(line: &str) -> bool {
    let mut letters = line.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(|c| c.is_uppercase())
}

/// Renders key points and topics into a [`SummaryRecord`]
#[derive(Debug, Clone)]
pub struct SummaryAssembler {
    include_topics_line: bool,
    include_disclaimer: bool,
    min_summary_chars: usize,
}

impl Default for SummaryAssembler {
    fn default() -> Self {
        Self::from_config(&SummaryConfig::default())
    }
}

impl SummaryAssembler {
    pub fn from_config(config: &SummaryConfig) -> Self {
        Self {
            include_topics_line: config.include_topics_line,
            include_disclaimer: config.include_disclaimer,
            min_summary_chars: config.min_summary_chars,
        }
    }

    /// Topics line plus numbered key points, without the disclaimer
    pub fn render_body(&self, key_points: &[KeyPoint], topics: &[Topic]) -> String {
        let mut sections = Vec::new();

        if self.include_topics_line && !topics.is_empty() {
            let labels: Vec<&str> = topics.iter().map(|t| t.label.as_str()).collect();
            sections.push(format!("Main Topics: {}", labels.join(", ")));
        }

        let points: Vec<String> = key_points
            .iter()
            .enumerate()
            .map(|(i, kp)| format!("{}. {}", i + 1, kp.text))
            .collect();
        if !points.is_empty() {
            sections.push(points.join("\n"));
        }

        sections.join("\n\n")
    }

    /// Build the final record, rejecting bodies under the length floor
    pub fn assemble(
        &self,
        title: String,
        key_points: Vec<KeyPoint>,
        topics: Vec<Topic>,
        word_count: usize,
        metadata: SummaryMetadata,
    ) -> Result<SummaryRecord> {
        let body = self.render_body(&key_points, &topics);
        let length = body.chars().count();
        if length < self.min_summary_chars {
            return Err(SummaryError::SummaryTooShort {
                length,
                minimum: self.min_summary_chars,
            });
        }

        let formatted_summary = if self.include_disclaimer {
            format!("{body}\n\n{DISCLAIMER}")
        } else {
            body
        };

        Ok(SummaryRecord {
            title,
            key_points,
            topics: topics.into_iter().map(|t| t.label).collect(),
            formatted_summary,
            word_count,
            metadata,
        })
    }
}

/// The key point substituted when a document yields no sentences
pub fn placeholder_key_point() -> KeyPoint {
    KeyPoint {
        text: PLACEHOLDER_KEY_POINT.to_string(),
        page: None,
        position: 0,
        score: 0.0,
    }
}
