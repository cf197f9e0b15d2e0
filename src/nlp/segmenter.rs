//! Sentence segmentation
//!
//! Splits normalized text into paragraphs on blank lines, then into
//! sentences after runs of `.`, `!` or `?` that are followed by whitespace.
//! Terminal punctuation stays attached to its sentence and no sentence
//! crosses a paragraph break.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{SentenceCandidate, SummaryConfig};

static PARAGRAPH_BREAK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*\n").unwrap());

static BOILERPLATE_SENTENCE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // Copyright and rights notices
        Regex::new(
            r"(?i)^(?:©|copyright\s*(?:©|(?:19|20)\d{2})|\(c\)\s*(?:19|20)\d{2}|all rights reserved)",
        )
        .unwrap(),
        // Page labels
        Regex::new(r"(?i)^page\s+\d+\s*[.:]?$").unwrap(),
        // Table-of-contents headers and dotted leader lines
        Regex::new(r"(?i)^(?:table of contents\b|contents\s*[:.]?$|index\s*[:.]?$)").unwrap(),
        Regex::new(r"\.{4,}\s*\d+\s*$").unwrap(),
        // Bare dates
        Regex::new(
            r"(?i)^(?:\d{1,2}[/.-]\d{1,2}[/.-]\d{2,4}|(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{1,2}(?:st|nd|rd|th)?,?\s+\d{4}|\d{1,2}\s+(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{4})\.?$",
        )
        .unwrap(),
        // Bare numbers
        Regex::new(r"^[\d\s.,:;%()+-]+$").unwrap(),
    ]
});

/// Returns `true` for sentences that are document furniture, not content
pub fn is_boilerplate_sentence(sentence: &str) -> bool {
    let trimmed = sentence.trim();
    BOILERPLATE_SENTENCE_RES.iter().any(|re| re.is_match(trimmed))
}

#[inline]
fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

#[inline]
fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '”' | '’')
}

/// Split one paragraph into raw sentence slices.
///
/// A trailing fragment without terminal punctuation is kept as its own
/// sentence. Slices may carry leading whitespace.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }

        // Absorb "?!", "...", and closing quotes into the same boundary
        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if is_terminal(next) || is_closer(next) {
                end = j + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        let at_boundary = match chars.peek() {
            Some(&(_, next)) => next.is_whitespace(),
            None => true,
        };
        if at_boundary {
            sentences.push(&text[start..end]);
            start = end;
        }
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences.retain(|s| !s.trim().is_empty());
    sentences
}

/// Trim and fold interior whitespace (including line breaks) to single spaces
fn clean_sentence(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Configuration for sentence segmentation
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    /// Minimum sentence length (in characters)
    pub min_chars: usize,
    /// Maximum sentence length (in characters)
    pub max_chars: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        let config = SummaryConfig::default();
        Self {
            min_chars: config.min_sentence_chars,
            max_chars: config.max_sentence_chars,
        }
    }
}

/// Turns normalized text into ordered [`SentenceCandidate`]s
#[derive(Debug, Clone, Default)]
pub struct SentenceSegmenter {
    config: SegmenterConfig,
}

impl SentenceSegmenter {
    /// Create a segmenter with default bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SegmenterConfig) -> Self {
        Self { config }
    }

    /// Create from the sentence bounds of a [`SummaryConfig`]
    pub fn from_config(config: &SummaryConfig) -> Self {
        Self::with_config(SegmenterConfig {
            min_chars: config.min_sentence_chars,
            max_chars: config.max_sentence_chars,
        })
    }

    /// Set the accepted length band
    pub fn with_bounds(mut self, min_chars: usize, max_chars: usize) -> Self {
        self.config.min_chars = min_chars;
        self.config.max_chars = max_chars;
        self
    }

    /// Segment a single blob; candidates carry no page number
    pub fn segment(&self, text: &str) -> Vec<SentenceCandidate> {
        let mut candidates = Vec::new();
        let mut position = 0;
        self.segment_into(text, None, &mut position, &mut candidates);
        candidates
    }

    /// Segment per-page text; positions run across pages, pages are 1-based
    pub fn segment_pages<S: AsRef<str>>(&self, pages: &[S]) -> Vec<SentenceCandidate> {
        let mut candidates = Vec::new();
        let mut position = 0;
        for (idx, page) in pages.iter().enumerate() {
            self.segment_into(page.as_ref(), Some(idx + 1), &mut position, &mut candidates);
        }
        candidates
    }

    fn segment_into(
        &self,
        text: &str,
        page: Option<usize>,
        position: &mut usize,
        out: &mut Vec<SentenceCandidate>,
    ) {
        for paragraph in PARAGRAPH_BREAK_RE.split(text) {
            for raw in split_sentences(paragraph) {
                let index = *position;
                *position += 1;

                let cleaned = clean_sentence(raw);
                let length = cleaned.chars().count();
                if length < self.config.min_chars || length > self.config.max_chars {
                    continue;
                }
                if is_boilerplate_sentence(&cleaned) {
                    continue;
                }

                out.push(SentenceCandidate {
                    raw: raw.to_string(),
                    text: cleaned,
                    length,
                    position: index,
                    page,
                });
            }
        }
    }
}
