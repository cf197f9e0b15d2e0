//! Topic extraction
//!
//! Topics are the highest-count entries of the frequency table with the
//! first letter capitalized. A phrase and one of its constituent words may
//! both appear; the table is taken as-is.

use super::frequency::TermFrequencyTable;
use crate::types::Topic;

/// Selects topic labels from a [`TermFrequencyTable`]
#[derive(Debug, Clone)]
pub struct TopicExtractor {
    max_topics: usize,
}

impl Default for TopicExtractor {
    fn default() -> Self {
        Self::new(10)
    }
}

impl TopicExtractor {
    pub fn new(max_topics: usize) -> Self {
        Self { max_topics }
    }

    /// Top entries by count, most frequent first
    pub fn extract(&self, table: &TermFrequencyTable) -> Vec<Topic> {
        table
            .ranked()
            .into_iter()
            .take(self.max_topics)
            .map(|(term, frequency)| Topic {
                label: capitalize_first(term),
                frequency,
            })
            .collect()
    }
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize_first(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
