//! Sentence scoring
//!
//! score = (table weight per word) × position boost × compounding boosts.
//!
//! The base is the sum of frequency-table counts of the sentence's content
//! words divided by its token count, so long sentences do not win on length
//! alone. The position boost falls linearly from 1.0 for the first candidate
//! to `1.0 - position_decay` at the end. Importance markers, numbers and
//! main-point lead-ins each multiply the result independently.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{char_len, tokenize};
use crate::phrase::frequency::TermFrequencyTable;
use crate::types::{ScoredSentence, ScoringWeights, SentenceCandidate, SummaryConfig};

static IMPORTANCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:important|significant|key|critical|essential|fundamental|crucial|major|primary)\b",
    )
    .unwrap()
});

static NUMERIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+(?:[.,]\d+)*\s*%?").unwrap());

static LEAD_IN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\W*(?:the main|one of the|the primary|the key|the most important|the central)\b")
        .unwrap()
});

/// Scores sentence candidates against a document's frequency table
#[derive(Debug, Clone)]
pub struct SentenceScorer {
    weights: ScoringWeights,
    stopwords: StopwordFilter,
    min_word_chars: usize,
}

impl Default for SentenceScorer {
    fn default() -> Self {
        Self::from_config(&SummaryConfig::default())
    }
}

impl SentenceScorer {
    pub fn from_config(config: &SummaryConfig) -> Self {
        Self {
            weights: config.scoring.clone(),
            stopwords: StopwordFilter::from_config(config),
            min_word_chars: config.min_word_chars,
        }
    }

    /// Replace the scoring weights
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Score every candidate; output keeps input order
    pub fn score(
        &self,
        candidates: &[SentenceCandidate],
        table: &TermFrequencyTable,
    ) -> Vec<ScoredSentence> {
        let total = candidates.len();
        candidates
            .iter()
            .enumerate()
            .map(|(idx, candidate)| ScoredSentence {
                score: self.score_one(&candidate.text, idx, total, table),
                candidate: candidate.clone(),
            })
            .collect()
    }

    /// Score a single sentence sitting at `index` of `total` candidates
    pub fn score_one(
        &self,
        text: &str,
        index: usize,
        total: usize,
        table: &TermFrequencyTable,
    ) -> f64 {
        let tokens = tokenize(text);
        let weight: usize = tokens
            .iter()
            .filter(|t| char_len(t) >= self.min_word_chars && !self.stopwords.is_stopword(t))
            .map(|t| table.get(t))
            .sum();
        let base = weight as f64 / tokens.len().max(1) as f64;

        base * self.position_boost(index, total) * self.boost_multiplier(text)
    }

    /// Linear decay from 1.0 at the start to `1.0 - position_decay` at the end
    pub fn position_boost(&self, index: usize, total: usize) -> f64 {
        if total == 0 {
            return 1.0;
        }
        1.0 - self.weights.position_decay * (index as f64 / total as f64)
    }

    /// Product of the content boosts that apply to `text`
    pub fn boost_multiplier(&self, text: &str) -> f64 {
        let mut multiplier = 1.0;
        if IMPORTANCE_RE.is_match(text) {
            multiplier *= self.weights.importance_boost;
        }
        if NUMERIC_RE.is_match(text) {
            multiplier *= self.weights.numeric_boost;
        }
        if LEAD_IN_RE.is_match(text) {
            multiplier *= self.weights.lead_in_boost;
        }
        multiplier
    }
}
