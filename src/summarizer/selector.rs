//! Diversity-aware key point selection
//!
//! Walks scored sentences from best to worst and accepts a sentence only
//! if none of its keywords were claimed by an earlier pick. Diversity is
//! best-effort: when the filter leaves fewer picks than the cap, the best
//! rejected sentences fill the remaining slots.

use std::cmp::Ordering;

use rustc_hash::FxHashSet;

use crate::nlp::tokenizer::{char_len, tokenize};
use crate::types::{KeyPoint, ScoredSentence, SummaryConfig};

/// Filler words too common in speech and prose to signal a topic
const STUTTER_WORDS: &[&str] = &[
    "about", "actually", "anything", "basically", "could", "everything", "going", "gonna",
    "literally", "really", "right", "something", "there", "these", "things", "think",
    "those", "wanna", "which", "would",
];

/// Configuration for key point selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Number of key points to select
    pub max_points: usize,
    /// Minimum keyword length (in characters) for the diversity check
    pub min_keyword_chars: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        let config = SummaryConfig::default();
        Self {
            max_points: config.max_key_points,
            min_keyword_chars: config.min_keyword_chars,
        }
    }
}

/// Result of key point selection
#[derive(Debug, Clone, Default)]
pub struct SelectionResult {
    /// Selected key points in document order
    pub key_points: Vec<KeyPoint>,
    /// Picks that reused a keyword because diversity ran out
    pub relaxed: usize,
}

/// Greedy keyword-diverse selector
#[derive(Debug, Clone)]
pub struct KeyPointSelector {
    config: SelectorConfig,
    stutter: FxHashSet<&'static str>,
}

impl Default for KeyPointSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyPointSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::with_config(SelectorConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self {
            config,
            stutter: STUTTER_WORDS.iter().copied().collect(),
        }
    }

    pub fn from_config(config: &SummaryConfig) -> Self {
        Self::with_config(SelectorConfig {
            max_points: config.max_key_points,
            min_keyword_chars: config.min_keyword_chars,
        })
    }

    /// Set number of key points to select
    pub fn with_max_points(mut self, n: usize) -> Self {
        self.config.max_points = n;
        self
    }

    /// Diversity keywords of a sentence: long tokens outside the stutter set
    pub fn keywords(&self, text: &str) -> FxHashSet<String> {
        tokenize(text)
            .into_iter()
            .filter(|t| {
                char_len(t) >= self.config.min_keyword_chars && !self.stutter.contains(t.as_str())
            })
            .collect()
    }

    /// Select up to `max_points` sentences, returned in document order
    pub fn select(&self, scored: &[ScoredSentence]) -> SelectionResult {
        let limit = self.config.max_points;

        let mut ranked: Vec<&ScoredSentence> = scored.iter().collect();
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.position().cmp(&b.position()))
        });

        let mut used: FxHashSet<String> = FxHashSet::default();
        let mut accepted: Vec<&ScoredSentence> = Vec::new();
        let mut rejected: Vec<&ScoredSentence> = Vec::new();

        for sentence in ranked {
            if accepted.len() >= limit {
                break;
            }
            let keywords = self.keywords(&sentence.candidate.text);
            if keywords.iter().any(|k| used.contains(k)) {
                rejected.push(sentence);
                continue;
            }
            used.extend(keywords);
            accepted.push(sentence);
        }

        // Best-effort: top up from rejected sentences, still best first
        let mut relaxed = 0;
        for sentence in rejected {
            if accepted.len() >= limit {
                break;
            }
            accepted.push(sentence);
            relaxed += 1;
        }

        accepted.sort_by_key(|s| s.position());

        SelectionResult {
            key_points: accepted.into_iter().map(KeyPoint::from_scored).collect(),
            relaxed,
        }
    }
}
