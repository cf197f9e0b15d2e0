//! Term and phrase frequency analysis
//!
//! Builds one immutable [`TermFrequencyTable`] per document. Single words
//! and weighted 2-/3-gram phrases share the table, keyed by their literal
//! lower-cased text. Word and phrase keys never collide because phrase
//! keys always contain a space.

use rustc_hash::FxHashMap;

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{char_len, tokenize};
use crate::types::SummaryConfig;

/// Occurrence counts for the words and phrases of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequencyTable {
    counts: FxHashMap<String, usize>,
}

impl TermFrequencyTable {
    /// Count for a term, 0 when absent
    pub fn get(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Entries sorted by count descending, then term ascending
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl FromIterator<(String, usize)> for TermFrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Configuration for frequency analysis
#[derive(Debug, Clone)]
pub struct FrequencyConfig {
    /// Minimum word length (in characters)
    pub min_word_chars: usize,
    /// Words seen fewer times than this are dropped
    pub min_occurrences: usize,
    pub bigram_weight: usize,
    pub trigram_weight: usize,
    pub bigram_min_chars: usize,
    pub trigram_min_chars: usize,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self::from(&SummaryConfig::default())
    }
}

impl From<&SummaryConfig> for FrequencyConfig {
    fn from(config: &SummaryConfig) -> Self {
        Self {
            min_word_chars: config.min_word_chars,
            min_occurrences: config.min_word_occurrences,
            bigram_weight: config.bigram_weight,
            trigram_weight: config.trigram_weight,
            bigram_min_chars: config.bigram_min_chars,
            trigram_min_chars: config.trigram_min_chars,
        }
    }
}

/// Computes a [`TermFrequencyTable`] from normalized text
#[derive(Debug, Clone, Default)]
pub struct FrequencyAnalyzer {
    config: FrequencyConfig,
    stopwords: StopwordFilter,
}

impl FrequencyAnalyzer {
    pub fn new(config: FrequencyConfig, stopwords: StopwordFilter) -> Self {
        Self { config, stopwords }
    }

    pub fn from_config(config: &SummaryConfig) -> Self {
        Self::new(config.into(), StopwordFilter::from_config(config))
    }

    /// Whether a normalized token counts as a content word
    pub fn is_content_word(&self, token: &str) -> bool {
        char_len(token) >= self.config.min_word_chars && !self.stopwords.is_stopword(token)
    }

    /// Build the frequency table for `text`
    pub fn analyze(&self, text: &str) -> TermFrequencyTable {
        let tokens = tokenize(text);

        let words = tokens
            .iter()
            .filter(|t| self.is_content_word(t))
            .fold(FxHashMap::default(), |mut acc, t| {
                *acc.entry(t.clone()).or_insert(0usize) += 1;
                acc
            })
            .into_iter()
            .filter(|&(_, count)| count >= self.config.min_occurrences);

        let bigrams = self.ngram_counts(
            &tokens,
            2,
            self.config.bigram_min_chars,
            self.config.bigram_weight,
        );
        let trigrams = self.ngram_counts(
            &tokens,
            3,
            self.config.trigram_min_chars,
            self.config.trigram_weight,
        );

        words.chain(bigrams).chain(trigrams).collect()
    }

    /// Weighted counts for every `n`-token window not starting on a stopword
    fn ngram_counts(
        &self,
        tokens: &[String],
        n: usize,
        min_chars: usize,
        weight: usize,
    ) -> FxHashMap<String, usize> {
        tokens
            .windows(n)
            .filter(|window| !self.stopwords.is_stopword(&window[0]))
            .map(|window| window.join(" "))
            .filter(|phrase| char_len(phrase) >= min_chars)
            .fold(FxHashMap::default(), |mut acc, phrase| {
                *acc.entry(phrase).or_insert(0) += weight;
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_need_two_occurrences() {
        let analyzer = FrequencyAnalyzer::default();
        let table = analyzer.analyze("Photosynthesis converts light. Photosynthesis needs water.");

        assert_eq!(table.get("photosynthesis"), 2);
        assert_eq!(table.get("converts"), 0);
        assert!(!table.contains("water"));
    }

    #[test]
    fn test_short_and_stop_words_excluded() {
        let analyzer = FrequencyAnalyzer::default();
        let table = analyzer.analyze("the the the fox fox fox with with with");

        assert!(!table.contains("the"));
        assert!(!table.contains("fox"));
        assert!(!table.contains("with"));
    }

    #[test]
    fn test_phrase_weights() {
        let analyzer = FrequencyAnalyzer::default();
        let table = analyzer.analyze("solar energy storage. solar energy storage.");

        assert_eq!(table.get("solar energy"), 6);
        assert_eq!(table.get("energy storage"), 6);
        assert_eq!(table.get("solar energy storage"), 10);
        assert_eq!(table.get("solar"), 2);
    }

    #[test]
    fn test_windows_starting_on_stopwords_skipped() {
        let analyzer = FrequencyAnalyzer::default();
        let table = analyzer.analyze("the market grew");

        assert!(!table.contains("the market"));
        assert!(!table.contains("the market grew"));
        assert_eq!(table.get("market grew"), 3);
    }

    #[test]
    fn test_phrase_length_floor() {
        let analyzer = FrequencyAnalyzer::default();
        // "ab cd" is 5 chars, under the 2-gram floor of 7
        let table = analyzer.analyze("ab cd");
        assert!(table.is_empty());
    }

    #[test]
    fn test_ranked_is_deterministic() {
        let table: TermFrequencyTable = vec![
            ("beta".to_string(), 2),
            ("alpha".to_string(), 2),
            ("gamma".to_string(), 5),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            table.ranked(),
            vec![("gamma", 5), ("alpha", 2), ("beta", 2)]
        );
    }

    #[test]
    fn test_tables_are_independent_per_document() {
        let analyzer = FrequencyAnalyzer::default();
        let first = analyzer.analyze("orbit orbit orbit");
        let second = analyzer.analyze("comet comet");

        assert_eq!(first.get("orbit"), 3);
        assert_eq!(second.get("orbit"), 0);
    }
}
