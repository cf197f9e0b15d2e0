//! Stopword filtering
//!
//! The default filter uses a fixed English list tuned for summarization.
//! Language-specific lists come from the `stop-words` crate, and callers
//! may extend either with their own words.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::types::SummaryConfig;

/// Function words excluded from frequency analysis by default
const SUMMARY_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "done",
    "down", "during", "each", "either", "etc", "even", "ever", "every", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "however", "i", "if", "in", "into", "is",
    "it", "its", "itself", "just", "may", "me", "might", "more", "most", "much", "must",
    "my", "myself", "neither", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shall", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this",
    "those", "through", "thus", "to", "too", "under", "until", "up", "upon", "us",
    "very", "was", "we", "were", "what", "when", "where", "whether", "which", "while",
    "who", "whom", "whose", "why", "will", "with", "within", "without", "would", "yet",
    "you", "your", "yours", "yourself", "yourselves",
];

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::summary_default()
    }
}

impl StopwordFilter {
    /// Create a new stopword filter for the given language
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi, hu, tr, pl, ar
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// The built-in English list used for summarization
    pub fn summary_default() -> Self {
        Self::from_list(SUMMARY_STOPWORDS)
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Build the filter a [`SummaryConfig`] asks for
    pub fn from_config(config: &SummaryConfig) -> Self {
        let mut filter = match config.language.as_deref() {
            Some(language) => Self::new(language),
            None => Self::summary_default(),
        };
        let extra: Vec<&str> = config.extra_stopwords.iter().map(String::as_str).collect();
        filter.add_stopwords(&extra);
        filter
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check if a word is a stopword, ignoring case
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            // Unknown codes keep the summarization list rather than guessing
            _ => {
                return SUMMARY_STOPWORDS.iter().map(|s| s.to_string()).collect();
            }
        };

        get(lang).iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_stopwords() {
        let filter = StopwordFilter::default();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("and"));
        assert!(filter.is_stopword("which"));
        assert!(!filter.is_stopword("important"));
        assert!(!filter.is_stopword("revenue"));
    }

    #[test]
    fn test_english_crate_stopwords() {
        let filter = StopwordFilter::new("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("photosynthesis"));
    }

    #[test]
    fn test_german_stopwords() {
        let filter = StopwordFilter::new("de");

        assert!(filter.is_stopword("der"));
        assert!(filter.is_stopword("und"));
        assert!(!filter.is_stopword("maschine"));
    }

    #[test]
    fn test_unknown_language_uses_summary_list() {
        let filter = StopwordFilter::new("klingon");
        assert_eq!(filter.len(), StopwordFilter::summary_default().len());
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));
    }

    #[test]
    fn test_from_config_extends_list() {
        let mut config = SummaryConfig::default();
        config.extra_stopwords = vec!["Lecture".to_string()];
        let filter = StopwordFilter::from_config(&config);

        assert!(filter.is_stopword("lecture"));
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_from_config_with_language() {
        let config = SummaryConfig::default().with_language("de");
        let filter = StopwordFilter::from_config(&config);

        assert!(filter.is_stopword("Und"));
        assert!(!filter.is_empty());
    }
}
