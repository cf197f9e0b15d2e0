//! Word tokenization
//!
//! Lower-cases text, removes non-word characters from inside each token,
//! and splits on whitespace. `"Data-driven"` becomes `"datadriven"` and
//! `"45%"` becomes `"45"`, so counts line up across punctuation variants.

/// Returns `true` for characters kept inside a token
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Normalize a single whitespace-delimited token
pub fn normalize_token(token: &str) -> String {
    token
        .chars()
        .filter(|&c| is_word_char(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Split text into normalized tokens, dropping tokens that end up empty
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(normalize_token)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Length of a token in characters
#[inline]
pub fn char_len(token: &str) -> usize {
    token.chars().count()
}
