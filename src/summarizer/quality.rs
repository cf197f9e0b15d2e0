//! Quality assessment for OCR-derived text
//!
//! OCR output degrades into symbol soup and fragments when scans are poor.
//! Two cheap signals catch most of it: the share of alphabetic characters
//! and the share of tokens that look like real words. When the OCR engine
//! reports its own confidence, the two are blended half and half.

use crate::types::{QualityAssessment, QualityLevel};

const HIGH_THRESHOLD: f64 = 0.8;
const MEDIUM_THRESHOLD: f64 = 0.5;
const MAX_WORD_CHARS: usize = 20;

/// Assess `text`; `engine_confidence` is on the engine's 0-100 scale
pub fn assess_quality(text: &str, engine_confidence: Option<f64>) -> QualityAssessment {
    let alphabetic_ratio = alphabetic_ratio(text);
    let word_ratio = word_ratio(text);
    let heuristic = 0.5 * alphabetic_ratio + 0.5 * word_ratio;

    let confidence = match engine_confidence {
        Some(engine) if engine.is_finite() => {
            0.5 * (engine / 100.0).clamp(0.0, 1.0) + 0.5 * heuristic
        }
        _ => heuristic,
    };

    let level = if confidence >= HIGH_THRESHOLD {
        QualityLevel::High
    } else if confidence >= MEDIUM_THRESHOLD {
        QualityLevel::Medium
    } else {
        QualityLevel::Low
    };

    QualityAssessment {
        level,
        confidence,
        alphabetic_ratio,
        word_ratio,
    }
}

fn alphabetic_ratio(text: &str) -> f64 {
    let (alpha, visible) = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .fold((0usize, 0usize), |(a, v), c| {
            (a + usize::from(c.is_alphabetic()), v + 1)
        });
    if visible == 0 {
        0.0
    } else {
        alpha as f64 / visible as f64
    }
}

fn word_ratio(text: &str) -> f64 {
    let (plausible, total) = text
        .split_whitespace()
        .fold((0usize, 0usize), |(p, t), token| {
            (p + usize::from(is_plausible_word(token)), t + 1)
        });
    if total == 0 {
        0.0
    } else {
        plausible as f64 / total as f64
    }
}

/// Alphabetic (apostrophes and hyphens allowed), sensible length, and,
/// for ASCII words, at least one vowel
fn is_plausible_word(token: &str) -> bool {
    let word = token.trim_matches(|c: char| !c.is_alphanumeric());
    let len = word.chars().count();
    if len == 0 || len > MAX_WORD_CHARS {
        return false;
    }
    if !word
        .chars()
        .all(|c| c.is_alphabetic() || c == '\'' || c == '-')
    {
        return false;
    }
    if word.is_ascii() {
        return word
            .chars()
            .any(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y'));
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_is_high_quality() {
        let text = "The committee approved the budget after a long debate about funding.";
        let assessment = assess_quality(text, None);
        assert_eq!(assessment.level, QualityLevel::High);
        assert!(assessment.word_ratio > 0.99);
    }

    #[test]
    fn test_symbol_soup_is_low_quality() {
        let text = "#$% @@1 |||| ~~ 0x9f ;;;; rrrr ## 12";
        let assessment = assess_quality(text, None);
        assert_eq!(assessment.level, QualityLevel::Low);
    }

    #[test]
    fn test_engine_confidence_blends() {
        let text = "The committee approved the budget after a long debate.";
        let trusted = assess_quality(text, Some(95.0));
        let doubtful = assess_quality(text, Some(10.0));
        assert!(trusted.confidence > doubtful.confidence);
        assert_eq!(doubtful.level, QualityLevel::Medium);
    }

    #[test]
    fn test_empty_text() {
        let assessment = assess_quality("", None);
        assert_eq!(assessment.confidence, 0.0);
        assert_eq!(assessment.level, QualityLevel::Low);
    }

    #[test]
    fn test_plausible_word() {
        assert!(is_plausible_word("don't"));
        assert!(is_plausible_word("(rhythm),"));
        assert!(!is_plausible_word("xkcdqq1"));
        assert!(!is_plausible_word("bcdfg"));
    }
}
