//! Boilerplate stripping and whitespace normalization
//!
//! The normalizer is an ordered list of named [`NormalizationRule`]s, each
//! a pure `&str -> String` transform that can be tested on its own. Every
//! built-in rule either shortens the text or leaves it untouched (the one
//! exception rewrites `\r` to `\n`, which strictly lowers the `\r` count),
//! so re-running the list until nothing changes always terminates. That
//! fixpoint makes [`TextNormalizer::normalize`] idempotent for any input.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{Result, SummaryError};

/// A single named text transform
pub trait NormalizationRule: Send + Sync {
    /// Short, stable identifier (e.g. `"citation_marker"`)
    fn name(&self) -> &str;

    /// Apply the rule, borrowing when nothing changed
    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Regex replacement rule
#[derive(Debug)]
pub struct PatternRule {
    name: &'static str,
    pattern: &'static Lazy<Regex>,
    replacement: &'static str,
}

impl PatternRule {
    pub const fn new(
        name: &'static str,
        pattern: &'static Lazy<Regex>,
        replacement: &'static str,
    ) -> Self {
        Self {
            name,
            pattern,
            replacement,
        }
    }
}

impl NormalizationRule for PatternRule {
    fn name(&self) -> &str {
        self.name
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(text, self.replacement)
    }
}

/// Trims leading and trailing whitespace
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrimRule;

impl NormalizationRule for EdgeTrimRule {
    fn name(&self) -> &str {
        "edge_trim"
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let trimmed = text.trim();
        if trimmed.len() == text.len() {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(trimmed.to_string())
        }
    }
}

// ─── Patterns ───────────────────────────────────────────────────────────────

static CARRIAGE_RETURN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n?").unwrap());

static PAGE_OF_TOTAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:page\s+)+\d+\s+of\s+\d+\b\.?").unwrap());

// A label counts only at a line start or right after a sentence end, so
// "see page 12" in prose survives. Runs of labels go in one match.
static PAGE_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)(^|[.!?]\s+)(?:(?:page\s+)+\d+\b\.?[ \t]*)+").unwrap()
});

static STANDALONE_PAGE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*[-–—]?[ \t]*\d{1,4}[ \t]*[-–—]?[ \t]*$").unwrap());

// Notices end at their own sentence end; single-line transcripts keep the rest
static COPYRIGHT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:\bcopyright\s*©|©|\(c\)\s*(?:19|20)\d{2}|\bcopyright\s+(?:19|20)\d{2})[^.!?\n]*[.!?]?|\ball rights reserved\b[.!]?",
    )
    .unwrap()
});

static DOI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bdoi:?\s*10\.\d{4,9}/\S+").unwrap());

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"]+"#).unwrap());

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.+-]+@[\w-]+(?:\.[\w-]+)+").unwrap());

static CITATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\[\d+(?:\s*[,–-]\s*\d+)*\]|\((?:[A-Z][\w'-]+(?:\s+et\s+al\.)?,?\s+)?(?:19|20)\d{2}[a-z]?\)",
    )
    .unwrap()
});

static CAPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:figure|fig\.|table)[ \t]+\d+(?:\.\d+)*[ \t]*[.:][^.!?\n]*[.!?]?")
        .unwrap()
});

static SECTION_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(?:\d+\.?[ \t]+)?(?:references|bibliography|works cited|appendix(?:[ \t]+[a-z0-9]+)?)[ \t]*:?[ \t]*$",
    )
    .unwrap()
});

static TRAILING_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());

static EXCESS_NEWLINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

static EXCESS_SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{3,}").unwrap());

/// The built-in rule list, in application order
pub fn default_rules() -> Vec<Box<dyn NormalizationRule>> {
    vec![
        Box::new(PatternRule::new("carriage_return", &CARRIAGE_RETURN_RE, "\n")),
        Box::new(PatternRule::new("page_of_total", &PAGE_OF_TOTAL_RE, "")),
        Box::new(PatternRule::new("page_label", &PAGE_LABEL_RE, "")),
        Box::new(PatternRule::new(
            "standalone_page_number",
            &STANDALONE_PAGE_NUMBER_RE,
            "",
        )),
        Box::new(PatternRule::new("copyright", &COPYRIGHT_RE, "")),
        Box::new(PatternRule::new("doi", &DOI_RE, "")),
        Box::new(PatternRule::new("url", &URL_RE, "")),
        Box::new(PatternRule::new("email", &EMAIL_RE, "")),
        Box::new(PatternRule::new("citation_marker", &CITATION_RE, "")),
        Box::new(PatternRule::new("caption", &CAPTION_RE, "")),
        Box::new(PatternRule::new("section_header", &SECTION_HEADER_RE, "")),
        Box::new(PatternRule::new("trailing_space", &TRAILING_SPACE_RE, "")),
        Box::new(PatternRule::new("excess_newlines", &EXCESS_NEWLINES_RE, "\n\n")),
        Box::new(PatternRule::new("excess_spaces", &EXCESS_SPACES_RE, " ")),
        Box::new(EdgeTrimRule),
    ]
}

// ─── Normalizer ─────────────────────────────────────────────────────────────

/// Applies an ordered rule list until the text stops changing
pub struct TextNormalizer {
    rules: Vec<Box<dyn NormalizationRule>>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("rules", &self.rule_names())
            .finish()
    }
}

impl TextNormalizer {
    /// Create a normalizer with no rules
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a normalizer with the built-in rules
    pub fn with_defaults() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Append a rule to the end of the list.
    ///
    /// Custom rules must only ever shorten the text, otherwise
    /// [`normalize`](Self::normalize) may not terminate.
    pub fn add_rule(&mut self, rule: Box<dyn NormalizationRule>) {
        self.rules.push(rule);
    }

    /// Names of the active rules, in order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Look up a rule by name
    pub fn rule(&self, name: &str) -> Option<&dyn NormalizationRule> {
        self.rules
            .iter()
            .find(|r| r.name() == name)
            .map(|r| r.as_ref())
    }

    /// Normalize text to a fixpoint of the rule list
    pub fn normalize(&self, text: &str) -> String {
        let mut current = self.apply_once(text);
        loop {
            let next = self.apply_once(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    /// Run every rule once, in order
    fn apply_once(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            if let Cow::Owned(changed) = rule.apply(&out) {
                out = changed;
            }
        }
        out
    }
}

/// Reject normalized text that is empty or under the content floor
pub fn check_content(normalized: &str, min_chars: usize) -> Result<()> {
    if normalized.trim().is_empty() {
        return Err(SummaryError::EmptyInput);
    }

    let length = normalized.chars().count();
    if length < min_chars {
        return Err(SummaryError::InsufficientContent {
            length,
            minimum: min_chars,
        });
    }

    Ok(())
}
