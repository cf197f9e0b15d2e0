//! Summarization components
//!
//! Sentence scoring, keyword-diverse key point selection, summary
//! assembly, OCR quality assessment, and caller-side fallback content.

pub mod assembler;
pub mod fallback;
pub mod quality;
pub mod scorer;
pub mod selector;
