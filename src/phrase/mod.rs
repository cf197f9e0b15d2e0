//! Term and phrase analysis
//!
//! Frequency counting over words and n-gram phrases, and topic selection
//! from the resulting table.

pub mod frequency;
pub mod topics;
