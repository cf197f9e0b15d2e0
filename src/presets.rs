//! Named configuration presets
//!
//! Different entry points historically tuned the summarizer differently:
//! - Document: uploaded PDFs and notes (15 points, 30-250 char sentences)
//! - Transcript: video transcripts, long run-on speech (20 points, 20-300)
//! - Upload: quick preview on upload (12 points, 25-200)

use crate::types::SummaryConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Document,
    Transcript,
    Upload,
}

impl Preset {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "transcript" | "video" | "video_transcript" => Preset::Transcript,
            "upload" | "quick" | "preview" => Preset::Upload,
            _ => Preset::Document,
        }
    }

    /// The configuration this preset stands for
    pub fn config(self) -> SummaryConfig {
        let base = SummaryConfig::default();
        match self {
            Preset::Document => base.with_max_key_points(15).with_sentence_bounds(30, 250),
            Preset::Transcript => base.with_max_key_points(20).with_sentence_bounds(20, 300),
            Preset::Upload => base.with_max_key_points(12).with_sentence_bounds(25, 200),
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Preset::parse(value))
    }
}
