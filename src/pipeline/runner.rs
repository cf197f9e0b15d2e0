//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! [`SummaryPipeline`] owns one configured instance of every stage and
//! runs them in order for each document:
//!
//! ```text
//! text ─> normalize ─> segment ─┬─> frequency ─> topics
//!                               └─> score (uses frequency) ─> select ─> assemble
//! ```
//!
//! A pipeline holds no per-document state, so one instance can serve many
//! documents concurrently.

use crate::errors::{Result, SummaryError};
use crate::nlp::normalizer::{check_content, TextNormalizer};
use crate::nlp::segmenter::SentenceSegmenter;
use crate::phrase::frequency::FrequencyAnalyzer;
use crate::phrase::topics::TopicExtractor;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_ASSEMBLE,
    STAGE_FREQUENCY, STAGE_NORMALIZE, STAGE_SCORE, STAGE_SEGMENT, STAGE_SELECT, STAGE_TOPICS,
};
use crate::summarizer::assembler::{placeholder_key_point, resolve_title, SummaryAssembler};
use crate::summarizer::quality::assess_quality;
use crate::summarizer::scorer::SentenceScorer;
use crate::summarizer::selector::KeyPointSelector;
use crate::types::{Document, SummaryConfig, SummaryMetadata, SummaryRecord, TextSource};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Emit a debug event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

/// Normalized text of one source, ready for segmentation
struct NormalizedSource {
    source: TextSource,
    pages: Vec<String>,
    joined: String,
}

/// A statically-composed summarization pipeline
#[derive(Debug)]
pub struct SummaryPipeline {
    config: SummaryConfig,
    normalizer: TextNormalizer,
    segmenter: SentenceSegmenter,
    analyzer: FrequencyAnalyzer,
    topics: TopicExtractor,
    scorer: SentenceScorer,
    selector: KeyPointSelector,
    assembler: SummaryAssembler,
}

impl Default for SummaryPipeline {
    fn default() -> Self {
        Self::build(SummaryConfig::default())
    }
}

impl SummaryPipeline {
    /// Validate `config` and build every stage from it
    pub fn new(config: SummaryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SummaryConfig) -> Self {
        Self {
            normalizer: TextNormalizer::with_defaults(),
            segmenter: SentenceSegmenter::from_config(&config),
            analyzer: FrequencyAnalyzer::from_config(&config),
            topics: TopicExtractor::new(config.max_topics),
            scorer: SentenceScorer::from_config(&config),
            selector: KeyPointSelector::from_config(&config),
            assembler: SummaryAssembler::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Summarize without observation
    pub fn summarize(&self, document: &Document) -> Result<SummaryRecord> {
        self.run(document, &mut NoopObserver)
    }

    /// Execute every stage for `document`.
    ///
    /// The `observer` receives callbacks at each stage boundary. Pass
    /// [`NoopObserver`] for zero-overhead execution.
    pub fn run(
        &self,
        document: &Document,
        observer: &mut impl PipelineObserver,
    ) -> Result<SummaryRecord> {
        // Stage 0: Normalize, falling back to OCR text when the text layer is thin
        trace_stage!(STAGE_NORMALIZE);
        observer.on_stage_start(STAGE_NORMALIZE);
        let clock = StageClock::start();
        let normalized = self.normalize_document(document)?;
        let report = StageReportBuilder::new(clock.elapsed())
            .items(normalized.joined.chars().count())
            .build();
        observer.on_stage_end(STAGE_NORMALIZE, &report);
        trace_event!(
            source = ?normalized.source,
            chars = normalized.joined.len(),
            "normalized document"
        );

        // Stage 1: Segment
        trace_stage!(STAGE_SEGMENT);
        observer.on_stage_start(STAGE_SEGMENT);
        let clock = StageClock::start();
        let candidates = if document.paged {
            self.segmenter.segment_pages(&normalized.pages)
        } else {
            self.segmenter.segment(&normalized.joined)
        };
        let report = StageReportBuilder::new(clock.elapsed())
            .items(candidates.len())
            .build();
        observer.on_stage_end(STAGE_SEGMENT, &report);

        if candidates.is_empty() && !self.config.placeholder_on_empty {
            return Err(SummaryError::NoCandidateSentences);
        }

        // Stage 2: Frequency table
        trace_stage!(STAGE_FREQUENCY);
        observer.on_stage_start(STAGE_FREQUENCY);
        let clock = StageClock::start();
        let table = self.analyzer.analyze(&normalized.joined);
        let report = StageReportBuilder::new(clock.elapsed())
            .items(table.len())
            .build();
        observer.on_stage_end(STAGE_FREQUENCY, &report);

        // Stage 3: Topics
        trace_stage!(STAGE_TOPICS);
        observer.on_stage_start(STAGE_TOPICS);
        let clock = StageClock::start();
        let topics = self.topics.extract(&table);
        let report = StageReportBuilder::new(clock.elapsed())
            .items(topics.len())
            .build();
        observer.on_stage_end(STAGE_TOPICS, &report);

        // Stage 4: Score
        trace_stage!(STAGE_SCORE);
        observer.on_stage_start(STAGE_SCORE);
        let clock = StageClock::start();
        let scored = self.scorer.score(&candidates, &table);
        let report = StageReportBuilder::new(clock.elapsed())
            .items(scored.len())
            .build();
        observer.on_stage_end(STAGE_SCORE, &report);

        // Stage 5: Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let selection = self.selector.select(&scored);
        let (key_points, relaxed) = if selection.key_points.is_empty() {
            trace_event!("no candidate sentences, using placeholder key point");
            (vec![placeholder_key_point()], 0)
        } else {
            (selection.key_points, selection.relaxed)
        };
        let report = StageReportBuilder::new(clock.elapsed())
            .items(key_points.len())
            .build();
        observer.on_stage_end(STAGE_SELECT, &report);
        trace_event!(
            key_points = key_points.len(),
            relaxed,
            "selected key points"
        );

        // Stage 6: Assemble
        trace_stage!(STAGE_ASSEMBLE);
        observer.on_stage_start(STAGE_ASSEMBLE);
        let clock = StageClock::start();
        let first_page = normalized.pages.first().map(String::as_str).unwrap_or("");
        let title = resolve_title(document, first_page);
        let quality = match normalized.source {
            TextSource::Ocr => Some(assess_quality(
                &normalized.joined,
                document.ocr_confidence,
            )),
            TextSource::Extracted => None,
        };
        let metadata = SummaryMetadata {
            source: normalized.source,
            page_count: normalized.pages.len().max(1),
            sentence_count: candidates.len(),
            relaxed_selections: relaxed,
            quality,
        };
        let word_count = normalized.joined.split_whitespace().count();
        let record = self
            .assembler
            .assemble(title, key_points, topics, word_count, metadata);
        observer.on_stage_end(STAGE_ASSEMBLE, &StageReport::new(clock.elapsed()));

        record
    }

    /// Normalize the extracted text layer, or the OCR text when the
    /// extracted layer is empty or under the content floor.
    fn normalize_document(&self, document: &Document) -> Result<NormalizedSource> {
        let extracted = self.normalize_pages(TextSource::Extracted, &document.segments);
        let extracted_err = match check_content(&extracted.joined, self.config.min_content_chars)
        {
            Ok(()) => return Ok(extracted),
            Err(err) => err,
        };

        let Some(ocr_pages) = document.ocr_segments.as_deref() else {
            return Err(extracted_err);
        };

        trace_event!(error = %extracted_err, "text layer rejected, trying OCR text");
        let ocr = self.normalize_pages(TextSource::Ocr, ocr_pages);
        check_content(&ocr.joined, self.config.min_content_chars)?;
        Ok(ocr)
    }

    fn normalize_pages(&self, source: TextSource, segments: &[String]) -> NormalizedSource {
        let pages: Vec<String> = segments
            .iter()
            .map(|s| self.normalizer.normalize(s))
            .collect();
        let joined = pages
            .iter()
            .filter(|p| !p.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n\n");
        NormalizedSource {
            source,
            pages,
            joined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::observer::{TimingObserver, STAGES};
    use crate::summarizer::assembler::PLACEHOLDER_KEY_POINT;
    use crate::types::QualityLevel;

    const BODY: &str = "Renewable energy adoption accelerated across many regions this decade. \
        Solar energy capacity doubled as panel prices fell sharply. \
        Wind energy projects also expanded along coastlines and plains. \
        Grid operators invested in battery storage to balance supply. \
        One of the main challenges remains long distance transmission of energy.";

    #[test]
    fn test_pipeline_runs_all_stages() {
        let pipeline = SummaryPipeline::default();
        let mut observer = TimingObserver::new();
        let record = pipeline
            .run(&Document::from_text(BODY), &mut observer)
            .unwrap();

        let stages: Vec<_> = observer.reports().iter().map(|(s, _)| *s).collect();
        assert_eq!(stages, STAGES.to_vec());
        assert!(!record.key_points.is_empty());
        assert!(!record.topics.is_empty());
        assert!(record.topics.len() <= pipeline.config().max_topics);
        assert_eq!(record.metadata.source, TextSource::Extracted);
        assert!(record.metadata.quality.is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SummaryConfig::default().with_max_key_points(0);
        assert!(matches!(
            SummaryPipeline::new(config),
            Err(SummaryError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_document() {
        let pipeline = SummaryPipeline::default();
        let result = pipeline.summarize(&Document::from_text("   \n  "));
        assert!(matches!(result, Err(SummaryError::EmptyInput)));
    }

    #[test]
    fn test_boilerplate_only_document_is_empty() {
        let pipeline = SummaryPipeline::default();
        let result = pipeline.summarize(&Document::from_text("Page 1 of 3\n\n12\n\nhttps://example.com"));
        assert!(matches!(result, Err(SummaryError::EmptyInput)));
    }

    #[test]
    fn test_ocr_fallback_used_for_thin_text_layer() {
        let pipeline = SummaryPipeline::default();
        let document = Document::from_pages(["", "3"]).with_ocr([BODY, ""], Some(88.0));
        let record = pipeline.summarize(&document).unwrap();

        assert_eq!(record.metadata.source, TextSource::Ocr);
        let quality = record.metadata.quality.unwrap();
        assert_eq!(quality.level, QualityLevel::High);
        assert!(record.key_points.iter().all(|k| k.page == Some(1)));
    }

    #[test]
    fn test_placeholder_for_sentence_free_text() {
        let config = SummaryConfig::default().with_sentence_bounds(30, 40);
        let pipeline = SummaryPipeline::new(config).unwrap();
        let record = pipeline.summarize(&Document::from_text(BODY)).unwrap();

        assert_eq!(record.key_points.len(), 1);
        assert_eq!(record.key_points[0].text, PLACEHOLDER_KEY_POINT);
        assert_eq!(record.metadata.sentence_count, 0);
    }

    #[test]
    fn test_strict_mode_reports_no_candidates() {
        let config = SummaryConfig::default()
            .with_sentence_bounds(30, 40)
            .with_placeholder_on_empty(false);
        let pipeline = SummaryPipeline::new(config).unwrap();
        let result = pipeline.summarize(&Document::from_text(BODY));

        assert!(matches!(result, Err(SummaryError::NoCandidateSentences)));
    }
}
