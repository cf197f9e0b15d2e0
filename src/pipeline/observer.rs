//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. All methods default to no-ops, so an observer only
//! overrides what it needs.

use std::time::{Duration, Instant};

pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_FREQUENCY: &str = "frequency";
pub const STAGE_TOPICS: &str = "topics";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";
pub const STAGE_ASSEMBLE: &str = "assemble";

/// Every stage, in execution order
pub const STAGES: [&str; 7] = [
    STAGE_NORMALIZE,
    STAGE_SEGMENT,
    STAGE_FREQUENCY,
    STAGE_TOPICS,
    STAGE_SCORE,
    STAGE_SELECT,
    STAGE_ASSEMBLE,
];

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// What a stage reports when it finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    pub elapsed: Duration,
    /// Number of artifacts the stage produced, when meaningful
    pub items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }
}

/// Builder for [`StageReport`]s that carry counts
#[derive(Debug, Clone, Copy)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn items(mut self, items: usize) -> Self {
        self.report.items = Some(items);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Callbacks fired around each pipeline stage
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Records a [`StageReport`] per completed stage
#[derive(Debug, Clone, Default)]
pub struct TimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl TimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports in completion order
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for a stage, if it ran
    pub fn stage(&self, name: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(stage, _)| *stage == name)
            .map(|(_, report)| report)
    }

    /// Sum of all stage durations
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed).sum()
    }
}

impl PipelineObserver for TimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}
