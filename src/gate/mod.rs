//! The gate run: scan sources, evaluate coverage, merge into one verdict.
//!
//! A run moves through `Idle -> Scanning -> Parsing -> Evaluating -> Reported`.
//! Without a coverage report the run goes from `Scanning` straight to
//! `Reported`; a report that cannot be read or parsed goes from `Parsing` to
//! `Reported` with coverage marked unavailable. Neither case is fatal.

mod collector;

pub use collector::{CollectedScan, ViolationCollector};

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::analyzer::StructuralAnalyzer;
use crate::checker::{CoverageStatus, GateResult, ScanNotice, ThresholdEvaluator, VerdictPolicy};
use crate::config::Config;
use crate::coverage::CoverageParser;
use crate::error::{GateError, Result};
use crate::output::ScanProgress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    Idle,
    Scanning,
    Parsing,
    Evaluating,
    Reported,
}

impl GatePhase {
    /// Whether the state machine allows moving from `self` to `next`.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Scanning)
                | (Self::Scanning, Self::Parsing | Self::Reported)
                | (Self::Parsing, Self::Evaluating | Self::Reported)
                | (Self::Evaluating | Self::Reported, Self::Reported)
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Scanning => "scanning",
            Self::Parsing => "parsing",
            Self::Evaluating => "evaluating",
            Self::Reported => "reported",
        }
    }
}

impl fmt::Display for GatePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared flag asking a running scan to stop submitting files.
///
/// Files already being analyzed finish; the result is marked cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GateOptions {
    pub policy: VerdictPolicy,
    pub show_progress: bool,
}

/// Drives one gate run over a set of files and an optional report.
pub struct GateRunner {
    analyzer: StructuralAnalyzer,
    parser: CoverageParser,
    evaluator: ThresholdEvaluator,
    options: GateOptions,
    cancel: CancelToken,
    phase: GatePhase,
}

impl GateRunner {
    #[must_use]
    pub fn new(
        analyzer: StructuralAnalyzer,
        parser: CoverageParser,
        evaluator: ThresholdEvaluator,
        options: GateOptions,
    ) -> Self {
        Self {
            analyzer,
            parser,
            evaluator,
            options,
            cancel: CancelToken::new(),
            phase: GatePhase::Idle,
        }
    }

    /// Build a runner from a validated configuration.
    ///
    /// # Errors
    /// Returns an error if a configured pattern does not compile.
    pub fn from_config(config: &Config, show_progress: bool) -> Result<Self> {
        let options = GateOptions {
            policy: VerdictPolicy {
                strict: config.structure.strict,
                coverage_required: config.coverage.required,
            },
            show_progress,
        };
        Ok(Self::new(
            StructuralAnalyzer::from_config(config)?,
            CoverageParser::new(config.coverage.unit_scope),
            ThresholdEvaluator::new(config.coverage.thresholds.to_policy()),
            options,
        ))
    }

    #[must_use]
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    #[must_use]
    pub const fn phase(&self) -> GatePhase {
        self.phase
    }

    /// Run the gate. Per-file read failures become notices and a bad report
    /// marks coverage unavailable, so this never fails as a whole.
    pub fn run(&mut self, files: &[PathBuf], report: Option<&Path>) -> GateResult {
        self.phase = GatePhase::Idle;

        self.transition(GatePhase::Scanning);
        let scan = self.scan(files);
        let cancelled = self.cancel.is_cancelled();

        let coverage = self.coverage(report);

        self.transition(GatePhase::Reported);
        GateResult::new(
            scan.violations,
            scan.notices,
            coverage,
            scan.files_scanned,
            self.options.policy,
        )
        .with_cancelled(cancelled)
    }

    fn transition(&mut self, next: GatePhase) {
        debug_assert!(
            self.phase.can_transition_to(next),
            "invalid gate transition {} -> {next}",
            self.phase
        );
        tracing::debug!(from = %self.phase, to = %next, "gate phase");
        self.phase = next;
    }

    fn scan(&self, files: &[PathBuf]) -> CollectedScan {
        let collector = ViolationCollector::new();
        let progress = ScanProgress::new(files.len() as u64, !self.options.show_progress);

        files.par_iter().for_each(|path| {
            if self.cancel.is_cancelled() {
                return;
            }
            match self.analyzer.analyze_path(path) {
                Ok(violations) => collector.record(violations),
                Err(err) => {
                    let message = describe(&err);
                    tracing::warn!(path = %path.display(), error = %message, "skipping file");
                    collector.notice(ScanNotice {
                        path: path.clone(),
                        message,
                    });
                }
            }
            progress.inc();
        });
        progress.finish();

        let scan = collector.finish();
        tracing::info!(
            files = scan.files_scanned,
            violations = scan.violations.len(),
            skipped = scan.notices.len(),
            "scan finished"
        );
        scan
    }

    fn coverage(&mut self, report: Option<&Path>) -> CoverageStatus {
        let Some(path) = report else {
            return CoverageStatus::NotRequested;
        };

        self.transition(GatePhase::Parsing);
        let parsed = match self.parser.parse_file(path) {
            Ok(parsed) => parsed,
            Err(err) => {
                let reason = describe(&err);
                tracing::warn!(report = %path.display(), error = %reason, "coverage unavailable");
                return CoverageStatus::Unavailable { reason };
            }
        };

        self.transition(GatePhase::Evaluating);
        CoverageStatus::Evaluated(self.evaluator.evaluate(&parsed))
    }
}

/// Error message including its underlying causes.
fn describe(err: &GateError) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
