use std::path::PathBuf;

use serde::Serialize;

use super::threshold::CoverageSummary;
use super::violation::{Severity, Violation};

/// State of the coverage half of the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CoverageStatus {
    /// No report was configured for this run.
    NotRequested,
    /// A report was configured but could not be read or parsed.
    Unavailable { reason: String },
    Evaluated(CoverageSummary),
}

impl CoverageStatus {
    #[must_use]
    pub const fn summary(&self) -> Option<&CoverageSummary> {
        match self {
            Self::Evaluated(summary) => Some(summary),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

/// A file that was skipped during scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanNotice {
    pub path: PathBuf,
    pub message: String,
}

/// Switches that change how results turn into a verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerdictPolicy {
    /// Warning-severity violations fail the gate.
    pub strict: bool,
    /// A report that was not evaluated fails the gate.
    pub coverage_required: bool,
}

/// Counts of violations by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub error: usize,
    pub warning: usize,
    pub info: usize,
}

/// Everything a gate run produced. Computed fresh per run.
#[derive(Debug, Clone, Serialize)]
pub struct GateResult {
    /// Sorted by path, line, then rule.
    pub violations: Vec<Violation>,
    pub notices: Vec<ScanNotice>,
    pub coverage: CoverageStatus,
    pub files_scanned: usize,
    /// Scanning stopped early on request.
    pub cancelled: bool,
    pub passed: bool,
    #[serde(skip)]
    policy: VerdictPolicy,
}

impl GateResult {
    #[must_use]
    pub fn new(
        violations: Vec<Violation>,
        notices: Vec<ScanNotice>,
        coverage: CoverageStatus,
        files_scanned: usize,
        policy: VerdictPolicy,
    ) -> Self {
        let mut result = Self {
            violations,
            notices,
            coverage,
            files_scanned,
            cancelled: false,
            passed: false,
            policy,
        };
        result.passed = result.failure_reasons().is_empty();
        result
    }

    #[must_use]
    pub const fn with_cancelled(mut self, cancelled: bool) -> Self {
        self.cancelled = cancelled;
        self
    }

    #[must_use]
    pub fn severity_counts(&self) -> SeverityCounts {
        self.violations
            .iter()
            .fold(SeverityCounts::default(), |mut counts, v| {
                match v.severity {
                    Severity::Error => counts.error += 1,
                    Severity::Warning => counts.warning += 1,
                    Severity::Info => counts.info += 1,
                }
                counts
            })
    }

    /// Structural checks pass under the current strictness.
    #[must_use]
    pub fn structural_passed(&self) -> bool {
        !self
            .violations
            .iter()
            .any(|v| v.severity.fails_gate(self.policy.strict))
    }

    #[must_use]
    pub const fn coverage_unavailable(&self) -> bool {
        self.coverage.is_unavailable()
    }

    /// Human-readable reasons the gate failed. Empty when it passed.
    #[must_use]
    pub fn failure_reasons(&self) -> Vec<String> {
        let mut reasons = Vec::new();
        let counts = self.severity_counts();

        if counts.error > 0 {
            reasons.push(format!(
                "{} error-severity violation{}",
                counts.error,
                plural(counts.error)
            ));
        }
        if self.policy.strict && counts.warning > 0 {
            reasons.push(format!(
                "{} warning{} (strict mode)",
                counts.warning,
                plural(counts.warning)
            ));
        }

        match &self.coverage {
            CoverageStatus::Evaluated(summary) => {
                reasons.extend(summary.failures().map(|m| {
                    format!(
                        "{} coverage {}% is below the required {}%",
                        m.metric.name(),
                        m.percentage,
                        m.threshold
                    )
                }));
            }
            CoverageStatus::Unavailable { reason } if self.policy.coverage_required => {
                reasons.push(format!("coverage is required but unavailable: {reason}"));
            }
            CoverageStatus::NotRequested if self.policy.coverage_required => {
                reasons.push("coverage is required but no report was given".to_string());
            }
            _ => {}
        }

        reasons
    }
}

const fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
