mod result;
mod threshold;
mod violation;

pub use result::{CoverageStatus, GateResult, ScanNotice, SeverityCounts, VerdictPolicy};
pub use threshold::{
    CoverageSummary, DEFAULT_BRANCH_THRESHOLD, DEFAULT_LINE_THRESHOLD, MetricResult,
    ThresholdEvaluator, ThresholdPolicy, UnitShortfall,
};
pub use violation::{Severity, Violation, ViolationKind};
