use indexmap::IndexMap;
use serde::Serialize;

use crate::coverage::{CoverageReport, MetricType};

pub const DEFAULT_LINE_THRESHOLD: u8 = 80;
pub const DEFAULT_BRANCH_THRESHOLD: u8 = 70;

/// Minimum required percentage per metric. A threshold of 0 means the metric
/// is reported but never gates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdPolicy {
    thresholds: IndexMap<MetricType, u8>,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::new()
            .with_threshold(MetricType::Line, DEFAULT_LINE_THRESHOLD)
            .with_threshold(MetricType::Branch, DEFAULT_BRANCH_THRESHOLD)
            .with_threshold(MetricType::Method, 0)
            .with_threshold(MetricType::Class, 0)
    }
}

impl ThresholdPolicy {
    /// An empty policy: every metric is informational.
    #[must_use]
    pub fn new() -> Self {
        Self {
            thresholds: IndexMap::new(),
        }
    }

    /// Set the threshold for `metric`. Values above 100 are clamped.
    #[must_use]
    pub fn with_threshold(mut self, metric: MetricType, percent: u8) -> Self {
        self.thresholds.insert(metric, percent.min(100));
        self
    }

    #[must_use]
    pub fn threshold(&self, metric: MetricType) -> u8 {
        self.thresholds.get(&metric).copied().unwrap_or(0)
    }
}

/// Outcome for one metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricResult {
    pub metric: MetricType,
    pub covered: u64,
    pub missed: u64,
    pub total: u64,
    pub percentage: u64,
    pub threshold: u8,
    pub passed: bool,
}

impl MetricResult {
    /// Whether this metric takes part in the gate decision.
    #[must_use]
    pub const fn is_gating(&self) -> bool {
        self.threshold > 0
    }
}

/// A unit whose line coverage is below the line threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitShortfall {
    pub name: String,
    pub percentage: u64,
    pub covered: u64,
    pub total: u64,
}

/// Result of evaluating a report against a policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageSummary {
    pub metrics: IndexMap<MetricType, MetricResult>,
    /// Sorted by ascending percentage, then name.
    pub sub_threshold_units: Vec<UnitShortfall>,
}

impl CoverageSummary {
    /// All gating metrics meet their thresholds.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.metrics.values().all(|m| m.passed)
    }

    #[must_use]
    pub fn metric(&self, metric: MetricType) -> Option<&MetricResult> {
        self.metrics.get(&metric)
    }

    /// Gating metrics below their threshold.
    pub fn failures(&self) -> impl Iterator<Item = &MetricResult> {
        self.metrics.values().filter(|m| !m.passed)
    }
}

/// Compares report percentages against a [`ThresholdPolicy`].
#[derive(Debug, Clone, Default)]
pub struct ThresholdEvaluator {
    policy: ThresholdPolicy,
}

impl ThresholdEvaluator {
    #[must_use]
    pub const fn new(policy: ThresholdPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> &ThresholdPolicy {
        &self.policy
    }

    #[must_use]
    pub fn evaluate(&self, report: &CoverageReport) -> CoverageSummary {
        let metrics = MetricType::ALL
            .into_iter()
            .map(|metric| (metric, self.evaluate_metric(report, metric)))
            .collect();

        CoverageSummary {
            metrics,
            sub_threshold_units: self.sub_threshold_units(report),
        }
    }

    fn evaluate_metric(&self, report: &CoverageReport, metric: MetricType) -> MetricResult {
        let counter = report.total(metric);
        let threshold = self.policy.threshold(metric);
        let percentage = counter.percentage();

        MetricResult {
            metric,
            covered: counter.covered,
            missed: counter.missed,
            total: counter.total(),
            percentage,
            threshold,
            passed: threshold == 0 || percentage >= u64::from(threshold),
        }
    }

    fn sub_threshold_units(&self, report: &CoverageReport) -> Vec<UnitShortfall> {
        let threshold = u64::from(self.policy.threshold(MetricType::Line));

        let mut units: Vec<UnitShortfall> = report
            .units
            .iter()
            .filter_map(|unit| {
                let counter = unit.counter(MetricType::Line)?;
                let percentage = counter.percentage();
                (percentage < threshold).then(|| UnitShortfall {
                    name: unit.name.clone(),
                    percentage,
                    covered: counter.covered,
                    total: counter.total(),
                })
            })
            .collect();

        units.sort_by(|a, b| {
            a.percentage
                .cmp(&b.percentage)
                .then_with(|| a.name.cmp(&b.name))
        });
        units
    }
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
