//! Coverage report model: counters per metric, aggregated at the report root
//! and nested per unit (class or source file).

mod parser;

pub use parser::{CoverageParser, UnitScope};

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Coverage metric tracked by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    Line,
    Branch,
    Method,
    Class,
}

impl MetricType {
    /// All metrics in report order.
    pub const ALL: [Self; 4] = [Self::Line, Self::Branch, Self::Method, Self::Class];

    /// Parse the `type` attribute of a report counter.
    #[must_use]
    pub fn from_report_tag(tag: &str) -> Option<Self> {
        match tag {
            "LINE" => Some(Self::Line),
            "BRANCH" => Some(Self::Branch),
            "METHOD" => Some(Self::Method),
            "CLASS" => Some(Self::Class),
            _ => None,
        }
    }

    #[must_use]
    pub const fn report_tag(self) -> &'static str {
        match self {
            Self::Line => "LINE",
            Self::Branch => "BRANCH",
            Self::Method => "METHOD",
            Self::Class => "CLASS",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Branch => "branch",
            Self::Method => "method",
            Self::Class => "class",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.report_tag())
    }
}

/// A missed/covered pair for one metric at one scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counter {
    pub metric: MetricType,
    pub missed: u64,
    pub covered: u64,
}

impl Counter {
    #[must_use]
    pub const fn new(metric: MetricType, missed: u64, covered: u64) -> Self {
        Self {
            metric,
            missed,
            covered,
        }
    }

    /// A counter with no measured items.
    #[must_use]
    pub const fn empty(metric: MetricType) -> Self {
        Self::new(metric, 0, 0)
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.missed.saturating_add(self.covered)
    }

    /// `floor(covered * 100 / total)`, or 0 when nothing was measured.
    #[must_use]
    pub fn percentage(&self) -> u64 {
        let total = u128::from(self.missed) + u128::from(self.covered);
        if total == 0 {
            return 0;
        }
        let pct = u128::from(self.covered) * 100 / total;
        // covered <= total, so pct <= 100
        u64::try_from(pct).unwrap_or(100)
    }
}

/// A class or source file with its own counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageUnit {
    pub name: String,
    pub counters: IndexMap<MetricType, Counter>,
}

impl CoverageUnit {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            counters: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn counter(&self, metric: MetricType) -> Option<&Counter> {
        self.counters.get(&metric)
    }
}

/// Parsed report: root totals plus per-unit counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    pub totals: IndexMap<MetricType, Counter>,
    pub units: Vec<CoverageUnit>,
}

impl CoverageReport {
    /// Root total for `metric`; a metric absent from the report counts as 0/0.
    #[must_use]
    pub fn total(&self, metric: MetricType) -> Counter {
        self.totals
            .get(&metric)
            .copied()
            .unwrap_or_else(|| Counter::empty(metric))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
