use serde::Serialize;

use crate::checker::{CoverageStatus, GateResult, ScanNotice, SeverityCounts, Violation};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    passed: bool,
    summary: Summary,
    failure_reasons: Vec<String>,
    violations: &'a [Violation],
    notices: &'a [ScanNotice],
    coverage: &'a CoverageStatus,
}

#[derive(Serialize)]
struct Summary {
    files_scanned: usize,
    cancelled: bool,
    coverage_unavailable: bool,
    #[serde(flatten)]
    counts: SeverityCounts,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &GateResult) -> Result<String> {
        let output = JsonOutput {
            passed: result.passed,
            summary: Summary {
                files_scanned: result.files_scanned,
                cancelled: result.cancelled,
                coverage_unavailable: result.coverage_unavailable(),
                counts: result.severity_counts(),
            },
            failure_reasons: result.failure_reasons(),
            violations: &result.violations,
            notices: &result.notices,
            coverage: &result.coverage,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
