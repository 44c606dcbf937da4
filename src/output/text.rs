use std::fmt::Write;

use crate::checker::{CoverageStatus, CoverageSummary, GateResult, Severity, Violation};
use crate::error::Result;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Human-readable report: violations, skipped files, coverage table and verdict.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    const fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
            Severity::Info => ansi::CYAN,
        }
    }

    fn format_violation(&self, v: &Violation, out: &mut String) {
        let severity = self.paint(&format!("{:<7}", v.severity.as_str()), Self::severity_color(v.severity));
        let _ = writeln!(
            out,
            "{severity} {:<16} {}  {}",
            v.kind.as_str(),
            v.location(),
            v.message
        );
        if !v.remediation.is_empty() {
            let _ = writeln!(out, "        -> {}", v.remediation);
        }
    }

    fn format_coverage_table(&self, summary: &CoverageSummary, out: &mut String) {
        let _ = writeln!(out, "Coverage:");
        let _ = writeln!(
            out,
            "  {:<8} {:>8} {:>8} {:>8} {:>8} {:>10}  Status",
            "Metric", "Covered", "Missed", "Total", "Percent", "Threshold"
        );
        for m in summary.metrics.values() {
            let status = if !m.is_gating() {
                self.paint("INFO", ansi::CYAN)
            } else if m.passed {
                self.paint("PASS", ansi::GREEN)
            } else {
                self.paint("FAIL", ansi::RED)
            };
            let threshold = if m.is_gating() {
                format!("{}%", m.threshold)
            } else {
                "-".to_string()
            };
            let _ = writeln!(
                out,
                "  {:<8} {:>8} {:>8} {:>8} {:>7}% {:>10}  {status}",
                m.metric.report_tag(),
                m.covered,
                m.missed,
                m.total,
                m.percentage,
                threshold
            );
        }

        if !summary.sub_threshold_units.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Units below the line threshold:");
            for unit in &summary.sub_threshold_units {
                let _ = writeln!(
                    out,
                    "  {:>3}%  {} ({}/{} lines)",
                    unit.percentage, unit.name, unit.covered, unit.total
                );
            }
        }
    }

    fn format_summary(&self, result: &GateResult) -> String {
        let counts = result.severity_counts();
        let errors = self.paint(&counts.error.to_string(), ansi::RED);
        let warnings = self.paint(&counts.warning.to_string(), ansi::YELLOW);
        let info = self.paint(&counts.info.to_string(), ansi::CYAN);
        format!(
            "Summary: {} files scanned, {errors} errors, {warnings} warnings, {info} info",
            result.files_scanned
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &GateResult) -> Result<String> {
        let mut out = String::new();

        for v in &result.violations {
            self.format_violation(v, &mut out);
        }
        if !result.violations.is_empty() {
            let _ = writeln!(out);
        }

        if !result.notices.is_empty() {
            let _ = writeln!(out, "Skipped files:");
            for notice in &result.notices {
                let _ = writeln!(out, "  {}: {}", notice.path.display(), notice.message);
            }
            let _ = writeln!(out);
        }

        match &result.coverage {
            CoverageStatus::Evaluated(summary) => {
                self.format_coverage_table(summary, &mut out);
                let _ = writeln!(out);
            }
            CoverageStatus::Unavailable { reason } => {
                let label = self.paint("coverage unavailable", ansi::YELLOW);
                let _ = writeln!(out, "{label}: {reason}");
                let _ = writeln!(out);
            }
            CoverageStatus::NotRequested => {}
        }

        if result.cancelled {
            let _ = writeln!(out, "Scan cancelled before all files were analyzed");
        }
        let _ = writeln!(out, "{}", self.format_summary(result));

        if result.passed {
            let verdict = self.paint("PASSED", &format!("{}{}", ansi::BOLD, ansi::GREEN));
            let _ = writeln!(out, "Gate: {verdict}");
        } else {
            let verdict = self.paint("FAILED", &format!("{}{}", ansi::BOLD, ansi::RED));
            let _ = writeln!(out, "Gate: {verdict}");
            for reason in result.failure_reasons() {
                let _ = writeln!(out, "  - {reason}");
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
