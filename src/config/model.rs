use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::analyzer::{
    DEFAULT_BANNED_CALLS, DEFAULT_DOC_SCAN_CAP, DEFAULT_DOC_WINDOW, DEFAULT_LOGGING_FACILITY,
    DEFAULT_MAX_CONSECUTIVE_BLANK_LINES, DEFAULT_MAX_LINE_LENGTH, DEFAULT_MAX_METHOD_LINES,
    IndentChar, Visibility,
};
use crate::checker::{DEFAULT_BRANCH_THRESHOLD, DEFAULT_LINE_THRESHOLD, ThresholdPolicy};
use crate::coverage::{MetricType, UnitScope};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config schema version. Missing means the current version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub structure: StructureConfig,

    #[serde(default)]
    pub docs: DocsConfig,

    #[serde(default)]
    pub patterns: PatternsConfig,

    #[serde(default)]
    pub coverage: CoverageConfig,
}

/// File discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Extensions of files that get analyzed, without the dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns for files and directories to skip.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Respect .gitignore rules (default: true)
    #[serde(default = "default_true")]
    pub gitignore: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
            gitignore: true,
        }
    }
}

/// Method length, line length and strictness.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StructureConfig {
    #[serde(default = "default_max_method_lines")]
    pub max_method_lines: usize,

    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Warning-severity violations fail the gate.
    #[serde(default)]
    pub strict: bool,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            max_method_lines: DEFAULT_MAX_METHOD_LINES,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            strict: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocsConfig {
    /// Blank lines allowed between a doc block and its declaration.
    #[serde(default = "default_doc_window")]
    pub window: usize,

    /// Hard cap on lines examined above a declaration.
    #[serde(default = "default_doc_scan_cap")]
    pub scan_cap: usize,

    /// Declarations with these visibilities need a doc block.
    #[serde(default = "default_visibilities")]
    pub visibilities: Vec<Visibility>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_DOC_WINDOW,
            scan_cap: DEFAULT_DOC_SCAN_CAP,
            visibilities: default_visibilities(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatternsConfig {
    /// Regexes for calls that must not appear in code.
    #[serde(default = "default_banned_calls")]
    pub banned_calls: Vec<String>,

    /// Named in the remediation for banned calls.
    #[serde(default = "default_logging_facility")]
    pub logging_facility: String,

    #[serde(default)]
    pub disallowed_indent: IndentChar,

    #[serde(default = "default_max_consecutive_blank_lines")]
    pub max_consecutive_blank_lines: usize,
}

impl Default for PatternsConfig {
    fn default() -> Self {
        Self {
            banned_calls: default_banned_calls(),
            logging_facility: default_logging_facility(),
            disallowed_indent: IndentChar::default(),
            max_consecutive_blank_lines: DEFAULT_MAX_CONSECUTIVE_BLANK_LINES,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoverageConfig {
    /// Path to the coverage report. No report means coverage is not checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<PathBuf>,

    #[serde(default)]
    pub unit_scope: UnitScope,

    /// Fail the gate when the report cannot be evaluated.
    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

/// Minimum percentages per metric. Signed so that negative values reach
/// validation instead of failing to parse.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThresholdsConfig {
    #[serde(default = "default_line_threshold")]
    pub line: i64,

    #[serde(default = "default_branch_threshold")]
    pub branch: i64,

    #[serde(default)]
    pub method: i64,

    #[serde(default)]
    pub class: i64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            line: default_line_threshold(),
            branch: default_branch_threshold(),
            method: 0,
            class: 0,
        }
    }
}

impl ThresholdsConfig {
    #[must_use]
    pub const fn get(&self, metric: MetricType) -> i64 {
        match metric {
            MetricType::Line => self.line,
            MetricType::Branch => self.branch,
            MetricType::Method => self.method,
            MetricType::Class => self.class,
        }
    }

    pub const fn set(&mut self, metric: MetricType, value: i64) {
        match metric {
            MetricType::Line => self.line = value,
            MetricType::Branch => self.branch = value,
            MetricType::Method => self.method = value,
            MetricType::Class => self.class = value,
        }
    }

    /// Convert to a policy. Values are clamped to 0..=100; validation
    /// rejects anything outside that range before this is called.
    #[must_use]
    pub fn to_policy(&self) -> ThresholdPolicy {
        MetricType::ALL
            .iter()
            .fold(ThresholdPolicy::new(), |policy, &metric| {
                let percent = u8::try_from(self.get(metric).clamp(0, 100)).unwrap_or(0);
                policy.with_threshold(metric, percent)
            })
    }
}

fn default_extensions() -> Vec<String> {
    vec!["java".to_string()]
}

const fn default_true() -> bool {
    true
}

const fn default_max_method_lines() -> usize {
    DEFAULT_MAX_METHOD_LINES
}

const fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

const fn default_doc_window() -> usize {
    DEFAULT_DOC_WINDOW
}

const fn default_doc_scan_cap() -> usize {
    DEFAULT_DOC_SCAN_CAP
}

fn default_visibilities() -> Vec<Visibility> {
    vec![Visibility::Public]
}

fn default_banned_calls() -> Vec<String> {
    DEFAULT_BANNED_CALLS.iter().map(ToString::to_string).collect()
}

fn default_logging_facility() -> String {
    DEFAULT_LOGGING_FACILITY.to_string()
}

const fn default_max_consecutive_blank_lines() -> usize {
    DEFAULT_MAX_CONSECUTIVE_BLANK_LINES
}

const fn default_line_threshold() -> i64 {
    DEFAULT_LINE_THRESHOLD as i64
}

const fn default_branch_threshold() -> i64 {
    DEFAULT_BRANCH_THRESHOLD as i64
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
