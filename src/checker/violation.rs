use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Kind of structural violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    LongMethod,
    MissingDoc,
    BannedCall,
    HardcodedLiteral,
    StyleSmell,
}

impl ViolationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LongMethod => "LongMethod",
            Self::MissingDoc => "MissingDoc",
            Self::BannedCall => "BannedCall",
            Self::HardcodedLiteral => "HardcodedLiteral",
            Self::StyleSmell => "StyleSmell",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Whether a violation of this severity fails the gate.
    ///
    /// Errors always fail. Warnings fail only in strict mode. Info never fails.
    #[must_use]
    pub const fn fails_gate(self, strict: bool) -> bool {
        match self {
            Self::Error => true,
            Self::Warning => strict,
            Self::Info => false,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single structural finding. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub severity: Severity,
    /// Stable rule identifier, e.g. `long-method` or `wildcard-import`.
    pub rule: &'static str,
    pub path: PathBuf,
    /// 1-based line number.
    pub line: usize,
    pub message: String,
    pub remediation: String,
}

impl Violation {
    #[must_use]
    pub fn new(
        kind: ViolationKind,
        severity: Severity,
        rule: &'static str,
        path: &Path,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            rule,
            path: path.to_path_buf(),
            line,
            message: message.into(),
            remediation: String::new(),
        }
    }

    #[must_use]
    pub fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = remediation.into();
        self
    }

    /// `path:line` location string.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}:{}", self.path.display(), self.line)
    }

    /// Sort key giving a deterministic report order.
    #[must_use]
    pub fn sort_key(&self) -> (&Path, usize, &'static str, &str) {
        (&self.path, self.line, self.rule, &self.message)
    }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
