use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::checker::{Severity, Violation, ViolationKind};
use crate::error::{GateError, Result};
use crate::source::{LexState, LexedLine};

pub const DEFAULT_MAX_LINE_LENGTH: usize = 120;
pub const DEFAULT_MAX_CONSECUTIVE_BLANK_LINES: usize = 1;
pub const DEFAULT_LOGGING_FACILITY: &str = "an SLF4J Logger";

/// Debug-output calls rejected unless configured otherwise.
pub const DEFAULT_BANNED_CALLS: &[&str] = &[
    r"\bSystem\s*\.\s*out\s*\.\s*print\w*\s*\(",
    r"\bSystem\s*\.\s*err\s*\.\s*print\w*\s*\(",
    r"\.\s*printStackTrace\s*\(\s*\)",
];

/// What a detector sees for one line.
pub struct LineContext<'a> {
    pub path: &'a Path,
    pub line: &'a LexedLine<'a>,
    /// Consecutive blank lines ending at this line, including it.
    pub blank_run: usize,
}

impl LineContext<'_> {
    fn violation(
        &self,
        kind: ViolationKind,
        severity: Severity,
        rule: &'static str,
        message: impl Into<String>,
    ) -> Violation {
        Violation::new(kind, severity, rule, self.path, self.line.line.number, message)
    }
}

/// A single-pass check over one line.
///
/// Detectors are independent of each other: a line may trigger any number
/// of them.
pub trait LineDetector: Send + Sync {
    fn rule(&self) -> &'static str;

    fn inspect(&self, ctx: &LineContext<'_>) -> Option<Violation>;
}

pub struct BannedCallDetector {
    patterns: Vec<Regex>,
    facility: String,
}

impl Default for BannedCallDetector {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_BANNED_CALLS
                .iter()
                .map(|p| Regex::new(p).expect("Invalid regex"))
                .collect(),
            facility: DEFAULT_LOGGING_FACILITY.to_string(),
        }
    }
}

impl BannedCallDetector {
    /// # Errors
    /// Returns [`GateError::InvalidRegex`] for a pattern that does not compile.
    pub fn new<S: AsRef<str>>(patterns: &[S], facility: &str) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p.as_ref()).map_err(|source| GateError::InvalidRegex {
                    pattern: p.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            patterns,
            facility: facility.to_string(),
        })
    }
}

impl LineDetector for BannedCallDetector {
    fn rule(&self) -> &'static str {
        "banned-call"
    }

    fn inspect(&self, ctx: &LineContext<'_>) -> Option<Violation> {
        let code = ctx.line.code();
        let found = self.patterns.iter().find_map(|p| p.find(code))?;
        let call = found.as_str().trim_end_matches('(').trim();
        Some(
            ctx.violation(
                ViolationKind::BannedCall,
                Severity::Error,
                self.rule(),
                format!("Banned debug-output call '{call}'"),
            )
            .with_remediation(format!("Log through {} instead", self.facility)),
        )
    }
}

/// Equality checks against inline string, char or number literals.
pub struct HardcodedLiteralDetector {
    literal_receiver: Regex,
    literal_argument: Regex,
    reference_equality: Regex,
}

impl Default for HardcodedLiteralDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl HardcodedLiteralDetector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            literal_receiver: Regex::new(r#""(?:[^"\\]|\\.)*"\s*\.\s*equals(?:IgnoreCase)?\s*\("#)
                .expect("Invalid regex"),
            literal_argument: Regex::new(
                r#"\.\s*equals(?:IgnoreCase)?\s*\(\s*(?:"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)'|-?\d+(?:\.\d+)?[lLfFdD]?)\s*\)"#,
            )
            .expect("Invalid regex"),
            reference_equality: Regex::new(
                r#"(?:==|!=)\s*"(?:[^"\\]|\\.)*"|"(?:[^"\\]|\\.)*"\s*(?:==|!=)"#,
            )
            .expect("Invalid regex"),
        }
    }

    fn is_excluded(line: &LexedLine<'_>) -> bool {
        let code = line.code().trim_start();
        line.is_comment()
            || code.starts_with("import ")
            || code.starts_with("package ")
            || code.contains("static final")
            || code.contains("final static")
    }
}

impl LineDetector for HardcodedLiteralDetector {
    fn rule(&self) -> &'static str {
        "hardcoded-literal"
    }

    fn inspect(&self, ctx: &LineContext<'_>) -> Option<Violation> {
        if ctx.line.entry != LexState::Code || Self::is_excluded(ctx.line) {
            return None;
        }
        let code = ctx.line.code();
        let hit = [
            &self.literal_receiver,
            &self.literal_argument,
            &self.reference_equality,
        ]
        .into_iter()
        .find_map(|re| re.find(code))?;
        Some(
            ctx.violation(
                ViolationKind::HardcodedLiteral,
                Severity::Warning,
                self.rule(),
                format!("Comparison against a hardcoded literal: {}", hit.as_str().trim()),
            )
            .with_remediation("Move the literal into a named constant or enum"),
        )
    }
}

pub struct LongLineDetector {
    max_chars: usize,
}

impl LongLineDetector {
    #[must_use]
    pub const fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }
}

impl LineDetector for LongLineDetector {
    fn rule(&self) -> &'static str {
        "long-line"
    }

    fn inspect(&self, ctx: &LineContext<'_>) -> Option<Violation> {
        let len = ctx.line.line.char_len();
        (len > self.max_chars).then(|| {
            ctx.violation(
                ViolationKind::StyleSmell,
                Severity::Warning,
                self.rule(),
                format!("Line is {len} characters long (max {})", self.max_chars),
            )
            .with_remediation("Wrap the line or extract a local variable")
        })
    }
}

/// Fires once per run, on the first blank line past the allowed count.
pub struct ConsecutiveBlankDetector {
    max_blank: usize,
}

impl ConsecutiveBlankDetector {
    #[must_use]
    pub const fn new(max_blank: usize) -> Self {
        Self { max_blank }
    }
}

impl LineDetector for ConsecutiveBlankDetector {
    fn rule(&self) -> &'static str {
        "consecutive-blank-lines"
    }

    fn inspect(&self, ctx: &LineContext<'_>) -> Option<Violation> {
        (ctx.blank_run == self.max_blank + 1).then(|| {
            ctx.violation(
                ViolationKind::StyleSmell,
                Severity::Info,
                self.rule(),
                format!("More than {} consecutive blank line(s)", self.max_blank),
            )
            .with_remediation("Remove the extra blank lines")
        })
    }
}

pub struct WildcardImportDetector {
    pattern: Regex,
}

impl Default for WildcardImportDetector {
    fn default() -> Self {
        Self {
            pattern: Regex::new(r"^\s*import\s+(?:static\s+)?([\w$.]+)\.\*\s*;")
                .expect("Invalid regex"),
        }
    }
}

impl LineDetector for WildcardImportDetector {
    fn rule(&self) -> &'static str {
        "wildcard-import"
    }

    fn inspect(&self, ctx: &LineContext<'_>) -> Option<Violation> {
        if ctx.line.entry != LexState::Code {
            return None;
        }
        let caps = self.pattern.captures(ctx.line.code())?;
        let package = caps.get(1).map_or("", |m| m.as_str());
        Some(
            ctx.violation(
                ViolationKind::StyleSmell,
                Severity::Warning,
                self.rule(),
                format!("Wildcard import of '{package}.*'"),
            )
            .with_remediation("Import the types you use explicitly"),
        )
    }
}

/// Whitespace character not allowed in indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentChar {
    #[default]
    Tab,
    Space,
}

impl IndentChar {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Tab => '\t',
            Self::Space => ' ',
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tab => "tab",
            Self::Space => "space",
        }
    }
}

pub struct IndentDetector {
    disallowed: IndentChar,
}

impl IndentDetector {
    #[must_use]
    pub const fn new(disallowed: IndentChar) -> Self {
        Self { disallowed }
    }
}

impl LineDetector for IndentDetector {
    fn rule(&self) -> &'static str {
        "disallowed-indent"
    }

    fn inspect(&self, ctx: &LineContext<'_>) -> Option<Violation> {
        let line = ctx.line.line;
        // Text block content is literal data.
        if ctx.line.entry == LexState::TextBlock || line.is_blank() {
            return None;
        }
        let disallowed = self.disallowed.as_char();
        line.indentation().contains(disallowed).then(|| {
            ctx.violation(
                ViolationKind::StyleSmell,
                Severity::Info,
                self.rule(),
                format!("Indentation uses a {} character", self.disallowed.as_str()),
            )
            .with_remediation(match self.disallowed {
                IndentChar::Tab => "Indent with spaces",
                IndentChar::Space => "Indent with tabs",
            })
        })
    }
}

/// Runs a set of line detectors over a lexed file.
#[derive(Default)]
pub struct PatternScanner {
    detectors: Vec<Box<dyn LineDetector>>,
}

impl PatternScanner {
    #[must_use]
    pub fn new(detectors: Vec<Box<dyn LineDetector>>) -> Self {
        Self { detectors }
    }

    /// Every built-in detector with default settings.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(vec![
            Box::new(BannedCallDetector::default()),
            Box::new(HardcodedLiteralDetector::new()),
            Box::new(LongLineDetector::new(DEFAULT_MAX_LINE_LENGTH)),
            Box::new(ConsecutiveBlankDetector::new(DEFAULT_MAX_CONSECUTIVE_BLANK_LINES)),
            Box::new(WildcardImportDetector::default()),
            Box::new(IndentDetector::new(IndentChar::Tab)),
        ])
    }

    #[must_use]
    pub fn rules(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|d| d.rule()).collect()
    }

    #[must_use]
    pub fn check(&self, path: &Path, lines: &[LexedLine<'_>]) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut blank_run = 0;

        for line in lines {
            blank_run = if line.line.is_blank() { blank_run + 1 } else { 0 };
            let ctx = LineContext {
                path,
                line,
                blank_run,
            };
            violations.extend(self.detectors.iter().filter_map(|d| d.inspect(&ctx)));
        }

        violations
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
