//! Structural checks over a single source file.
//!
//! Three independent passes run over the same lexed lines: method spans,
//! documentation association, and line pattern detectors.

mod declaration;
mod doc;
mod pattern;
mod span;

use std::path::Path;

pub use declaration::{Declaration, DeclarationKind, DeclarationMatcher, Visibility};
pub use doc::{DEFAULT_DOC_SCAN_CAP, DEFAULT_DOC_WINDOW, DocAssociator};
pub use pattern::{
    BannedCallDetector, ConsecutiveBlankDetector, DEFAULT_BANNED_CALLS, DEFAULT_LOGGING_FACILITY,
    DEFAULT_MAX_CONSECUTIVE_BLANK_LINES, DEFAULT_MAX_LINE_LENGTH, HardcodedLiteralDetector,
    IndentChar, IndentDetector, LineContext, LineDetector, LongLineDetector, PatternScanner,
    WildcardImportDetector,
};
pub use span::{DEFAULT_MAX_METHOD_LINES, MethodSpan, MethodSpanDetector};

use crate::checker::Violation;
use crate::config::Config;
use crate::error::Result;
use crate::source::SourceUnit;

/// Runs every structural check on a source unit.
pub struct StructuralAnalyzer {
    spans: MethodSpanDetector,
    docs: DocAssociator,
    patterns: PatternScanner,
}

impl Default for StructuralAnalyzer {
    fn default() -> Self {
        Self::new(
            MethodSpanDetector::default(),
            DocAssociator::default(),
            PatternScanner::with_defaults(),
        )
    }
}

impl StructuralAnalyzer {
    #[must_use]
    pub const fn new(
        spans: MethodSpanDetector,
        docs: DocAssociator,
        patterns: PatternScanner,
    ) -> Self {
        Self {
            spans,
            docs,
            patterns,
        }
    }

    /// Build the analyzer from configuration.
    ///
    /// # Errors
    /// Returns [`crate::GateError::InvalidRegex`] if a banned-call pattern does not compile.
    pub fn from_config(config: &Config) -> Result<Self> {
        let patterns = &config.patterns;
        let detectors: Vec<Box<dyn LineDetector>> = vec![
            Box::new(BannedCallDetector::new(
                patterns.banned_calls.as_slice(),
                &patterns.logging_facility,
            )?),
            Box::new(HardcodedLiteralDetector::new()),
            Box::new(LongLineDetector::new(config.structure.max_line_length)),
            Box::new(ConsecutiveBlankDetector::new(
                patterns.max_consecutive_blank_lines,
            )),
            Box::new(WildcardImportDetector::default()),
            Box::new(IndentDetector::new(patterns.disallowed_indent)),
        ];

        Ok(Self::new(
            MethodSpanDetector::new(config.structure.max_method_lines),
            DocAssociator::new(
                config.docs.window,
                config.docs.scan_cap,
                config.docs.visibilities.clone(),
            ),
            PatternScanner::new(detectors),
        ))
    }

    /// All violations in `unit`, in line order.
    #[must_use]
    pub fn analyze(&self, unit: &SourceUnit) -> Vec<Violation> {
        let lexed = unit.lex();
        let path = unit.path();

        let mut violations = self.spans.check(path, &lexed);
        violations.extend(self.docs.check(path, &lexed));
        violations.extend(self.patterns.check(path, &lexed));
        violations.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        violations
    }

    /// Read and analyze one file.
    ///
    /// # Errors
    /// Returns [`crate::GateError::FileRead`] if the file cannot be read.
    pub fn analyze_path(&self, path: &Path) -> Result<Vec<Violation>> {
        let unit = SourceUnit::read(path)?;
        tracing::debug!(path = %path.display(), lines = unit.len(), "analyzing");
        Ok(self.analyze(&unit))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
