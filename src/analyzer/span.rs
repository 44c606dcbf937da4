use std::path::Path;

use serde::Serialize;

use super::declaration::{DeclarationKind, DeclarationMatcher};
use crate::checker::{Severity, Violation, ViolationKind};
use crate::source::{LexState, LexedLine};

pub const DEFAULT_MAX_METHOD_LINES: usize = 30;

/// Line range of one method-like declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodSpan {
    pub name: String,
    /// 1-based line of the declaration.
    pub start_line: usize,
    /// Declaration line through closing-brace line, inclusive.
    pub line_count: usize,
    /// Number of lines on which the brace depth changed.
    pub depth_trace_len: usize,
}

impl MethodSpan {
    #[must_use]
    pub const fn end_line(&self) -> usize {
        self.start_line + self.line_count - 1
    }
}

struct OpenSpan {
    name: String,
    start_line: usize,
    depth: isize,
    line_count: usize,
    depth_trace_len: usize,
    opened: bool,
}

impl OpenSpan {
    const fn new(name: String, start_line: usize) -> Self {
        Self {
            name,
            start_line,
            depth: 0,
            line_count: 0,
            depth_trace_len: 0,
            opened: false,
        }
    }

    /// Feed one line; returns true once the body has closed.
    fn advance(&mut self, line: &LexedLine<'_>) -> bool {
        let delta = line.scan.depth_delta();
        self.depth += delta;
        self.line_count += 1;
        if delta != 0 {
            self.depth_trace_len += 1;
        }
        if line.scan.opens > 0 {
            self.opened = true;
        }
        self.opened && self.depth <= 0
    }

    fn close(self) -> MethodSpan {
        MethodSpan {
            name: self.name,
            start_line: self.start_line,
            line_count: self.line_count,
            depth_trace_len: self.depth_trace_len,
        }
    }
}

/// Finds method bodies by brace-depth tracking and flags the long ones.
///
/// Braces are counted by the lexer, so braces inside string, char and text
/// block literals and inside comments are ignored. Declarations nested inside
/// an open span (inner classes, anonymous classes) are counted as part of
/// the enclosing method. A span still open at end of file is dropped.
pub struct MethodSpanDetector {
    matcher: DeclarationMatcher,
    max_lines: usize,
}

impl Default for MethodSpanDetector {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_METHOD_LINES)
    }
}

impl MethodSpanDetector {
    #[must_use]
    pub fn new(max_lines: usize) -> Self {
        Self {
            matcher: DeclarationMatcher::new(),
            max_lines,
        }
    }

    #[must_use]
    pub const fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Detect all closed method spans in order of appearance.
    #[must_use]
    pub fn spans(&self, lines: &[LexedLine<'_>]) -> Vec<MethodSpan> {
        let mut spans = Vec::new();
        let mut open: Option<OpenSpan> = None;

        for (idx, line) in lines.iter().enumerate() {
            if open.is_none() {
                open = self.try_open(lines, idx);
            }
            let closed = open.as_mut().is_some_and(|span| span.advance(line));
            if closed && let Some(span) = open.take() {
                spans.push(span.close());
            }
        }

        spans
    }

    /// `LongMethod` violations for spans longer than the configured maximum.
    #[must_use]
    pub fn check(&self, path: &Path, lines: &[LexedLine<'_>]) -> Vec<Violation> {
        self.spans(lines)
            .into_iter()
            .filter(|span| span.line_count > self.max_lines)
            .map(|span| {
                Violation::new(
                    ViolationKind::LongMethod,
                    Severity::Error,
                    "long-method",
                    path,
                    span.start_line,
                    format!(
                        "Method '{}' is {} lines long (max {})",
                        span.name, span.line_count, self.max_lines
                    ),
                )
                .with_remediation("Extract cohesive blocks into smaller, well-named methods")
            })
            .collect()
    }

    fn try_open(&self, lines: &[LexedLine<'_>], idx: usize) -> Option<OpenSpan> {
        let line = &lines[idx];
        if line.entry != LexState::Code || line.line.is_comment() {
            return None;
        }
        let decl = self.matcher.member_declaration(line.code())?;
        if decl.kind == DeclarationKind::Type || !opens_body(lines, idx) {
            return None;
        }
        Some(OpenSpan::new(decl.name, line.line.number))
    }
}

/// The declaration at `idx` has a body.
///
/// Lines are skipped while the parameter list is still open, however many
/// there are. After it closes, a `{` confirms and a trailing `;` rejects. A
/// `throws` clause confirms when the file ends before either shows up.
fn opens_body(lines: &[LexedLine<'_>], idx: usize) -> bool {
    let mut parens: isize = 0;
    let mut saw_throws = false;
    for line in &lines[idx..] {
        parens += line.scan.paren_delta;
        if parens > 0 {
            continue;
        }
        let code = line.code().trim_end();
        if line.scan.opens > 0 {
            return true;
        }
        if code.ends_with(';') {
            return false;
        }
        saw_throws |= code.contains("throws");
    }
    saw_throws
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
