use std::path::Path;

use super::declaration::{Declaration, DeclarationMatcher, Visibility};
use crate::checker::{Severity, Violation, ViolationKind};
use crate::source::{LexState, LexedLine};

pub const DEFAULT_DOC_WINDOW: usize = 5;
pub const DEFAULT_DOC_SCAN_CAP: usize = 50;

/// Checks that declarations are preceded by a `/** ... */` block.
///
/// The lookback from a declaration skips annotation lines for free and blank
/// lines at the cost of one unit of `window` each. The first other line must
/// close a block comment that was opened with `/**`. At most `scan_cap` lines
/// are examined in total.
pub struct DocAssociator {
    matcher: DeclarationMatcher,
    window: usize,
    scan_cap: usize,
    visibilities: Vec<Visibility>,
}

impl Default for DocAssociator {
    fn default() -> Self {
        Self::new(DEFAULT_DOC_WINDOW, DEFAULT_DOC_SCAN_CAP, vec![Visibility::Public])
    }
}

impl DocAssociator {
    #[must_use]
    pub fn new(window: usize, scan_cap: usize, visibilities: Vec<Visibility>) -> Self {
        Self {
            matcher: DeclarationMatcher::new(),
            window,
            scan_cap,
            visibilities,
        }
    }

    /// `MissingDoc` violations for undocumented declarations.
    #[must_use]
    pub fn check(&self, path: &Path, lines: &[LexedLine<'_>]) -> Vec<Violation> {
        lines
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                let decl = self.required_declaration(line)?;
                if self.is_documented(lines, idx) {
                    return None;
                }
                Some(missing_doc(path, line.line.number, &decl))
            })
            .collect()
    }

    fn required_declaration(&self, line: &LexedLine<'_>) -> Option<Declaration> {
        if line.entry != LexState::Code || line.is_comment() || line.line.is_blank() {
            return None;
        }
        let decl = self.matcher.declaration(line.code())?;
        self.visibilities
            .contains(&decl.visibility)
            .then_some(decl)
    }

    /// Walk backward from the line above `idx` looking for a doc block.
    #[must_use]
    pub fn is_documented(&self, lines: &[LexedLine<'_>], idx: usize) -> bool {
        let mut window = self.window;
        let mut examined = 0;
        let mut j = idx;

        while j > 0 {
            j -= 1;
            if examined >= self.scan_cap {
                return false;
            }
            examined += 1;
            let line = lines[j].line;
            if lines[j].scan.paren_delta < 0 {
                // Tail of an argument list; only an annotation may own it.
                match self.annotation_start(lines, j, &mut examined) {
                    Some(start) => {
                        j = start;
                        continue;
                    }
                    None => return false,
                }
            }
            if line.is_annotation() {
                continue;
            }
            if line.is_blank() {
                if window == 0 {
                    return false;
                }
                window -= 1;
                continue;
            }
            if line.is_comment_end() {
                return self.opens_with_doc_marker(lines, j, examined - 1);
            }
            return false;
        }

        false
    }

    /// Line on which the argument list closing at `end` was opened, provided
    /// that line is an annotation.
    fn annotation_start(
        &self,
        lines: &[LexedLine<'_>],
        end: usize,
        examined: &mut usize,
    ) -> Option<usize> {
        let mut balance = lines[end].scan.paren_delta;
        for k in (0..end).rev() {
            if *examined >= self.scan_cap {
                return None;
            }
            *examined += 1;
            balance += lines[k].scan.paren_delta;
            if balance >= 0 {
                return lines[k].line.is_annotation().then_some(k);
            }
        }
        None
    }

    /// The block comment closing on line `end` was opened with `/**`.
    fn opens_with_doc_marker(&self, lines: &[LexedLine<'_>], end: usize, examined: usize) -> bool {
        let remaining = self.scan_cap.saturating_sub(examined);
        for line in lines[..=end].iter().rev().take(remaining) {
            if let Some(pos) = line.line.text.find("/*") {
                return line.line.text[pos..].starts_with("/**");
            }
        }
        false
    }
}

fn missing_doc(path: &Path, line: usize, decl: &Declaration) -> Violation {
    Violation::new(
        ViolationKind::MissingDoc,
        Severity::Error,
        "missing-doc",
        path,
        line,
        format!(
            "{} {} '{}' has no documentation comment",
            capitalize(decl.visibility.as_str()),
            decl.kind.as_str(),
            decl.name
        ),
    )
    .with_remediation("Add a /** ... */ block directly above the declaration")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
#[path = "doc_tests.rs"]
mod tests;
