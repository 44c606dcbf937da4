//! Source units and the line-level view the analyzers work on.
//!
//! A [`SourceUnit`] is read once and never mutated. Every [`Line`] keeps its
//! original text (trailing whitespace included) so brace counting and length
//! checks see exactly what is on disk.

mod lexer;

pub use lexer::{LexState, LineScan, scan_line};

use std::path::{Path, PathBuf};

use crate::error::{GateError, Result};

/// One physical line of a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number.
    pub number: usize,
    pub text: String,
}

impl Line {
    #[must_use]
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Line comment, block comment opener, or a `*`-prefixed continuation line.
    #[must_use]
    pub fn is_comment(&self) -> bool {
        let trimmed = self.trimmed();
        trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
    }

    #[must_use]
    pub fn is_comment_start(&self) -> bool {
        self.trimmed().starts_with("/*")
    }

    #[must_use]
    pub fn is_comment_end(&self) -> bool {
        self.trimmed().ends_with("*/")
    }

    /// `@Name` or `@Name(...)`, but not an `@interface` declaration.
    #[must_use]
    pub fn is_annotation(&self) -> bool {
        let trimmed = self.trimmed();
        trimmed.starts_with('@') && !trimmed.starts_with("@interface")
    }

    /// Leading whitespace of the line.
    #[must_use]
    pub fn indentation(&self) -> &str {
        let content_start = self.text.len() - self.text.trim_start().len();
        &self.text[..content_start]
    }

    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Lex this line starting from `entry` state.
    #[must_use]
    pub fn scan(&self, entry: LexState) -> LineScan {
        scan_line(&self.text, entry)
    }
}

/// A line together with its lexical context inside the file.
#[derive(Debug, Clone)]
pub struct LexedLine<'a> {
    pub line: &'a Line,
    /// Lexer state at the start of the line.
    pub entry: LexState,
    pub scan: LineScan,
}

impl LexedLine<'_> {
    /// The line starts inside a block comment or is itself a comment line.
    #[must_use]
    pub fn is_comment(&self) -> bool {
        self.entry == LexState::BlockComment || self.line.is_comment()
    }

    /// Code portion of the line with comments removed.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.scan.code
    }
}

/// A file identified by path, owning its lines.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    path: PathBuf,
    lines: Vec<Line>,
}

impl SourceUnit {
    /// Read a source file from disk. Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    /// Returns [`GateError::FileRead`] if the file cannot be read.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| GateError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);
        Ok(Self::from_source(path, &content))
    }

    #[must_use]
    pub fn from_source(path: impl Into<PathBuf>, content: &str) -> Self {
        let lines = content
            .lines()
            .enumerate()
            .map(|(i, text)| Line::new(i + 1, text))
            .collect();
        Self {
            path: path.into(),
            lines,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lex every line in order, carrying block comment and text block state
    /// from one line to the next.
    #[must_use]
    pub fn lex(&self) -> Vec<LexedLine<'_>> {
        let mut state = LexState::Code;
        self.lines
            .iter()
            .map(|line| {
                let scan = line.scan(state);
                let entry = state;
                state = scan.exit;
                LexedLine { line, entry, scan }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
