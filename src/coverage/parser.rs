use std::collections::HashMap;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{Counter, CoverageReport, CoverageUnit, MetricType};
use crate::error::{GateError, Result};

/// JaCoCo counter types that carry no gated metric.
const IGNORED_COUNTER_TYPES: &[&str] = &["INSTRUCTION", "COMPLEXITY"];

/// Which report element counts as a per-unit scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitScope {
    #[default]
    Class,
    #[serde(rename = "sourcefile")]
    SourceFile,
}

impl UnitScope {
    #[must_use]
    pub const fn element(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::SourceFile => "sourcefile",
        }
    }
}

/// An open element while walking the report.
struct Scope {
    element: String,
    name: Option<String>,
    /// Index into `CoverageReport::units` once this scope has produced a unit.
    unit: Option<usize>,
}

/// Extracts counters from a JaCoCo-style XML report.
///
/// Only a stack of open element names is kept: counters that are direct
/// children of the root element are totals (the last one per metric wins),
/// counters that are direct children of a unit-scope element are per-unit
/// counters, and everything else is ignored.
pub struct CoverageParser {
    unit_scope: UnitScope,
    comment: Regex,
    tag: Regex,
    attr: Regex,
}

impl Default for CoverageParser {
    fn default() -> Self {
        Self::new(UnitScope::default())
    }
}

impl CoverageParser {
    #[must_use]
    pub fn new(unit_scope: UnitScope) -> Self {
        Self {
            unit_scope,
            comment: Regex::new(r"(?s)<!--.*?-->").expect("Invalid regex"),
            tag: Regex::new(
                r#"<(/?)([A-Za-z_][\w:.-]*)((?:\s+[\w:.-]+\s*=\s*(?:"[^"]*"|'[^']*'))*)\s*(/?)>"#,
            )
            .expect("Invalid regex"),
            attr: Regex::new(r#"([\w:.-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("Invalid regex"),
        }
    }

    /// Read and parse a report file.
    ///
    /// # Errors
    /// Returns [`GateError::FileRead`] if the file cannot be read, or
    /// [`GateError::ReportFormat`] if it has no usable root counters.
    pub fn parse_file(&self, path: &Path) -> Result<CoverageReport> {
        let content = std::fs::read_to_string(path).map_err(|source| GateError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(&content)
    }

    /// Parse report content.
    ///
    /// # Errors
    /// Returns [`GateError::ReportFormat`] if a counter has malformed counts or
    /// if the root carries none of the four tracked metrics.
    pub fn parse(&self, content: &str) -> Result<CoverageReport> {
        let content = self.comment.replace_all(content, "");
        let mut report = CoverageReport::default();
        let mut stack: Vec<Scope> = Vec::new();

        for caps in self.tag.captures_iter(&content) {
            let is_closing = !caps[1].is_empty();
            let element = &caps[2];
            let is_self_closing = !caps[4].is_empty();

            if is_closing {
                close_scope(&mut stack, element);
                continue;
            }

            let attrs = self.attributes(caps.get(3).map_or("", |m| m.as_str()));
            if element == "counter" {
                self.record_counter(&attrs, &mut stack, &mut report)?;
            }
            if !is_self_closing {
                stack.push(Scope {
                    element: element.to_string(),
                    name: attrs.get("name").cloned(),
                    unit: None,
                });
            }
        }

        if report.totals.is_empty() {
            return Err(GateError::ReportFormat(
                "no root-level LINE, BRANCH, METHOD or CLASS counters found".to_string(),
            ));
        }
        Ok(report)
    }

    fn attributes(&self, raw: &str) -> HashMap<String, String> {
        self.attr
            .captures_iter(raw)
            .map(|caps| {
                let value = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
                (caps[1].to_string(), value.to_string())
            })
            .collect()
    }

    fn record_counter(
        &self,
        attrs: &HashMap<String, String>,
        stack: &mut [Scope],
        report: &mut CoverageReport,
    ) -> Result<()> {
        let tag = attrs.get("type").ok_or_else(|| {
            GateError::ReportFormat("counter is missing the 'type' attribute".to_string())
        })?;
        let Some(metric) = MetricType::from_report_tag(tag) else {
            if IGNORED_COUNTER_TYPES.contains(&tag.as_str()) {
                return Ok(());
            }
            return Err(GateError::ReportFormat(format!(
                "counter has an unknown type \"{tag}\""
            )));
        };

        let depth = stack.len();
        if depth == 1 {
            let counter = parse_counter(metric, attrs)?;
            report.totals.insert(metric, counter);
            return Ok(());
        }

        let is_unit = stack
            .last()
            .is_some_and(|scope| scope.element == self.unit_scope.element());
        if !is_unit {
            return Ok(());
        }

        let counter = parse_counter(metric, attrs)?;
        if let Some(index) = unit_index(stack, report) {
            report.units[index].counters.insert(metric, counter);
        }
        Ok(())
    }
}

fn parse_counter(metric: MetricType, attrs: &HashMap<String, String>) -> Result<Counter> {
    let count = |key: &str| -> Result<u64> {
        let raw = attrs.get(key).ok_or_else(|| {
            GateError::ReportFormat(format!("{metric} counter is missing the '{key}' attribute"))
        })?;
        raw.trim().parse::<u64>().map_err(|_| {
            GateError::ReportFormat(format!(
                "{metric} counter has a non-integer '{key}' value: \"{raw}\""
            ))
        })
    };
    Ok(Counter::new(metric, count("missed")?, count("covered")?))
}

/// Index of the unit for the innermost scope, creating it on first use.
fn unit_index(stack: &mut [Scope], report: &mut CoverageReport) -> Option<usize> {
    let package = stack
        .iter()
        .rev()
        .find(|scope| scope.element == "package")
        .and_then(|scope| scope.name.clone());

    let scope = stack.last_mut()?;
    if scope.unit.is_some() {
        return scope.unit;
    }

    let raw_name = scope.name.clone().unwrap_or_default();
    let name = match package {
        Some(pkg) if !raw_name.contains('/') && !pkg.is_empty() => format!("{pkg}/{raw_name}"),
        _ => raw_name,
    };
    report.units.push(CoverageUnit::new(name));
    let index = report.units.len() - 1;
    scope.unit = Some(index);
    scope.unit
}

/// Pop up to and including the innermost scope named `element`.
/// A stray closing tag with no matching open scope is ignored.
fn close_scope(stack: &mut Vec<Scope>, element: &str) {
    if let Some(pos) = stack.iter().rposition(|scope| scope.element == element) {
        stack.truncate(pos);
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
