//! Configuration semantic validation.
//!
//! Runs after parsing and CLI overrides, before any scanning. Every failure
//! here is fatal.

use crate::config::Config;
use crate::coverage::MetricType;
use crate::{GateError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a threshold is outside 0..=100, a limit is zero,
/// an exclude glob or banned-call regex does not compile, or the extension
/// list is empty.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_thresholds(config)?;
    validate_limits(config)?;
    validate_scanner(config)?;
    validate_patterns(config)?;
    Ok(())
}

fn validate_thresholds(config: &Config) -> Result<()> {
    for metric in MetricType::ALL {
        let value = config.coverage.thresholds.get(metric);
        if value < 0 {
            return Err(GateError::Config(format!(
                "coverage.thresholds.{} must not be negative, got {value}",
                metric.name()
            )));
        }
        if value > 100 {
            return Err(GateError::Config(format!(
                "coverage.thresholds.{} must be at most 100, got {value}",
                metric.name()
            )));
        }
    }
    Ok(())
}

fn validate_limits(config: &Config) -> Result<()> {
    let limits = [
        ("structure.max_method_lines", config.structure.max_method_lines),
        ("structure.max_line_length", config.structure.max_line_length),
        ("docs.scan_cap", config.docs.scan_cap),
    ];
    for (name, value) in limits {
        if value == 0 {
            return Err(GateError::Config(format!(
                "{name} must be greater than 0"
            )));
        }
    }
    Ok(())
}

fn validate_scanner(config: &Config) -> Result<()> {
    if config.scanner.extensions.is_empty() {
        return Err(GateError::Config(
            "scanner.extensions must list at least one extension".to_string(),
        ));
    }
    for ext in &config.scanner.extensions {
        // A leading dot is allowed; the file filter strips it.
        if ext.trim_start_matches('.').is_empty() {
            return Err(GateError::Config(format!(
                "scanner.extensions entry '{ext}' must name an extension such as 'java'"
            )));
        }
    }
    for pattern in &config.scanner.exclude {
        globset::Glob::new(pattern).map_err(|e| GateError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

fn validate_patterns(config: &Config) -> Result<()> {
    for pattern in &config.patterns.banned_calls {
        regex::Regex::new(pattern).map_err(|e| GateError::InvalidRegex {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
