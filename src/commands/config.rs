use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, parse_config, validate_config_semantics};
use crate::coverage::MetricType;
use crate::output::OutputFormat;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, GateError, Result};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(GateError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config = parse_config(&content)?;

    validate_config_semantics(&config)
}

fn run_config_show(config_path: Option<&Path>, format: OutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli.no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: OutputFormat,
    no_config: bool,
) -> Result<String> {
    let config = load_config(config_path, no_config)?.config;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub fn format_config_text(config: &Config) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[scanner]\n");
    let _ = writeln!(output, "  extensions = {:?}", config.scanner.extensions);
    let _ = writeln!(output, "  gitignore = {}", config.scanner.gitignore);
    if !config.scanner.exclude.is_empty() {
        let _ = writeln!(output, "  exclude = {:?}", config.scanner.exclude);
    }

    output.push_str("\n[structure]\n");
    let _ = writeln!(
        output,
        "  max_method_lines = {}",
        config.structure.max_method_lines
    );
    let _ = writeln!(
        output,
        "  max_line_length = {}",
        config.structure.max_line_length
    );
    let _ = writeln!(output, "  strict = {}", config.structure.strict);

    output.push_str("\n[docs]\n");
    let _ = writeln!(output, "  window = {}", config.docs.window);
    let _ = writeln!(output, "  scan_cap = {}", config.docs.scan_cap);
    let visibilities: Vec<_> = config.docs.visibilities.iter().map(|v| v.as_str()).collect();
    let _ = writeln!(output, "  visibilities = {visibilities:?}");

    output.push_str("\n[patterns]\n");
    let _ = writeln!(output, "  banned_calls = {:?}", config.patterns.banned_calls);
    let _ = writeln!(
        output,
        "  logging_facility = \"{}\"",
        config.patterns.logging_facility
    );
    let _ = writeln!(
        output,
        "  disallowed_indent = \"{}\"",
        config.patterns.disallowed_indent.as_str()
    );
    let _ = writeln!(
        output,
        "  max_consecutive_blank_lines = {}",
        config.patterns.max_consecutive_blank_lines
    );

    output.push_str("\n[coverage]\n");
    match &config.coverage.report {
        Some(report) => {
            let _ = writeln!(output, "  report = \"{}\"", report.display());
        }
        None => output.push_str("  report = (none)\n"),
    }
    let _ = writeln!(
        output,
        "  unit_scope = \"{}\"",
        config.coverage.unit_scope.element()
    );
    let _ = writeln!(output, "  required = {}", config.coverage.required);

    output.push_str("\n[coverage.thresholds]\n");
    for metric in MetricType::ALL {
        let _ = writeln!(
            output,
            "  {} = {}",
            metric.name(),
            config.coverage.thresholds.get(metric)
        );
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
