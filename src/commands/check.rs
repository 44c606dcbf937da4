use std::path::PathBuf;

use crate::checker::GateResult;
use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, validate_config_semantics};
use crate::coverage::MetricType;
use crate::gate::GateRunner;
use crate::output::formatter_for;
use crate::scanner::{DirectoryScanner, GlobFilter, discover_files};
use crate::{EXIT_CONFIG_ERROR, EXIT_GATE_FAILED, EXIT_SUCCESS};

use super::context::{color_choice_to_mode, load_config, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?.config;

    // 2. Apply CLI argument overrides, then reject bad values before scanning
    apply_cli_overrides(&mut config, args);
    validate_config_semantics(&config)?;

    // 3. Resolve input paths to files
    let files = collect_files(&args.paths, &config)?;
    tracing::info!(files = files.len(), "discovered source files");

    // 4. Run the gate
    let mut runner = GateRunner::from_config(&config, !cli.quiet)?;
    let result = runner.run(&files, config.coverage.report.as_deref());

    // 5. Format and write output
    let formatter = formatter_for(args.format, color_choice_to_mode(cli.color));
    let output = formatter.format(&result)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(exit_code(&result))
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(ref extensions) = args.ext {
        config.scanner.extensions.clone_from(extensions);
    }
    config.scanner.exclude.extend(args.exclude.iter().cloned());
    if args.no_gitignore {
        config.scanner.gitignore = false;
    }

    if let Some(max_method_lines) = args.max_method_lines {
        config.structure.max_method_lines = max_method_lines;
    }
    if let Some(max_line_length) = args.max_line_length {
        config.structure.max_line_length = max_line_length;
    }
    if let Some(window) = args.doc_window {
        config.docs.window = window;
    }
    if args.strict {
        config.structure.strict = true;
    }

    let thresholds = [
        (MetricType::Line, args.line_threshold),
        (MetricType::Branch, args.branch_threshold),
        (MetricType::Method, args.method_threshold),
        (MetricType::Class, args.class_threshold),
    ];
    for (metric, value) in thresholds {
        if let Some(value) = value {
            config.coverage.thresholds.set(metric, value);
        }
    }
    if let Some(ref report) = args.coverage {
        config.coverage.report = Some(report.clone());
    }
    if args.require_coverage {
        config.coverage.required = true;
    }
}

fn collect_files(paths: &[PathBuf], config: &Config) -> crate::Result<Vec<PathBuf>> {
    let filter = GlobFilter::from_config(&config.scanner)?;
    let scanner = DirectoryScanner::with_gitignore(filter, config.scanner.gitignore);
    discover_files(paths, &scanner, scanner.filter())
}

pub(crate) const fn exit_code(result: &GateResult) -> i32 {
    if result.passed {
        EXIT_SUCCESS
    } else {
        EXIT_GATE_FAILED
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
