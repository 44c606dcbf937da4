use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "code-gate")]
#[command(
    author,
    version,
    about = "Quality gate for Java sources: structural checks plus coverage thresholds"
)]
#[command(long_about = "Scans Java sources for long methods, missing documentation, \
    banned calls, hardcoded literal comparisons and style smells, and checks a \
    JaCoCo-style coverage report against per-metric thresholds.\n\n\
    Exit codes:\n  \
    0 - Gate passed\n  \
    1 - Gate failed\n  \
    2 - Invalid invocation, configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output and non-error logs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan sources and evaluate coverage
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Paths to check (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Coverage report to evaluate (overrides config)
    #[arg(long, value_name = "REPORT")]
    pub coverage: Option<PathBuf>,

    /// File extensions to check (comma-separated, e.g., java)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Maximum method length in lines (overrides config)
    #[arg(long)]
    pub max_method_lines: Option<usize>,

    /// Blank lines allowed between a doc block and its declaration
    #[arg(long)]
    pub doc_window: Option<usize>,

    /// Maximum line length in characters (overrides config)
    #[arg(long)]
    pub max_line_length: Option<usize>,

    /// Minimum line coverage percentage
    #[arg(long, allow_negative_numbers = true)]
    pub line_threshold: Option<i64>,

    /// Minimum branch coverage percentage
    #[arg(long, allow_negative_numbers = true)]
    pub branch_threshold: Option<i64>,

    /// Minimum method coverage percentage (0 = informational)
    #[arg(long, allow_negative_numbers = true)]
    pub method_threshold: Option<i64>,

    /// Minimum class coverage percentage (0 = informational)
    #[arg(long, allow_negative_numbers = true)]
    pub class_threshold: Option<i64>,

    /// Treat warnings as failures (exit code 1)
    #[arg(long)]
    pub strict: bool,

    /// Fail the gate when coverage cannot be evaluated
    #[arg(long)]
    pub require_coverage: bool,

    /// Do not respect .gitignore files
    #[arg(long)]
    pub no_gitignore: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
