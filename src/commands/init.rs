use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, GateError, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(GateError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# code-gate configuration file
version = "1"

[scanner]
# File extensions to analyze
extensions = ["java"]

# Exclude patterns (glob syntax)
exclude = [
    "**/target/**",
    "**/build/**",
    "**/generated/**",
]

# Respect .gitignore files (default: true)
gitignore = true

[structure]
# Maximum lines in a method body, braces included (default: 30)
max_method_lines = 30

# Maximum characters per line (default: 120)
max_line_length = 120

# Strict mode: warnings fail the gate too (default: false)
# strict = true

[docs]
# Blank lines allowed between a /** */ block and its declaration (default: 5)
window = 5

# Never look further than this many lines above a declaration (default: 50)
scan_cap = 50

# Visibilities that need a documentation comment: public, protected, package, private
visibilities = ["public"]

[patterns]
# Regexes for calls that must not appear in code
banned_calls = [
    '\bSystem\s*\.\s*out\s*\.\s*print\w*\s*\(',
    '\bSystem\s*\.\s*err\s*\.\s*print\w*\s*\(',
    '\.\s*printStackTrace\s*\(\s*\)',
]

# Named in the remediation hint for banned calls
logging_facility = "an SLF4J Logger"

# Indentation character that is reported: "tab" or "space"
disallowed_indent = "tab"

# Blank lines allowed in a row (default: 1)
max_consecutive_blank_lines = 1

[coverage]
# JaCoCo XML report; without it only structural checks run
# report = "target/site/jacoco/jacoco.xml"

# Units listed under the line threshold: "class" or "sourcefile"
unit_scope = "class"

# Fail when the report is missing or malformed (default: false)
required = false

[coverage.thresholds]
# Minimum percentages (0-100). A threshold of 0 is informational.
line = 80
branch = 70
method = 0
class = 0
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
