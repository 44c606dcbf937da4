//! Diagnostic logging setup.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable that overrides the log filter, e.g.
/// `CODE_GATE_LOG=code_gate::gate=debug`.
pub const LOG_ENV_VAR: &str = "CODE_GATE_LOG";

static INIT: Once = Once::new();

/// Default filter directive for the given verbosity flags.
#[must_use]
pub const fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "code_gate=error";
    }
    match verbose {
        0 => "code_gate=warn",
        1 => "code_gate=info",
        _ => "code_gate=debug",
    }
}

/// Install the stderr subscriber. Later calls are no-ops.
pub fn init_logging(verbose: u8, quiet: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

        // A subscriber installed elsewhere (tests) wins.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init();
    });
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
