use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GateError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid regex: {pattern}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Coverage report format error: {0}")]
    ReportFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl GateError {
    /// Short category name used in error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::InvalidPath(_) => "Path",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } | Self::InvalidRegex { .. } => "Pattern",
            Self::ReportFormat(_) => "Report",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// Whether this error means the invocation itself was wrong, as opposed to
    /// a failure while running the gate.
    #[must_use]
    pub const fn is_invocation_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::InvalidPath(_)
                | Self::InvalidPattern { .. }
                | Self::InvalidRegex { .. }
                | Self::TomlParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GateError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
