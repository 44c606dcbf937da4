use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = GateError::Config("invalid threshold".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid threshold");
}

#[test]
fn error_display_file_read() {
    let err = GateError::FileRead {
        path: PathBuf::from("Foo.java"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("Foo.java"));
}

#[test]
fn error_display_invalid_path() {
    let err = GateError::InvalidPath(PathBuf::from("missing/dir"));
    assert_eq!(err.to_string(), "Invalid path: missing/dir");
}

#[test]
fn error_display_report_format() {
    let err = GateError::ReportFormat("no root counters".to_string());
    assert_eq!(
        err.to_string(),
        "Coverage report format error: no root counters"
    );
}

#[test]
fn error_source_is_preserved_for_patterns() {
    let source = globset::Glob::new("[").unwrap_err();
    let err = GateError::InvalidPattern {
        pattern: "[".to_string(),
        source,
    };
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn error_type_returns_category() {
    assert_eq!(GateError::Config("x".to_string()).error_type(), "Config");
    assert_eq!(
        GateError::InvalidPath(PathBuf::from("x")).error_type(),
        "Path"
    );
    assert_eq!(
        GateError::ReportFormat("x".to_string()).error_type(),
        "Report"
    );
    assert_eq!(
        GateError::Io(std::io::Error::other("x")).error_type(),
        "IO"
    );
}

#[test]
fn invocation_errors_are_classified() {
    assert!(GateError::Config("x".to_string()).is_invocation_error());
    assert!(GateError::InvalidPath(PathBuf::from("x")).is_invocation_error());
    assert!(!GateError::ReportFormat("x".to_string()).is_invocation_error());
    assert!(!GateError::Io(std::io::Error::other("x")).is_invocation_error());
}
