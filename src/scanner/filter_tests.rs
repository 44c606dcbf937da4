use std::path::Path;

use super::*;

#[test]
fn filter_by_extension() {
    let filter = GlobFilter::new(vec!["java".to_string()], &[]).unwrap();

    assert!(filter.should_include(Path::new("src/Main.java")));
    assert!(!filter.should_include(Path::new("src/Main.kt")));
    assert!(!filter.should_include(Path::new("README")));
}

#[test]
fn extension_matching_ignores_case_and_leading_dot() {
    let filter = GlobFilter::new(vec![".JAVA".to_string()], &[]).unwrap();

    assert!(filter.should_include(Path::new("Main.java")));
    assert!(filter.should_include(Path::new("Legacy.JAVA")));
}

#[test]
fn empty_extensions_accept_all() {
    let filter = GlobFilter::new(vec![], &[]).unwrap();

    assert!(filter.should_include(Path::new("Main.java")));
    assert!(filter.should_include(Path::new("notes.txt")));
}

#[test]
fn exclude_patterns_win_over_extension() {
    let filter = GlobFilter::new(
        vec!["java".to_string()],
        &["**/generated/**".to_string(), "**/*Test.java".to_string()],
    )
    .unwrap();

    assert!(filter.should_include(Path::new("src/main/java/App.java")));
    assert!(!filter.should_include(Path::new("build/generated/Stub.java")));
    assert!(!filter.should_include(Path::new("src/test/java/AppTest.java")));
}

#[test]
fn invalid_pattern_returns_error() {
    let result = GlobFilter::new(vec![], &["[invalid".to_string()]);
    assert!(matches!(
        result.err(),
        Some(GateError::InvalidPattern { ref pattern, .. }) if pattern == "[invalid"
    ));
}

#[test]
fn from_config_uses_scanner_section() {
    let config = ScannerConfig {
        extensions: vec!["java".to_string()],
        exclude: vec!["**/vendor/**".to_string()],
        gitignore: false,
    };
    let filter = GlobFilter::from_config(&config).unwrap();

    assert!(filter.should_include(Path::new("src/A.java")));
    assert!(!filter.should_include(Path::new("vendor/B.java")));
}
