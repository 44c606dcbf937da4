use std::path::Path;

use super::*;

#[test]
fn line_predicates() {
    assert!(Line::new(1, "   \t").is_blank());
    assert!(Line::new(1, "  // note").is_comment());
    assert!(Line::new(1, "  /** doc").is_comment_start());
    assert!(Line::new(1, "   * more").is_comment());
    assert!(Line::new(1, "   */").is_comment_end());
    assert!(Line::new(1, "  @Override").is_annotation());
    assert!(Line::new(1, "  @SuppressWarnings(\"unchecked\")").is_annotation());
    assert!(!Line::new(1, "public @interface Marker {").is_annotation());
    assert!(!Line::new(1, "@interface Marker {").is_annotation());
    assert!(!Line::new(1, "int x = 1;").is_comment());
}

#[test]
fn indentation_returns_leading_whitespace() {
    assert_eq!(Line::new(1, "\t  foo();").indentation(), "\t  ");
    assert_eq!(Line::new(1, "foo();").indentation(), "");
}

#[test]
fn from_source_numbers_lines_from_one_and_keeps_trailing_whitespace() {
    let unit = SourceUnit::from_source("A.java", "class A {   \n}\n");
    assert_eq!(unit.len(), 2);
    assert_eq!(unit.lines()[0].number, 1);
    assert_eq!(unit.lines()[0].text, "class A {   ");
    assert_eq!(unit.lines()[1].number, 2);
    assert_eq!(unit.path(), Path::new("A.java"));
}

#[test]
fn lex_carries_state_across_lines() {
    let unit = SourceUnit::from_source("A.java", "/* {\n  }\n*/ {\n");
    let lexed = unit.lex();

    assert_eq!(lexed[0].entry, LexState::Code);
    assert_eq!(lexed[1].entry, LexState::BlockComment);
    assert!(lexed[1].is_comment());
    assert_eq!(lexed[1].scan.closes, 0);
    assert_eq!(lexed[2].scan.opens, 1);
}

#[test]
fn lex_is_restartable() {
    let unit = SourceUnit::from_source("A.java", "a {\n}\n");
    let first: Vec<_> = unit.lex().into_iter().map(|l| l.scan).collect();
    let second: Vec<_> = unit.lex().into_iter().map(|l| l.scan).collect();
    assert_eq!(first, second);
}

#[test]
fn read_missing_file_is_file_read_error() {
    let err = SourceUnit::read(Path::new("definitely/not/here.java")).unwrap_err();
    assert!(matches!(err, crate::GateError::FileRead { .. }));
}

#[test]
fn read_tolerates_invalid_utf8() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("Bad.java");
    std::fs::write(&path, b"class Bad {\xff}\n").unwrap();

    let unit = SourceUnit::read(&path).unwrap();
    assert_eq!(unit.len(), 1);
}
