use super::*;
use crate::checker::{CoverageStatus, VerdictPolicy};

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
}

#[test]
fn output_format_from_str_rejects_unknown() {
    let err = "sarif".parse::<OutputFormat>().unwrap_err();
    assert_eq!(err, "Unknown output format: sarif");
}

#[test]
fn formatter_for_each_format() {
    let result = GateResult::new(
        Vec::new(),
        Vec::new(),
        CoverageStatus::NotRequested,
        0,
        VerdictPolicy::default(),
    );

    let text = formatter_for(OutputFormat::Text, ColorMode::Never)
        .format(&result)
        .unwrap();
    assert!(text.contains("Gate: PASSED"));

    let json = formatter_for(OutputFormat::Json, ColorMode::Never)
        .format(&result)
        .unwrap();
    assert!(json.contains("\"passed\": true"));
}
