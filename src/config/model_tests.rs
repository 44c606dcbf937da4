use super::*;

#[test]
fn defaults_match_documented_values() {
    let config = Config::default();
    assert_eq!(config.scanner.extensions, vec!["java"]);
    assert!(config.scanner.gitignore);
    assert_eq!(config.structure.max_method_lines, 30);
    assert_eq!(config.structure.max_line_length, 120);
    assert!(!config.structure.strict);
    assert_eq!(config.docs.window, 5);
    assert_eq!(config.docs.scan_cap, 50);
    assert_eq!(config.docs.visibilities, vec![Visibility::Public]);
    assert_eq!(config.patterns.banned_calls.len(), 3);
    assert_eq!(config.patterns.logging_facility, "an SLF4J Logger");
    assert_eq!(config.patterns.disallowed_indent, IndentChar::Tab);
    assert_eq!(config.patterns.max_consecutive_blank_lines, 1);
    assert_eq!(config.coverage.report, None);
    assert_eq!(config.coverage.unit_scope, UnitScope::Class);
    assert!(!config.coverage.required);
    assert_eq!(config.coverage.thresholds.line, 80);
    assert_eq!(config.coverage.thresholds.branch, 70);
    assert_eq!(config.coverage.thresholds.method, 0);
    assert_eq!(config.coverage.thresholds.class, 0);
}

#[test]
fn empty_toml_gives_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config: Config = toml::from_str(
        r#"
[structure]
max_method_lines = 40

[docs]
visibilities = ["public", "protected"]

[coverage]
report = "target/site/jacoco/jacoco.xml"
unit_scope = "sourcefile"

[coverage.thresholds]
branch = 50
"#,
    )
    .unwrap();

    assert_eq!(config.structure.max_method_lines, 40);
    assert_eq!(config.structure.max_line_length, 120);
    assert_eq!(
        config.docs.visibilities,
        vec![Visibility::Public, Visibility::Protected]
    );
    assert_eq!(config.docs.window, 5);
    assert_eq!(
        config.coverage.report,
        Some(PathBuf::from("target/site/jacoco/jacoco.xml"))
    );
    assert_eq!(config.coverage.unit_scope, UnitScope::SourceFile);
    assert_eq!(config.coverage.thresholds.line, 80);
    assert_eq!(config.coverage.thresholds.branch, 50);
}

#[test]
fn negative_threshold_parses_for_validation() {
    let config: Config = toml::from_str("[coverage.thresholds]\nline = -5\n").unwrap();
    assert_eq!(config.coverage.thresholds.line, -5);
}

#[test]
fn unknown_visibility_is_a_parse_error() {
    let result: std::result::Result<Config, _> =
        toml::from_str("[docs]\nvisibilities = [\"friends\"]\n");
    assert!(result.is_err());
}

#[test]
fn thresholds_convert_to_policy() {
    let thresholds = ThresholdsConfig {
        line: 90,
        branch: 0,
        method: 25,
        class: 100,
    };
    let policy = thresholds.to_policy();
    assert_eq!(policy.threshold(MetricType::Line), 90);
    assert_eq!(policy.threshold(MetricType::Branch), 0);
    assert_eq!(policy.threshold(MetricType::Method), 25);
    assert_eq!(policy.threshold(MetricType::Class), 100);
}

#[test]
fn default_thresholds_match_default_policy() {
    assert_eq!(ThresholdsConfig::default().to_policy(), ThresholdPolicy::default());
}

#[test]
fn thresholds_set_and_get() {
    let mut thresholds = ThresholdsConfig::default();
    thresholds.set(MetricType::Class, 10);
    assert_eq!(thresholds.get(MetricType::Class), 10);
    assert_eq!(thresholds.get(MetricType::Line), 80);
}

#[test]
fn serialized_config_round_trips() {
    let config = Config::default();
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
