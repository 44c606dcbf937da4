//! Integration tests for the `check` command.

mod common;

use common::{BASIC_CONFIG, STRICT_CONFIG, TestFixture};
use predicates::prelude::*;

fn json_output(fixture: &TestFixture, extra: &[&str]) -> (i32, serde_json::Value) {
    let mut args = vec!["--color", "never", "check", "--format", "json"];
    args.extend_from_slice(extra);
    let output = code_gate!()
        .current_dir(fixture.path())
        .args(&args)
        .output()
        .unwrap();
    let json = serde_json::from_slice(&output.stdout).unwrap();
    (output.status.code().unwrap(), json)
}

// =============================================================================
// Structural Checks
// =============================================================================

#[test]
fn check_passes_on_clean_sources() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_CONFIG);
    fixture.create_java_class("src/Service.java", "Service", 5);

    code_gate!()
        .current_dir(fixture.path())
        .args(["--color", "never", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary: 1 files scanned"))
        .stdout(predicate::str::contains("Gate: PASSED"));
}

#[test]
fn long_method_is_reported_at_its_start_line() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_CONFIG);
    // 33 statements plus the signature and closing brace: a 35-line method.
    fixture.create_java_class("src/Service.java", "Service", 33);

    let (code, json) = json_output(&fixture, &[]);

    assert_eq!(code, 1);
    assert_eq!(json["passed"], false);
    let violations = json["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0]["kind"], "long_method");
    assert_eq!(violations[0]["severity"], "error");
    assert_eq!(violations[0]["line"], 4);
}

#[test]
fn violations_show_remediation_in_text_output() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_CONFIG);
    fixture.create_file(
        "src/Noisy.java",
        "/** Noisy. */\npublic class Noisy {\n    /** Run. */\n    public void run() {\n        System.out.println(\"hi\");\n    }\n}\n",
    );

    code_gate!()
        .current_dir(fixture.path())
        .args(["--color", "never", "check"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("BannedCall"))
        .stdout(predicate::str::contains("Noisy.java:5"))
        .stdout(predicate::str::contains("-> Log through an SLF4J Logger instead"))
        .stdout(predicate::str::contains("Gate: FAILED"));
}

#[test]
fn missing_documentation_fails_the_gate() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_CONFIG);
    fixture.create_file(
        "src/Bare.java",
        "public class Bare {\n}\n",
    );

    code_gate!()
        .current_dir(fixture.path())
        .args(["--color", "never", "check"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("MissingDoc"))
        .stdout(predicate::str::contains("Public type 'Bare'"));
}

#[test]
fn concurrent_scan_matches_single_file_scans() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_CONFIG);
    fixture.create_java_class("src/a/Alpha.java", "Alpha", 33);
    fixture.create_java_class("src/b/Beta.java", "Beta", 40);

    let (_, together) = json_output(&fixture, &["src"]);
    let (_, alpha) = json_output(&fixture, &["src/a/Alpha.java"]);
    let (_, beta) = json_output(&fixture, &["src/b/Beta.java"]);

    let mut separate = alpha["violations"].as_array().unwrap().clone();
    separate.extend(beta["violations"].as_array().unwrap().iter().cloned());
    assert_eq!(together["violations"].as_array().unwrap(), &separate);
    assert_eq!(together["summary"]["files_scanned"], 2);
}

#[test]
fn excluded_directories_are_not_scanned() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_CONFIG);
    fixture.create_java_class("src/Service.java", "Service", 5);
    fixture.create_java_class("build/Generated.java", "Generated", 50);

    code_gate!()
        .current_dir(fixture.path())
        .args(["--quiet", "check"])
        .assert()
        .success();
}

#[test]
fn strict_mode_fails_on_warnings() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_CONFIG);
    fixture.create_file(
        "src/Imports.java",
        "import java.util.*;\n\n/** Imports. */\npublic class Imports {\n}\n",
    );

    code_gate!()
        .current_dir(fixture.path())
        .args(["--quiet", "check"])
        .assert()
        .success();

    code_gate!()
        .current_dir(fixture.path())
        .args(["--quiet", "check", "--strict"])
        .assert()
        .code(1);
}

// =============================================================================
// Coverage
// =============================================================================

#[test]
fn coverage_at_exact_threshold_passes() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_CONFIG);
    fixture.create_java_class("src/Service.java", "Service", 5);
    fixture.create_report("jacoco.xml", (20, 80), (3, 7));

    code_gate!()
        .current_dir(fixture.path())
        .args(["--color", "never", "check", "--coverage", "jacoco.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coverage:"))
        .stdout(predicate::str::contains("PASS"))
        .stdout(predicate::str::contains("Gate: PASSED"));
}

#[test]
fn empty_line_counter_fails_a_nonzero_threshold() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_CONFIG);
    fixture.create_java_class("src/Service.java", "Service", 5);
    fixture.create_report("jacoco.xml", (0, 0), (0, 10));

    let (code, json) = json_output(&fixture, &["--coverage", "jacoco.xml"]);

    assert_eq!(code, 1);
    let line = &json["coverage"]["metrics"]["line"];
    assert_eq!(line["percentage"], 0);
    assert_eq!(line["passed"], false);
}

#[test]
fn malformed_report_marks_coverage_unavailable() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_CONFIG);
    fixture.create_java_class("src/Service.java", "Service", 5);
    fixture.create_file("jacoco.xml", "<report><counter type=\"LINE\" missed=\"x\"");

    code_gate!()
        .current_dir(fixture.path())
        .args(["--color", "never", "check", "--coverage", "jacoco.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("coverage unavailable:"));
}

#[test]
fn required_coverage_fails_when_report_is_missing() {
    let fixture = TestFixture::new();
    fixture.create_config(STRICT_CONFIG);
    fixture.create_java_class("src/Service.java", "Service", 5);

    let (code, json) = json_output(&fixture, &[]);

    assert_eq!(code, 1);
    assert_eq!(json["summary"]["coverage_unavailable"], true);
    let reasons = json["failure_reasons"].as_array().unwrap();
    assert!(reasons[0].as_str().unwrap().contains("coverage is required"));
}

#[test]
fn config_thresholds_apply_and_cli_overrides_them() {
    let fixture = TestFixture::new();
    fixture.create_config(STRICT_CONFIG);
    fixture.create_java_class("src/Service.java", "Service", 5);
    fixture.create_report("jacoco.xml", (15, 85), (1, 9));

    code_gate!()
        .current_dir(fixture.path())
        .args(["--quiet", "check"])
        .assert()
        .code(1);

    code_gate!()
        .current_dir(fixture.path())
        .args(["--quiet", "check", "--line-threshold", "85"])
        .assert()
        .success();
}

// =============================================================================
// Invocation Errors
// =============================================================================

#[test]
fn nonexistent_path_exits_with_code_2() {
    let fixture = TestFixture::new();

    code_gate!()
        .current_dir(fixture.path())
        .args(["check", "does/not/exist"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error: Invalid path"));
}

#[test]
fn negative_threshold_exits_with_code_2() {
    let fixture = TestFixture::new();
    fixture.create_java_class("src/Service.java", "Service", 5);

    code_gate!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "--line-threshold", "-20"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("coverage.thresholds.line must not be negative"));
}

#[test]
fn invalid_config_exits_with_code_2() {
    let fixture = TestFixture::new();
    fixture.create_config("[structure\nmax_method_lines = 30\n");

    code_gate!()
        .current_dir(fixture.path())
        .args(["check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn unknown_argument_exits_with_code_2() {
    code_gate!().args(["check", "--bogus"]).assert().code(2);
}

#[test]
fn output_file_receives_the_report() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_CONFIG);
    fixture.create_java_class("src/Service.java", "Service", 5);

    code_gate!()
        .current_dir(fixture.path())
        .args(["check", "--format", "json", "--output", "reports/gate.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(fixture.path().join("reports/gate.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["passed"], true);
}
