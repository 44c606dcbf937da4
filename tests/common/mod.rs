#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the code-gate binary.
#[macro_export]
macro_rules! code_gate {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("code-gate"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a local code-gate config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".code-gate.toml", content);
    }

    /// Creates a documented Java class with one method of `body_lines` statements.
    ///
    /// The method spans `body_lines + 2` lines including its braces.
    pub fn create_java_class(&self, relative_path: &str, name: &str, body_lines: usize) {
        let mut content = format!("/** {name}. */\npublic class {name} {{\n    /** Run. */\n    public void run() {{\n");
        for i in 0..body_lines {
            let _ = writeln!(content, "        int value{i} = {i};");
        }
        content.push_str("    }\n}\n");
        self.create_file(relative_path, &content);
    }

    /// Creates a JaCoCo report with the given root line and branch counters.
    pub fn create_report(
        &self,
        relative_path: &str,
        line: (u64, u64),
        branch: (u64, u64),
    ) -> PathBuf {
        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<report name="fixture">
  <package name="com/acme">
    <class name="com/acme/Service">
      <counter type="LINE" missed="{lm}" covered="{lc}"/>
    </class>
  </package>
  <counter type="LINE" missed="{lm}" covered="{lc}"/>
  <counter type="BRANCH" missed="{bm}" covered="{bc}"/>
  <counter type="METHOD" missed="0" covered="4"/>
  <counter type="CLASS" missed="0" covered="1"/>
</report>
"#,
            lm = line.0,
            lc = line.1,
            bm = branch.0,
            bc = branch.1,
        );
        self.create_file(relative_path, &content)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Config that keeps scans local to the fixture.
pub const BASIC_CONFIG: &str = r#"
version = "1"

[scanner]
gitignore = false
exclude = ["**/build/**"]

[structure]
max_method_lines = 30
"#;

/// Config with a short method limit and a report that must be present.
pub const STRICT_CONFIG: &str = r#"
version = "1"

[scanner]
gitignore = false

[structure]
max_method_lines = 10
strict = true

[coverage]
report = "jacoco.xml"
required = true

[coverage.thresholds]
line = 90
branch = 80
"#;
