#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the style-guard binary.
#[macro_export]
macro_rules! style_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("style-guard"))
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
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Reads a file back from the temp directory.
    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Creates a basic style-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".style-guard.toml", content);
    }

    /// Creates a JavaScript file with the given number of clean functions.
    pub fn create_clean_js_file(&self, relative_path: &str, functions: usize) {
        let mut content = String::new();
        for i in 0..functions {
            let _ = writeln!(content, "function helper{i}(left, right) {{");
            let _ = writeln!(content, "  return left + right;");
            let _ = writeln!(content, "}}");
        }
        self.create_file(relative_path, &content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Basic config: default rules, gitignore handling pinned off.
pub const BASIC_CONFIG: &str = r#"
version = 1

[scan]
gitignore = false
"#;

/// Config that promotes warnings to failures.
pub const STRICT_CONFIG: &str = r#"
version = 1

[scan]
gitignore = false

[check]
strict = true
"#;

/// Config with adjusted rule levels to exercise level handling.
pub const RELAXED_CONFIG: &str = r#"
version = 1

[scan]
gitignore = false

[rules]
no-hungarian-notation = "warn"
no-comment-separators = "off"
"#;

/// A source file no builtin rule objects to.
pub const CLEAN_JS: &str = "/**\n * Adds two numbers.\n */\nfunction add(a, b) {\n  return a + b;\n}\n";

/// A source file with a single Hungarian-notation error.
pub const HUNGARIAN_JS: &str = "let pCount = 1;\n";

/// A source file with a single fixable starred-block violation.
pub const FIXABLE_JS: &str = "/* note */\nlet total = 0;\n";

/// A source file that triggers every builtin rule exactly once.
pub const ALL_RULES_JS: &str =
    "//******************\n/* section */\nlet pCount = 1;\nlet tag = obj.constructor.name;\n";
