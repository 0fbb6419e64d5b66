use serde::{Deserialize, Serialize};

use crate::diagnostics::Severity;
use crate::error::{Result, StyleGuardError};
use crate::rules::DEFAULT_IGNORE_KINDS;

/// Supported config schema version.
pub const CONFIG_VERSION: u32 = 1;

/// The complete configuration, as loaded from TOML.
///
/// Every field has a default, so a missing or empty config file behaves like
/// `Config::default()`. Unknown keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Config schema version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// File discovery settings.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Check behavior settings.
    #[serde(default)]
    pub check: CheckConfig,

    /// Per-rule severity levels.
    #[serde(default)]
    pub rules: RuleLevels,

    /// Options for the `no-constructor-name` rule.
    #[serde(default)]
    pub constructor_name: ConstructorNameConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            scan: ScanConfig::default(),
            check: CheckConfig::default(),
            rules: RuleLevels::default(),
            constructor_name: ConstructorNameConfig::default(),
        }
    }
}

impl Config {
    /// Validates semantic correctness beyond what deserialization enforces:
    /// exclude and include-paths patterns must be valid glob syntax, and
    /// ignore-kinds entries must be non-empty.
    ///
    /// # Errors
    /// Returns the first semantic error found.
    pub fn validate(&self) -> Result<()> {
        for pattern in self.scan.exclude.iter().chain(&self.scan.include_paths) {
            globset::Glob::new(pattern).map_err(|source| StyleGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
        }

        for (i, kind) in self.constructor_name.ignore_kinds.iter().enumerate() {
            if kind.trim().is_empty() {
                return Err(StyleGuardError::Config(format!(
                    "constructor-name.ignore-kinds[{i}] cannot be empty"
                )));
            }
        }

        Ok(())
    }
}

/// File discovery configuration, the `[scan]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ScanConfig {
    /// File extensions to lint (case-insensitive; empty = all files).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns excluded from the walk.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Glob patterns re-included after an exclude match.
    #[serde(default)]
    pub include_paths: Vec<String>,

    /// Honor `.gitignore` files during the walk.
    #[serde(default = "default_true")]
    pub gitignore: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: default_exclude(),
            include_paths: Vec::new(),
            gitignore: true,
        }
    }
}

/// Check behavior, the `[check]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckConfig {
    /// Treat warnings as failures when computing the exit code.
    #[serde(default)]
    pub strict: bool,
}

/// Severity level assigned to a rule, the values of the `[rules]` table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Off,
    Warn,
    Error,
}

impl RuleLevel {
    /// Diagnostic severity for this level, `None` when the rule is off.
    #[must_use]
    pub const fn severity(self) -> Option<Severity> {
        match self {
            Self::Off => None,
            Self::Warn => Some(Severity::Warning),
            Self::Error => Some(Severity::Error),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Per-rule levels, the `[rules]` table.
///
/// Naming rules default to `error` (they flag constructs that misbehave or
/// mislead), formatting rules to `warn`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct RuleLevels {
    #[serde(default = "default_error")]
    pub no_hungarian_notation: RuleLevel,

    #[serde(default = "default_warn")]
    pub no_comment_separators: RuleLevel,

    #[serde(default = "default_warn")]
    pub starred_block_comments: RuleLevel,

    #[serde(default = "default_error")]
    pub no_constructor_name: RuleLevel,
}

impl Default for RuleLevels {
    fn default() -> Self {
        Self {
            no_hungarian_notation: RuleLevel::Error,
            no_comment_separators: RuleLevel::Warn,
            starred_block_comments: RuleLevel::Warn,
            no_constructor_name: RuleLevel::Error,
        }
    }
}

impl RuleLevels {
    /// Level configured for `rule`, `None` for unknown rule names.
    #[must_use]
    pub fn level_for(&self, rule: &str) -> Option<RuleLevel> {
        match rule {
            "no-hungarian-notation" => Some(self.no_hungarian_notation),
            "no-comment-separators" => Some(self.no_comment_separators),
            "starred-block-comments" => Some(self.starred_block_comments),
            "no-constructor-name" => Some(self.no_constructor_name),
            _ => None,
        }
    }
}

/// Options for the `no-constructor-name` rule, the `[constructor-name]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ConstructorNameConfig {
    /// Syntax-tree node kinds whose occurrences are not reported.
    #[serde(default = "default_ignore_kinds")]
    pub ignore_kinds: Vec<String>,
}

impl Default for ConstructorNameConfig {
    fn default() -> Self {
        Self {
            ignore_kinds: default_ignore_kinds(),
        }
    }
}

const fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_extensions() -> Vec<String> {
    vec![
        "js".to_string(),
        "jsx".to_string(),
        "mjs".to_string(),
        "cjs".to_string(),
    ]
}

fn default_exclude() -> Vec<String> {
    vec![
        "**/node_modules/**".to_string(),
        "**/dist/**".to_string(),
        "**/build/**".to_string(),
        "**/coverage/**".to_string(),
    ]
}

const fn default_true() -> bool {
    true
}

const fn default_error() -> RuleLevel {
    RuleLevel::Error
}

const fn default_warn() -> RuleLevel {
    RuleLevel::Warn
}

fn default_ignore_kinds() -> Vec<String> {
    DEFAULT_IGNORE_KINDS
        .iter()
        .map(|kind| (*kind).to_string())
        .collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
