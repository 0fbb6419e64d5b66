mod json;
mod progress;
mod sarif;
mod text;

pub use json::JsonFormatter;
pub use progress::LintProgress;
pub use sarif::SarifFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::diagnostics::FileReport;
use crate::error::Result;

/// Renders a finished lint run as one of the report formats.
pub trait OutputFormatter {
    /// Produce the complete report for the given per-file results.
    ///
    /// # Errors
    /// Returns an error when serialization fails.
    fn format(&self, reports: &[FileReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Sarif,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "sarif" => Ok(Self::Sarif),
            _ => Err(format!(
                "Unknown output format '{s}'. Valid values: text, json, sarif"
            )),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
