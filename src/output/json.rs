use serde::Serialize;

use crate::diagnostics::{Diagnostic, FileReport, Severity};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    files: Vec<JsonFile>,
}

#[derive(Serialize)]
struct Summary {
    files: usize,
    errors: usize,
    warnings: usize,
    fixable: usize,
}

#[derive(Serialize)]
struct JsonFile {
    path: String,
    diagnostics: Vec<JsonDiagnostic>,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    rule: &'static str,
    severity: Severity,
    message: String,
    start: Position,
    end: Position,
    span: ByteSpan,
    fixable: bool,
}

#[derive(Serialize)]
struct Position {
    line: usize,
    column: usize,
}

#[derive(Serialize)]
struct ByteSpan {
    start: usize,
    end: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                files: reports.len(),
                errors: reports.iter().map(FileReport::error_count).sum(),
                warnings: reports.iter().map(FileReport::warning_count).sum(),
                fixable: reports.iter().map(FileReport::fixable_count).sum(),
            },
            files: reports.iter().map(convert_report).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_report(report: &FileReport) -> JsonFile {
    JsonFile {
        path: report.path.display().to_string(),
        diagnostics: report.diagnostics.iter().map(convert_diagnostic).collect(),
    }
}

fn convert_diagnostic(diagnostic: &Diagnostic) -> JsonDiagnostic {
    JsonDiagnostic {
        rule: diagnostic.rule,
        severity: diagnostic.severity,
        message: diagnostic.message.clone(),
        start: Position {
            line: diagnostic.start.line,
            column: diagnostic.start.column,
        },
        end: Position {
            line: diagnostic.end.line,
            column: diagnostic.end.column,
        },
        span: ByteSpan {
            start: diagnostic.span.start,
            end: diagnostic.span.end,
        },
        fixable: diagnostic.is_fixable(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
