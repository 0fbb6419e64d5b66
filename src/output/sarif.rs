use serde::Serialize;

use crate::config::{RuleLevel, RuleLevels};
use crate::diagnostics::{Diagnostic, FileReport, Severity};
use crate::error::Result;
use crate::rules::builtin_rules;

use super::OutputFormatter;

/// SARIF 2.1.0 output formatter for GitHub Code Scanning and other CI/CD tools.
pub struct SarifFormatter;

impl SarifFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SarifFormatter {
    fn default() -> Self {
        Self::new()
    }
}

const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";
const SARIF_VERSION: &str = "2.1.0";
const TOOL_NAME: &str = "style-guard";
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");
const TOOL_INFO_URI: &str = "https://github.com/doraemonkeys/style-guard";

#[derive(Serialize)]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<Run>,
}

#[derive(Serialize)]
struct Run {
    tool: Tool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
struct Tool {
    driver: ToolDriver,
}

#[derive(Serialize)]
struct ToolDriver {
    name: &'static str,
    version: &'static str,
    #[serde(rename = "informationUri")]
    information_uri: &'static str,
    rules: Vec<ReportingDescriptor>,
}

#[derive(Serialize)]
struct ReportingDescriptor {
    id: &'static str,
    name: String,
    #[serde(rename = "shortDescription")]
    short_description: MultiformatMessageString,
    #[serde(rename = "fullDescription")]
    full_description: MultiformatMessageString,
    #[serde(rename = "defaultConfiguration")]
    default_configuration: ReportingConfiguration,
}

#[derive(Serialize)]
struct ReportingConfiguration {
    level: &'static str,
}

#[derive(Serialize)]
struct MultiformatMessageString {
    text: &'static str,
}

#[derive(Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: &'static str,
    #[serde(rename = "ruleIndex")]
    rule_index: usize,
    level: &'static str,
    message: Message,
    locations: Vec<Location>,
    properties: ResultProperties,
}

#[derive(Serialize)]
struct Message {
    text: String,
}

#[derive(Serialize)]
struct Location {
    #[serde(rename = "physicalLocation")]
    physical_location: PhysicalLocation,
}

#[derive(Serialize)]
struct PhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: ArtifactLocation,
    region: Region,
}

#[derive(Serialize)]
struct ArtifactLocation {
    uri: String,
    #[serde(rename = "uriBaseId")]
    uri_base_id: &'static str,
}

#[derive(Serialize)]
struct Region {
    #[serde(rename = "startLine")]
    start_line: usize,
    #[serde(rename = "startColumn")]
    start_column: usize,
    #[serde(rename = "endLine")]
    end_line: usize,
    #[serde(rename = "endColumn")]
    end_column: usize,
}

#[derive(Serialize)]
struct ResultProperties {
    fixable: bool,
}

/// "no-hungarian-notation" -> "NoHungarianNotation"
fn pascal_case(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect()
}

impl SarifFormatter {
    fn build_rules() -> Vec<ReportingDescriptor> {
        let defaults = RuleLevels::default();
        builtin_rules()
            .iter()
            .map(|rule| {
                let level = defaults
                    .level_for(rule.name())
                    .and_then(RuleLevel::severity)
                    .map_or("none", Severity::as_str);
                ReportingDescriptor {
                    id: rule.name(),
                    name: pascal_case(rule.name()),
                    short_description: MultiformatMessageString {
                        text: rule.summary(),
                    },
                    full_description: MultiformatMessageString {
                        text: rule.explanation(),
                    },
                    default_configuration: ReportingConfiguration { level },
                }
            })
            .collect()
    }

    fn convert_diagnostic(
        report: &FileReport,
        diagnostic: &Diagnostic,
        rule_names: &[&'static str],
    ) -> SarifResult {
        let rule_index = rule_names
            .iter()
            .position(|name| *name == diagnostic.rule)
            .unwrap_or(0);

        // Convert path to URI format (forward slashes)
        let uri = report.path.display().to_string().replace('\\', "/");

        SarifResult {
            rule_id: diagnostic.rule,
            rule_index,
            level: diagnostic.severity.as_str(),
            message: Message {
                text: diagnostic.message.clone(),
            },
            locations: vec![Location {
                physical_location: PhysicalLocation {
                    artifact_location: ArtifactLocation {
                        uri,
                        uri_base_id: "%SRCROOT%",
                    },
                    region: Region {
                        start_line: diagnostic.start.line,
                        start_column: diagnostic.start.column,
                        end_line: diagnostic.end.line,
                        end_column: diagnostic.end.column,
                    },
                },
            }],
            properties: ResultProperties {
                fixable: diagnostic.is_fixable(),
            },
        }
    }
}

impl OutputFormatter for SarifFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let rule_names: Vec<&'static str> =
            builtin_rules().iter().map(|rule| rule.name()).collect();

        let results: Vec<SarifResult> = reports
            .iter()
            .flat_map(|report| {
                report
                    .diagnostics
                    .iter()
                    .map(|d| Self::convert_diagnostic(report, d, &rule_names))
            })
            .collect();

        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![Run {
                tool: Tool {
                    driver: ToolDriver {
                        name: TOOL_NAME,
                        version: TOOL_VERSION,
                        information_uri: TOOL_INFO_URI,
                        rules: Self::build_rules(),
                    },
                },
                results,
            }],
        };

        Ok(serde_json::to_string_pretty(&log)?)
    }
}

#[cfg(test)]
#[path = "sarif_tests.rs"]
mod tests;
