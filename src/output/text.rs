use std::fmt::Write;

use crate::diagnostics::{Diagnostic, FileReport};
use crate::error::Result;

use super::OutputFormatter;

/// Whether the text report gets ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Colorize when stdout is a TTY and `NO_COLOR` is unset
    #[default]
    Auto,
    /// Force colors on
    Always,
    /// Disable colors entirely
    Never,
}

/// Escape sequences used by the report.
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
    fix_hint: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        let use_colors = Self::should_use_colors(mode);
        Self {
            use_colors,
            verbose,
            fix_hint: false,
        }
    }

    /// Enable the trailing `--fix` hint when fixable diagnostics remain.
    #[must_use]
    pub const fn with_fix_hint(mut self, show: bool) -> Self {
        self.fix_hint = show;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            // NO_COLOR with any value wins over TTY detection.
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none()
                    && std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn severity_color(diagnostic: &Diagnostic) -> &'static str {
        if diagnostic.is_error() {
            ansi::RED
        } else {
            ansi::YELLOW
        }
    }

    fn colorize_with_color(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    /// One file header line, then one aligned row per diagnostic.
    fn format_report(&self, report: &FileReport, output: &mut String) {
        let _ = writeln!(output, "{}", report.path.display());

        let loc_width = report
            .diagnostics
            .iter()
            .map(|d| format!("{}:{}", d.start.line, d.start.column).len())
            .max()
            .unwrap_or(0);
        let sev_width = report
            .diagnostics
            .iter()
            .map(|d| d.severity.as_str().len())
            .max()
            .unwrap_or(0);

        for diagnostic in &report.diagnostics {
            let loc = format!("{}:{}", diagnostic.start.line, diagnostic.start.column);
            let severity = format!("{:<sev_width$}", diagnostic.severity.as_str());
            let severity = self.colorize_with_color(&severity, Self::severity_color(diagnostic));

            let _ = writeln!(
                output,
                "  {loc:<loc_width$}  {severity}  {}  {}",
                diagnostic.rule, diagnostic.message
            );
        }
    }

    fn format_summary(
        &self,
        total: usize,
        errors: usize,
        warnings: usize,
        fixable: usize,
    ) -> String {
        let errors_str = self.colorize_with_color(&errors.to_string(), ansi::RED);
        let warnings_str = self.colorize_with_color(&warnings.to_string(), ansi::YELLOW);

        let mut summary = format!(
            "Summary: {total} files checked, {errors_str} errors, {warnings_str} warnings"
        );

        if fixable > 0 {
            let _ = write!(summary, " ({fixable} fixable)");
        }

        summary
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = String::new();

        for report in reports.iter().filter(|r| !r.is_clean()) {
            self.format_report(report, &mut output);
            output.push('\n');
        }

        // Clean files appear only at -v and up.
        if self.verbose >= 1 {
            let clean: Vec<_> = reports.iter().filter(|r| r.is_clean()).collect();
            for report in &clean {
                let check = self.colorize_with_color("✓", ansi::GREEN);
                let _ = writeln!(output, "{check} {}", report.path.display());
            }
            if !clean.is_empty() {
                output.push('\n');
            }
        }

        let errors: usize = reports.iter().map(FileReport::error_count).sum();
        let warnings: usize = reports.iter().map(FileReport::warning_count).sum();
        let fixable: usize = reports.iter().map(FileReport::fixable_count).sum();

        let summary = self.format_summary(reports.len(), errors, warnings, fixable);
        let _ = writeln!(output, "{summary}");

        if self.fix_hint && fixable > 0 {
            let _ = writeln!(output, "Run with --fix to apply {fixable} automatic fixes.");
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
