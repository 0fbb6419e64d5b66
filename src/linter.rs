use std::fs;
use std::path::Path;

use crate::diagnostics::{Diagnostic, FileReport, Fix};
use crate::error::{Result, StyleGuardError};
use crate::fixer::apply_fixes;
use crate::rules::{RuleContext, RuleSet};
use crate::source::SourceUnit;

/// Drives the enabled rules over parsed files.
pub struct Linter {
    rules: RuleSet,
}

impl Linter {
    #[must_use]
    pub const fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Runs every enabled rule over one parsed unit.
    ///
    /// A single traversal offers each identifier and comment to every rule,
    /// then the whole-unit hooks run. Diagnostics come back sorted by span;
    /// rules sharing a span keep registry order.
    #[must_use]
    pub fn lint_source(&self, unit: &SourceUnit) -> Vec<Diagnostic> {
        let mut contexts: Vec<_> = self
            .rules
            .iter()
            .map(|cr| (cr, RuleContext::new(unit, cr.rule.name(), cr.severity)))
            .collect();

        for identifier in unit.identifiers() {
            for (cr, ctx) in &mut contexts {
                cr.rule.check_identifier(identifier, ctx);
            }
        }

        for comment in unit.comments() {
            for (cr, ctx) in &mut contexts {
                cr.rule.check_comment(comment, ctx);
            }
        }

        for (cr, ctx) in &mut contexts {
            cr.rule.check_source(ctx);
        }

        let mut diagnostics: Vec<Diagnostic> = contexts
            .into_iter()
            .flat_map(|(_, ctx)| ctx.into_diagnostics())
            .collect();
        diagnostics.sort_by_key(|d| (d.span.start, d.span.end));
        diagnostics
    }

    /// Reads, parses, and lints one file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the parser yields no
    /// tree. Files with syntax errors still lint (best-effort).
    pub fn lint_file(&self, path: &Path) -> Result<FileReport> {
        let text = fs::read_to_string(path).map_err(|source| StyleGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let unit = SourceUnit::parse(text)?;
        Ok(FileReport::new(path.to_path_buf(), self.lint_source(&unit)))
    }

    /// Lints text and applies every available fix.
    ///
    /// Returns the fixed text and the number of fixes applied; the text comes
    /// back unchanged when nothing is fixable.
    ///
    /// # Errors
    /// Returns an error if parsing fails.
    pub fn fix_source(&self, text: &str) -> Result<(String, usize)> {
        let unit = SourceUnit::parse(text.to_string())?;
        let fixes: Vec<Fix> = self
            .lint_source(&unit)
            .into_iter()
            .filter_map(|d| d.fix)
            .collect();
        if fixes.is_empty() {
            return Ok((text.to_string(), 0));
        }
        let applied = fixes.len();
        Ok((apply_fixes(text, &fixes), applied))
    }

    /// Lints `path`, writes any fixes back, and re-lints the fixed text.
    ///
    /// Returns the post-fix report and the number of fixes applied. The file
    /// is rewritten only when at least one fix applies.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or written back.
    pub fn fix_file(&self, path: &Path) -> Result<(FileReport, usize)> {
        let text = fs::read_to_string(path).map_err(|source| StyleGuardError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let unit = SourceUnit::parse(text)?;
        let diagnostics = self.lint_source(&unit);

        let fixes: Vec<Fix> = diagnostics.iter().filter_map(|d| d.fix.clone()).collect();
        if fixes.is_empty() {
            return Ok((FileReport::new(path.to_path_buf(), diagnostics), 0));
        }

        let applied = fixes.len();
        let fixed = apply_fixes(unit.text(), &fixes);
        fs::write(path, &fixed)?;

        let unit = SourceUnit::parse(fixed)?;
        Ok((
            FileReport::new(path.to_path_buf(), self.lint_source(&unit)),
            applied,
        ))
    }
}

#[cfg(test)]
#[path = "linter_tests.rs"]
mod tests;
