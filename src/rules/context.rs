use crate::diagnostics::{Diagnostic, Fix, Severity, Span};
use crate::source::SourceUnit;

/// Reporting handle scoped to one (file, rule, severity) combination.
///
/// Rules report violations through the context rather than constructing
/// diagnostics themselves, so severity assignment and line/column resolution
/// stay in one place.
pub struct RuleContext<'u> {
    unit: &'u SourceUnit,
    rule: &'static str,
    severity: Severity,
    diagnostics: Vec<Diagnostic>,
}

impl<'u> RuleContext<'u> {
    #[must_use]
    pub const fn new(unit: &'u SourceUnit, rule: &'static str, severity: Severity) -> Self {
        Self {
            unit,
            rule,
            severity,
            diagnostics: Vec::new(),
        }
    }

    #[must_use]
    pub const fn unit(&self) -> &'u SourceUnit {
        self.unit
    }

    pub fn report(&mut self, span: Span, message: impl Into<String>) {
        self.push(span, message.into(), None);
    }

    pub fn report_with_fix(&mut self, span: Span, message: impl Into<String>, fix: Fix) {
        self.push(span, message.into(), Some(fix));
    }

    fn push(&mut self, span: Span, message: String, fix: Option<Fix>) {
        self.diagnostics.push(Diagnostic {
            rule: self.rule,
            severity: self.severity,
            message,
            span,
            start: self.unit.line_col(span.start),
            end: self.unit.line_col(span.end),
            fix,
        });
    }

    pub(crate) fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
