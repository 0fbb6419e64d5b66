use super::{Rule, RuleContext};
use crate::diagnostics::Span;

/// The banned member access, matched as raw text so minified and generated
/// sources are covered too.
const NEEDLE: &str = "constructor.name";

const MESSAGE: &str =
    "Avoid the 'constructor.name' pattern: minification mangles constructor names";

/// Node kinds whose occurrences are discarded: comment and literal interiors,
/// plus occurrences that resolve no more precisely than a statement block.
pub const DEFAULT_IGNORE_KINDS: &[&str] = &[
    "comment",
    "string",
    "string_fragment",
    "template_string",
    "regex_pattern",
    "statement_block",
];

/// Scans the raw source text for `constructor.name`. Class names do not
/// survive minification, so code keying on them breaks exactly once deployed.
pub struct NoConstructorName {
    ignore_kinds: Vec<String>,
}

impl NoConstructorName {
    #[must_use]
    pub const fn new(ignore_kinds: Vec<String>) -> Self {
        Self { ignore_kinds }
    }

    fn is_ignored_kind(&self, kind: &str) -> bool {
        self.ignore_kinds.iter().any(|k| k == kind)
    }
}

impl Default for NoConstructorName {
    fn default() -> Self {
        Self::new(
            DEFAULT_IGNORE_KINDS
                .iter()
                .map(|kind| (*kind).to_string())
                .collect(),
        )
    }
}

impl Rule for NoConstructorName {
    fn name(&self) -> &'static str {
        "no-constructor-name"
    }

    fn summary(&self) -> &'static str {
        "Forbid the minification-unsafe `constructor.name` pattern"
    }

    fn explanation(&self) -> &'static str {
        "Every occurrence of the text `constructor.name` is located in the raw \
         source, then resolved against the syntax tree. Occurrences inside \
         comments, string/template/regex literals, or other configured node \
         kinds are discarded; everything else is reported, including \
         occurrences the tree cannot resolve. Minifiers rename classes, so any \
         logic keyed on `constructor.name` silently changes behavior in \
         production builds."
    }

    fn check_source(&self, ctx: &mut RuleContext<'_>) {
        let unit = ctx.unit();
        for (start, _) in unit.text().match_indices(NEEDLE) {
            let span = Span::new(start, start + NEEDLE.len());

            // An unresolvable occurrence is kept: a missed spot in minified
            // code costs more than a false positive.
            let ignored = unit
                .node_kind_at(span)
                .is_some_and(|kind| self.is_ignored_kind(kind));
            if !ignored {
                ctx.report(span, MESSAGE);
            }
        }
    }
}

#[cfg(test)]
#[path = "constructor_name_tests.rs"]
mod tests;
