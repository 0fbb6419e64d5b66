mod block_comments;
mod constructor_name;
mod context;
mod hungarian;
mod separators;

pub use block_comments::StarredBlockComments;
pub use constructor_name::{DEFAULT_IGNORE_KINDS, NoConstructorName};
pub use context::RuleContext;
pub use hungarian::NoHungarianNotation;
pub use separators::NoCommentSeparators;

use indexmap::IndexMap;

use crate::config::Config;
use crate::diagnostics::Severity;
use crate::error::{Result, StyleGuardError};
use crate::source::{CommentToken, IdentifierToken};

/// A style rule over one parsed file.
///
/// Hooks default to no-ops so each rule implements only the token streams it
/// inspects. The driver offers every identifier and comment to every enabled
/// rule in one traversal, then runs the whole-unit hooks.
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    /// One-line summary for rule listings.
    fn summary(&self) -> &'static str;

    /// Longer description shown by `rules <name>`.
    fn explanation(&self) -> &'static str;

    /// Whether the rule attaches automatic fixes to its diagnostics.
    fn fixable(&self) -> bool {
        false
    }

    fn check_identifier(&self, _identifier: &IdentifierToken, _ctx: &mut RuleContext<'_>) {}

    fn check_comment(&self, _comment: &CommentToken, _ctx: &mut RuleContext<'_>) {}

    fn check_source(&self, _ctx: &mut RuleContext<'_>) {}
}

/// All built-in rules with default options, in registry order.
#[must_use]
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(NoHungarianNotation),
        Box::new(NoCommentSeparators),
        Box::new(StarredBlockComments),
        Box::new(NoConstructorName::default()),
    ]
}

pub struct ConfiguredRule {
    pub rule: Box<dyn Rule>,
    pub severity: Severity,
}

/// The enabled rules in registry order, keyed by name.
pub struct RuleSet {
    rules: IndexMap<&'static str, ConfiguredRule>,
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl RuleSet {
    /// Builds the enabled rule set from configuration.
    ///
    /// # Errors
    /// Returns an error if every rule is turned off.
    pub fn from_config(config: &Config) -> Result<Self> {
        let levels = &config.rules;
        let entries: [(Box<dyn Rule>, Option<Severity>); 4] = [
            (
                Box::new(NoHungarianNotation),
                levels.no_hungarian_notation.severity(),
            ),
            (
                Box::new(NoCommentSeparators),
                levels.no_comment_separators.severity(),
            ),
            (
                Box::new(StarredBlockComments),
                levels.starred_block_comments.severity(),
            ),
            (
                Box::new(NoConstructorName::new(
                    config.constructor_name.ignore_kinds.clone(),
                )),
                levels.no_constructor_name.severity(),
            ),
        ];

        let mut rules = IndexMap::new();
        for (rule, level) in entries {
            let Some(severity) = level else {
                continue;
            };
            rules.insert(rule.name(), ConfiguredRule { rule, severity });
        }

        if rules.is_empty() {
            return Err(StyleGuardError::Config(
                "all rules are turned off; nothing to check".to_string(),
            ));
        }

        Ok(Self { rules })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfiguredRule> {
        self.rules.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ConfiguredRule> {
        self.rules.get(name)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
