use super::{Rule, RuleContext};
use crate::source::IdentifierToken;

/// Type-tag prefixes that mark an identifier as Hungarian notation.
/// Membership is exact and case-sensitive.
const HUNGARIAN_PREFIXES: &[&str] = &["c", "b", "f", "p", "i", "str", "vec"];

/// An uppercase letter past this character index is treated as part of a real
/// word rather than the end of a type tag.
const MAX_PREFIX_CHARS: usize = 3;

/// Flags identifiers like `pCount` or `strMessage` whose leading characters
/// form a known type-tag prefix.
pub struct NoHungarianNotation;

impl NoHungarianNotation {
    fn hungarian_prefix(name: &str) -> Option<&str> {
        let (index, byte_offset) = name
            .char_indices()
            .enumerate()
            .find(|&(_, (_, c))| c.is_ascii_uppercase())
            .map(|(index, (byte_offset, _))| (index, byte_offset))?;

        if index > MAX_PREFIX_CHARS {
            return None;
        }

        let prefix = &name[..byte_offset];
        HUNGARIAN_PREFIXES.contains(&prefix).then_some(prefix)
    }
}

impl Rule for NoHungarianNotation {
    fn name(&self) -> &'static str {
        "no-hungarian-notation"
    }

    fn summary(&self) -> &'static str {
        "Forbid Hungarian type-tag prefixes on identifiers"
    }

    fn explanation(&self) -> &'static str {
        "Identifiers whose first uppercase letter appears within the first four \
         characters are split at that letter; if the part before it is one of the \
         type tags c, b, f, p, i, str, or vec, the identifier is flagged. Names \
         with no uppercase letter, an uppercase first letter, or a longer leading \
         word pass. JavaScript values change type freely, so encoding a type into \
         the name documents an assumption the code cannot keep."
    }

    fn check_identifier(&self, identifier: &IdentifierToken, ctx: &mut RuleContext<'_>) {
        if Self::hungarian_prefix(&identifier.name).is_some() {
            ctx.report(
                identifier.span,
                format!(
                    "Avoid Hungarian notation in identifier '{}'",
                    identifier.name
                ),
            );
        }
    }
}

#[cfg(test)]
#[path = "hungarian_tests.rs"]
mod tests;
