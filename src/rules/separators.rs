use super::{Rule, RuleContext};
use crate::source::CommentToken;

/// A decoration run must be strictly longer than this to count as a separator.
const RUN_THRESHOLD: usize = 10;

/// The longest run must cover strictly more than this share of the body.
const RATIO_THRESHOLD: f64 = 0.75;

/// Flags comments that are decorative separator lines, like
/// `/***************/` or a row of slashes. Comments carrying any real text
/// are never flagged.
pub struct NoCommentSeparators;

impl NoCommentSeparators {
    /// Classifies each body character as whitespace, decoration (`*` or `/`)
    /// or other. Any other character means the comment says something.
    fn is_separator(body: &str) -> bool {
        let mut total = 0usize;
        let mut run = 0usize;
        let mut max_run = 0usize;

        for c in body.chars() {
            total += 1;
            match c {
                '*' | '/' => {
                    run += 1;
                    max_run = max_run.max(run);
                }
                ' ' | '\t' | '\r' | '\n' => run = 0,
                _ => return false,
            }
        }

        if max_run <= RUN_THRESHOLD {
            return false;
        }

        #[allow(clippy::cast_precision_loss)]
        let ratio = max_run as f64 / total as f64;
        ratio > RATIO_THRESHOLD
    }
}

impl Rule for NoCommentSeparators {
    fn name(&self) -> &'static str {
        "no-comment-separators"
    }

    fn summary(&self) -> &'static str {
        "Forbid comments used as decorative separator lines"
    }

    fn explanation(&self) -> &'static str {
        "A comment whose body consists only of whitespace, asterisks, and \
         slashes, with an unbroken decoration run longer than 10 characters \
         covering more than three quarters of the body, is a visual separator. \
         Separators restate structure the code already has; sections that need \
         dividers usually want to be separate files. Shebang lines are never \
         considered."
    }

    fn check_comment(&self, comment: &CommentToken, ctx: &mut RuleContext<'_>) {
        if comment.is_shebang() {
            return;
        }
        if Self::is_separator(&comment.body) {
            ctx.report(comment.span, "Avoid using comments as separators");
        }
    }
}

#[cfg(test)]
#[path = "separators_tests.rs"]
mod tests;
