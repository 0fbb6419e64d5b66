use super::{Rule, RuleContext};
use crate::diagnostics::Fix;
use crate::source::CommentToken;

/// Suppression directives are exempt when the marker starts exactly at body
/// character index 1, i.e. `/* eslint-disable ... */`.
const DISABLE_MARKER: &str = "eslint-disable";

/// Requires block comments to open in the starred style: `/**` followed by a
/// newline. Offers an automatic fix that inserts the missing star (and a
/// newline when the comment opens inline).
pub struct StarredBlockComments;

impl StarredBlockComments {
    fn is_disable_directive(body: &str) -> bool {
        body.char_indices()
            .nth(1)
            .is_some_and(|(offset, _)| body[offset..].starts_with(DISABLE_MARKER))
    }

    /// The signature is a `*` as the first body character and a line break as
    /// the second.
    fn has_starred_signature(body: &str) -> bool {
        let mut chars = body.chars();
        chars.next() == Some('*') && matches!(chars.next(), Some('\n' | '\r'))
    }
}

impl Rule for StarredBlockComments {
    fn name(&self) -> &'static str {
        "starred-block-comments"
    }

    fn summary(&self) -> &'static str {
        "Require block comments to open with `/**` and a newline"
    }

    fn explanation(&self) -> &'static str {
        "Block comments must open with `/**` immediately followed by a line \
         break, matching the starred-block shape documentation tooling expects. \
         The fix inserts a star after the opening delimiter, plus a newline when \
         the comment text starts on the opening line, so one application always \
         reaches the accepted shape. Suppression directives (`/* eslint-disable \
         ... */`) are exempt. Line comments are not covered."
    }

    fn fixable(&self) -> bool {
        true
    }

    fn check_comment(&self, comment: &CommentToken, ctx: &mut RuleContext<'_>) {
        if !comment.is_block() || Self::is_disable_directive(&comment.body) {
            return;
        }
        if Self::has_starred_signature(&comment.body) {
            return;
        }

        // A bare `*` only reaches the signature when a line break already
        // follows; otherwise the break must come with it.
        let insert = if comment.body.starts_with(['\n', '\r']) {
            "*"
        } else {
            "*\n"
        };
        let fix = Fix::insert_before(comment.span.start + 2, insert);
        ctx.report_with_fix(
            comment.span,
            "Use block comments in the starred style",
            fix,
        );
    }
}

#[cfg(test)]
#[path = "block_comments_tests.rs"]
mod tests;
