use crate::diagnostics::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Line,
    Block,
    Shebang,
}

/// A comment with its delimiters stripped from the body.
///
/// The span covers the whole comment including delimiters. The body is the
/// text after `//` for line comments, between `/*` and `*/` for block
/// comments, and after `#!` for shebang lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentToken {
    pub kind: CommentKind,
    pub body: String,
    pub span: Span,
}

impl CommentToken {
    /// Builds a token from raw comment text (delimiters included).
    pub(crate) fn from_comment(raw: &str, span: Span) -> Self {
        if let Some(rest) = raw.strip_prefix("/*") {
            let body = rest.strip_suffix("*/").unwrap_or(rest);
            Self {
                kind: CommentKind::Block,
                body: body.to_string(),
                span,
            }
        } else {
            let body = raw.strip_prefix("//").unwrap_or(raw);
            Self {
                kind: CommentKind::Line,
                body: body.to_string(),
                span,
            }
        }
    }

    pub(crate) fn from_shebang(raw: &str, span: Span) -> Self {
        let body = raw.strip_prefix("#!").unwrap_or(raw);
        Self {
            kind: CommentKind::Shebang,
            body: body.to_string(),
            span,
        }
    }

    #[must_use]
    pub const fn is_block(&self) -> bool {
        matches!(self.kind, CommentKind::Block)
    }

    #[must_use]
    pub const fn is_shebang(&self) -> bool {
        matches!(self.kind, CommentKind::Shebang)
    }
}

/// An identifier-like leaf: plain identifiers, property names, shorthand
/// object properties, and statement labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierToken {
    pub name: String,
    pub span: Span,
}

#[cfg(test)]
#[path = "tokens_tests.rs"]
mod tests;
