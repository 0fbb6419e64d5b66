mod line_index;
mod tokens;

pub use line_index::LineIndex;
pub use tokens::{CommentKind, CommentToken, IdentifierToken};

use std::sync::OnceLock;

use tree_sitter::{Parser, Query, QueryCursor, StreamingIterator, Tree};

use crate::diagnostics::{LineCol, Span};
use crate::error::{Result, StyleGuardError};

/// One query collects every token stream the rules consume, so extraction is
/// a single pass over the tree.
const TOKEN_S_EXPR: &str = r#"
    [
      (identifier)
      (property_identifier)
      (shorthand_property_identifier)
      (shorthand_property_identifier_pattern)
      (statement_identifier)
    ] @identifier

    (comment) @comment

    (hash_bang_line) @shebang
"#;

static TOKEN_QUERY: OnceLock<Query> = OnceLock::new();

fn token_query() -> &'static Query {
    TOKEN_QUERY.get_or_init(|| {
        Query::new(&tree_sitter_javascript::LANGUAGE.into(), TOKEN_S_EXPR)
            .expect("token query is a hardcoded constant and must compile")
    })
}

/// A parsed file: raw text, syntax tree, extracted tokens, and a line index.
///
/// Parsing is best-effort. Syntax errors become ERROR nodes in the tree, so
/// damaged files still produce tokens for the regions that parse.
pub struct SourceUnit {
    text: String,
    tree: Tree,
    line_index: LineIndex,
    identifiers: Vec<IdentifierToken>,
    comments: Vec<CommentToken>,
}

impl SourceUnit {
    /// Parses JavaScript source text.
    ///
    /// A fresh parser is constructed per call; parsers are not shareable
    /// across threads, and units are built inside parallel workers.
    ///
    /// # Errors
    /// Returns an error if the grammar fails to load or the parser yields no
    /// tree.
    pub fn parse(text: String) -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_javascript::LANGUAGE.into())
            .map_err(|e| {
                StyleGuardError::Parse(format!("failed to load JavaScript grammar: {e}"))
            })?;
        let tree = parser
            .parse(text.as_bytes(), None)
            .ok_or_else(|| StyleGuardError::Parse("parser produced no syntax tree".to_string()))?;

        let (identifiers, comments) = extract_tokens(&tree, &text);
        let line_index = LineIndex::new(&text);

        Ok(Self {
            text,
            tree,
            line_index,
            identifiers,
            comments,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn identifiers(&self) -> &[IdentifierToken] {
        &self.identifiers
    }

    #[must_use]
    pub fn comments(&self) -> &[CommentToken] {
        &self.comments
    }

    /// Maps a byte offset to a 1-based line/column position.
    #[must_use]
    pub fn line_col(&self, offset: usize) -> LineCol {
        self.line_index.line_col(&self.text, offset)
    }

    /// Kind of the most specific node covering `span`, if any.
    ///
    /// Positions inside comments resolve to `comment`, inside string literals
    /// to `string_fragment`, inside template literals to `template_string`.
    #[must_use]
    pub fn node_kind_at(&self, span: Span) -> Option<&'static str> {
        self.tree
            .root_node()
            .descendant_for_byte_range(span.start, span.end)
            .map(|node| node.kind())
    }
}

fn extract_tokens(tree: &Tree, text: &str) -> (Vec<IdentifierToken>, Vec<CommentToken>) {
    let query = token_query();
    let capture_names = query.capture_names();
    let source = text.as_bytes();

    let mut identifiers = Vec::new();
    let mut comments = Vec::new();

    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(query, tree.root_node(), source);
    while let Some(m) = matches.next() {
        for capture in m.captures {
            let node = capture.node;
            let span = Span::new(node.start_byte(), node.end_byte());
            let Ok(raw) = node.utf8_text(source) else {
                continue;
            };
            match capture_names[capture.index as usize] {
                "identifier" => identifiers.push(IdentifierToken {
                    name: raw.to_string(),
                    span,
                }),
                "comment" => comments.push(CommentToken::from_comment(raw, span)),
                "shebang" => comments.push(CommentToken::from_shebang(raw, span)),
                _ => {}
            }
        }
    }

    // Query match order interleaves patterns; rules expect source order.
    identifiers.sort_by_key(|t| t.span.start);
    comments.sort_by_key(|t| t.span.start);

    (identifiers, comments)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
