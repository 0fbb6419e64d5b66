use super::*;

fn parse(text: &str) -> SourceUnit {
    SourceUnit::parse(text.to_string()).unwrap()
}

fn identifier_names(unit: &SourceUnit) -> Vec<&str> {
    unit.identifiers().iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn extracts_identifiers_in_source_order() {
    let unit = parse("let alpha = beta + gamma;");
    assert_eq!(identifier_names(&unit), ["alpha", "beta", "gamma"]);
}

#[test]
fn extracts_property_identifiers() {
    let unit = parse("obj.pValue = 1;");
    let names = identifier_names(&unit);
    assert!(names.contains(&"obj"));
    assert!(names.contains(&"pValue"));
}

#[test]
fn extracts_shorthand_object_properties() {
    let unit = parse("const o = { strName };");
    assert!(identifier_names(&unit).contains(&"strName"));
}

#[test]
fn extracts_shorthand_destructuring_patterns() {
    let unit = parse("const { iCount } = obj;");
    assert!(identifier_names(&unit).contains(&"iCount"));
}

#[test]
fn extracts_statement_labels() {
    let unit = parse("outer: for (;;) { break outer; }");
    assert!(identifier_names(&unit).contains(&"outer"));
}

#[test]
fn extracts_line_and_block_comments_in_order() {
    let unit = parse("// one\nlet a;\n/* two */\n");
    let comments = unit.comments();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].kind, CommentKind::Line);
    assert_eq!(comments[0].body, " one");
    assert_eq!(comments[1].kind, CommentKind::Block);
    assert_eq!(comments[1].body, " two ");
}

#[test]
fn extracts_the_shebang_as_a_comment_token() {
    let unit = parse("#!/usr/bin/env node\nlet a;\n");
    let comments = unit.comments();
    assert_eq!(comments.len(), 1);
    assert!(comments[0].is_shebang());
    assert_eq!(comments[0].body, "/usr/bin/env node");
}

#[test]
fn spans_index_back_into_the_raw_text() {
    let text = "let count = 1; // note";
    let unit = parse(text);

    let ident = &unit.identifiers()[0];
    assert_eq!(&text[ident.span.start..ident.span.end], "count");

    let comment = &unit.comments()[0];
    assert_eq!(&text[comment.span.start..comment.span.end], "// note");
}

#[test]
fn damaged_source_still_produces_tokens() {
    // Unbalanced paren leaves an ERROR node in the tree.
    let unit = parse("function f( { let pCount = 1;");
    assert!(unit.identifiers().iter().any(|t| t.name == "pCount"));
}

#[test]
fn line_col_is_one_based() {
    let unit = parse("let a;\nlet b;\n");
    let b = unit.identifiers().iter().find(|t| t.name == "b").unwrap();
    let pos = unit.line_col(b.span.start);
    assert_eq!(pos.line, 2);
    assert_eq!(pos.column, 5);
}

#[test]
fn node_kind_at_resolves_string_interiors() {
    let text = "let s = \"constructor.name\";";
    let unit = parse(text);

    let start = text.find("constructor").unwrap();
    let kind = unit.node_kind_at(Span::new(start, start + 16));
    assert_eq!(kind, Some("string_fragment"));
}

#[test]
fn node_kind_at_resolves_comment_interiors() {
    let text = "// constructor.name\nlet a;";
    let unit = parse(text);

    let start = text.find("constructor").unwrap();
    let kind = unit.node_kind_at(Span::new(start, start + 16));
    assert_eq!(kind, Some("comment"));
}

#[test]
fn node_kind_at_resolves_member_expressions() {
    let text = "if (err.constructor.name === 'x') {}";
    let unit = parse(text);

    let start = text.find("constructor").unwrap();
    let kind = unit.node_kind_at(Span::new(start, start + 16));
    assert_eq!(kind, Some("member_expression"));
}

#[test]
fn text_returns_the_input_verbatim() {
    let text = "let a = 1;\n";
    let unit = parse(text);
    assert_eq!(unit.text(), text);
}
