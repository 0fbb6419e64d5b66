use super::*;
use crate::diagnostics::{Diagnostic, Severity};
use crate::source::SourceUnit;

fn check(source: &str) -> Vec<Diagnostic> {
    let unit = SourceUnit::parse(source.to_string()).unwrap();
    let rule = NoHungarianNotation;
    let mut ctx = RuleContext::new(&unit, rule.name(), Severity::Error);
    for identifier in unit.identifiers() {
        rule.check_identifier(identifier, &mut ctx);
    }
    ctx.into_diagnostics()
}

#[test]
fn detects_every_known_prefix() {
    assert_eq!(NoHungarianNotation::hungarian_prefix("cValue"), Some("c"));
    assert_eq!(NoHungarianNotation::hungarian_prefix("bEnabled"), Some("b"));
    assert_eq!(NoHungarianNotation::hungarian_prefix("fRatio"), Some("f"));
    assert_eq!(NoHungarianNotation::hungarian_prefix("pCount"), Some("p"));
    assert_eq!(NoHungarianNotation::hungarian_prefix("iIndex"), Some("i"));
    assert_eq!(NoHungarianNotation::hungarian_prefix("strName"), Some("str"));
    assert_eq!(
        NoHungarianNotation::hungarian_prefix("vecItems"),
        Some("vec")
    );
}

#[test]
fn ignores_names_without_an_uppercase_letter() {
    assert_eq!(NoHungarianNotation::hungarian_prefix("count"), None);
    assert_eq!(NoHungarianNotation::hungarian_prefix("string"), None);
    assert_eq!(NoHungarianNotation::hungarian_prefix("i"), None);
}

#[test]
fn ignores_names_starting_with_an_uppercase_letter() {
    assert_eq!(NoHungarianNotation::hungarian_prefix("Parser"), None);
    assert_eq!(NoHungarianNotation::hungarian_prefix("IIFE"), None);
}

#[test]
fn ignores_camel_case_words_longer_than_a_tag() {
    assert_eq!(NoHungarianNotation::hungarian_prefix("parseInt"), None);
    assert_eq!(NoHungarianNotation::hungarian_prefix("listItems"), None);
    assert_eq!(NoHungarianNotation::hungarian_prefix("vectorSum"), None);
}

#[test]
fn ignores_short_words_outside_the_tag_set() {
    // "to" and "my" split like tags but are not in the set.
    assert_eq!(NoHungarianNotation::hungarian_prefix("toUpper"), None);
    assert_eq!(NoHungarianNotation::hungarian_prefix("myValue"), None);
}

#[test]
fn matching_is_case_sensitive() {
    assert_eq!(NoHungarianNotation::hungarian_prefix("STRName"), None);
}

#[test]
fn flags_hungarian_variable_declarations() {
    let diagnostics = check("let pCount = 1;");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule, "no-hungarian-notation");
    assert_eq!(
        diagnostics[0].message,
        "Avoid Hungarian notation in identifier 'pCount'"
    );
}

#[test]
fn flags_hungarian_property_names() {
    let diagnostics = check("config.strLabel = 'x';");
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("strLabel"));
}

#[test]
fn flags_hungarian_function_parameters() {
    let diagnostics = check("function f(iTotal) { return iTotal; }");
    // Declaration and the use inside the body.
    assert_eq!(diagnostics.len(), 2);
}

#[test]
fn clean_code_produces_no_diagnostics() {
    let diagnostics = check("function add(first, second) { return first + second; }");
    assert!(diagnostics.is_empty());
}

#[test]
fn diagnostic_span_covers_the_identifier() {
    let source = "let x = 1;\nlet bReady = true;\n";
    let diagnostics = check(source);
    assert_eq!(diagnostics.len(), 1);

    let d = &diagnostics[0];
    assert_eq!(&source[d.span.start..d.span.end], "bReady");
    assert_eq!(d.start.line, 2);
    assert_eq!(d.start.column, 5);
}
