use crate::diagnostics::Fix;

/// Applies insertion fixes to `text` in one splice pass.
///
/// Fixes are ordered by offset; equal offsets keep collection order. Offsets
/// must lie on character boundaries. Because fixes never delete or replace
/// text, a whole pass's worth composes without re-running analysis.
#[must_use]
pub fn apply_fixes(text: &str, fixes: &[Fix]) -> String {
    let mut ordered: Vec<&Fix> = fixes.iter().collect();
    ordered.sort_by_key(|fix| fix.offset);

    let added: usize = ordered.iter().map(|fix| fix.text.len()).sum();
    let mut out = String::with_capacity(text.len() + added);
    let mut cursor = 0;
    for fix in ordered {
        let offset = fix.offset.min(text.len());
        out.push_str(&text[cursor..offset]);
        out.push_str(&fix.text);
        cursor = offset;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
#[path = "fixer_tests.rs"]
mod tests;
