use crate::diagnostics::LineCol;

/// Precomputed byte offsets of line starts, for offset to line/column mapping.
///
/// Only `\n` terminates a line; a `\r` in `\r\n` counts as a character on the
/// line it ends.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Maps a byte offset to a 1-based line and column. Columns count
    /// characters. `offset` must lie on a character boundary of `text`;
    /// offsets past the end clamp to the end.
    #[must_use]
    pub fn line_col(&self, text: &str, offset: usize) -> LineCol {
        let offset = offset.min(text.len());
        let line_idx = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line_idx];
        let column = text[line_start..offset].chars().count() + 1;
        LineCol {
            line: line_idx + 1,
            column,
        }
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
#[path = "line_index_tests.rs"]
mod tests;
