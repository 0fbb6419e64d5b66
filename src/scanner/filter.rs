use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, StyleGuardError};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;

    /// Like [`FileFilter::should_include`], with the scan root available so
    /// patterns can also match against the root-relative path.
    fn should_include_in(&self, path: &Path, root: &Path) -> bool {
        let _ = root;
        self.should_include(path)
    }
}

/// Extension and glob based filter.
///
/// A path is accepted when its extension is in the configured set (empty set
/// accepts everything) and no exclude pattern matches it. Re-include patterns
/// win over excludes, so single paths can be carved back out of a broad
/// exclude like `**/dist/**`.
pub struct GlobFilter {
    extensions: Vec<String>,
    exclude: GlobSet,
    include: GlobSet,
}

impl GlobFilter {
    /// Creates a filter from extension names, exclude globs, and re-include
    /// globs. Extensions match case-insensitively.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid glob syntax.
    pub fn new(
        extensions: Vec<String>,
        exclude_patterns: &[String],
        include_paths: &[String],
    ) -> Result<Self> {
        Ok(Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.to_ascii_lowercase())
                .collect(),
            exclude: build_glob_set(exclude_patterns)?,
            include: build_glob_set(include_paths)?,
        })
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|e| *e == ext)
            })
    }

    fn is_excluded(&self, path: &Path, root: Option<&Path>) -> bool {
        matches_any(&self.exclude, path, root) && !matches_any(&self.include, path, root)
    }
}

/// Matches `path` against `set`, also trying the root-relative form so
/// patterns like `dist/**` work when the walk starts from an absolute root.
fn matches_any(set: &GlobSet, path: &Path, root: Option<&Path>) -> bool {
    if set.is_match(path) {
        return true;
    }
    root.and_then(|root| path.strip_prefix(root).ok())
        .is_some_and(|relative| set.is_match(relative))
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| StyleGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|source| StyleGuardError::InvalidPattern {
            pattern: "combined patterns".to_string(),
            source,
        })
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && !self.is_excluded(path, None)
    }

    fn should_include_in(&self, path: &Path, root: &Path) -> bool {
        self.has_valid_extension(path) && !self.is_excluded(path, Some(root))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
