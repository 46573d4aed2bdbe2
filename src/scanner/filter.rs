use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, SmellGuardError};

/// Decides whether a discovered file takes part in a scan.
pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Extension allowlist plus glob-based skip rules (vendor and build
/// directories, generated files, user-supplied excludes).
#[derive(Debug)]
pub struct GlobFilter {
    extensions: Vec<String>,
    skip_patterns: GlobSet,
}

impl GlobFilter {
    /// Build a filter from an extension set and skip-pattern globs.
    ///
    /// # Errors
    /// Returns an error if any skip pattern is not a valid glob.
    pub fn new<S: AsRef<str>, P: AsRef<str>>(extensions: &[S], skip_patterns: &[P]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in skip_patterns {
            let glob =
                Glob::new(pattern.as_ref()).map_err(|e| SmellGuardError::InvalidPattern {
                    pattern: pattern.as_ref().to_string(),
                    source: e,
                })?;
            builder.add(glob);
        }
        let skip_patterns = builder.build().map_err(|e| SmellGuardError::InvalidPattern {
            pattern: "combined patterns".to_string(),
            source: e,
        })?;

        Ok(Self {
            extensions: extensions.iter().map(|s| s.as_ref().to_string()).collect(),
            skip_patterns,
        })
    }

    fn has_candidate_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn is_skipped(&self, path: &Path) -> bool {
        self.skip_patterns.is_match(path)
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_candidate_extension(path) && !self.is_skipped(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
