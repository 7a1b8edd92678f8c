//! Exclusion filter
//!
//! Regular expressions are searched (unanchored) in the absolute path of each
//! visited node. A match on a file skips that file; a match on a directory
//! skips the whole subtree.

use regex::Regex;
use std::path::Path;

use crate::error::PackError;

/// What the walker should do with a visited node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Keep,
    SkipFile,
    SkipSubtree,
}

#[derive(Debug, Clone, Default)]
pub struct Filter {
    patterns: Vec<Regex>,
}

impl Filter {
    /// Compile every pattern, failing on the first invalid one.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, PackError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let pattern = p.as_ref();
                Regex::new(pattern).map_err(|source| PackError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { patterns })
    }

    pub fn decide(&self, path: &Path, is_dir: bool) -> Decision {
        let path = path.to_string_lossy();
        if !self.patterns.iter().any(|re| re.is_match(&path)) {
            Decision::Keep
        } else if is_dir {
            Decision::SkipSubtree
        } else {
            Decision::SkipFile
        }
    }
}
