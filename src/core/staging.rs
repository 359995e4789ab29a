//! Where a staged release tree came from.
//!
//! Paths in the manifest were written relative to the original repository,
//! so they are resolved against that location, never against the staged
//! copy.

use std::path::{Path, PathBuf};

use crate::util::fs::normalize_lexically;

/// The original (non-temporary) repository root of a staged tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingContext {
    original_root: PathBuf,
}

impl StagingContext {
    /// Create a context for the given original repository root.
    pub fn new(original_root: impl Into<PathBuf>) -> Self {
        StagingContext {
            original_root: original_root.into(),
        }
    }

    /// The original repository root.
    pub fn original_root(&self) -> &Path {
        &self.original_root
    }

    /// Whether the root can anchor an absolute resolution.
    pub fn is_absolute(&self) -> bool {
        self.original_root.is_absolute()
    }

    /// Resolve a manifest path against the original root.
    ///
    /// The result is lexically normalized. An already absolute `raw` replaces
    /// the root and is only normalized.
    pub fn resolve(&self, raw: impl AsRef<Path>) -> PathBuf {
        normalize_lexically(&self.original_root.join(raw))
    }
}
