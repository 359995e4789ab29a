//! Rewriting a staged manifest's path dependency to an absolute path.
//!
//! An sdist is built later inside an isolated temporary directory, where a
//! `path = "../dep"` written relative to the repository no longer points
//! anywhere. At staging time the original repository location is still
//! known, so the path is pinned to it there.

use std::path::{Path, PathBuf};

use crate::core::{RewriteError, StagedManifest, StagingContext};

/// What a successful rewrite did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// Dependency whose path was rewritten
    pub dependency: String,

    /// The `path` value before the rewrite
    pub previous: String,

    /// The absolute path now in the manifest
    pub resolved: PathBuf,
}

impl RewriteOutcome {
    /// Whether the manifest value actually changed.
    pub fn changed(&self) -> bool {
        Path::new(&self.previous) != self.resolved
    }
}

/// Rewrite `dependencies.<dependency>.path` of the staged manifest.
///
/// The current value is resolved against `original_root` (not against the
/// staged manifest's directory) and written back as an absolute, normalized
/// path. Every check runs before the file is touched, so on error the staged
/// manifest is left exactly as it was.
pub fn rewrite_dependency_path(
    staged_manifest: &Path,
    original_root: &Path,
    dependency: &str,
) -> Result<RewriteOutcome, RewriteError> {
    let context = StagingContext::new(original_root);

    if !staged_manifest.is_file() {
        return Err(RewriteError::missing_manifest(staged_manifest));
    }
    if !context.is_absolute() {
        return Err(RewriteError::invalid_root(
            staged_manifest,
            original_root,
            "is not an absolute path",
        ));
    }

    let mut manifest = StagedManifest::load(staged_manifest)?;
    let previous = manifest.dependency_path(dependency)?.to_string();
    let resolved = context.resolve(&previous);

    tracing::debug!(
        "resolving `{}` against {}: {}",
        previous,
        context.original_root().display(),
        resolved.display()
    );

    let resolved_str = resolved.to_str().ok_or_else(|| {
        RewriteError::invalid_root(staged_manifest, original_root, "is not valid UTF-8")
    })?;
    manifest.set_dependency_path(dependency, resolved_str)?;
    manifest.save()?;

    tracing::info!(
        "pinned {}.path in {} to {}",
        dependency,
        staged_manifest.display(),
        resolved.display()
    );

    Ok(RewriteOutcome {
        dependency: dependency.to_string(),
        previous,
        resolved,
    })
}
