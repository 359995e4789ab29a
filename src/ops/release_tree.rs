//! Staging a release tree for a source distribution.
//!
//! Copies the distributable files of a repository into `base_dir`, then pins
//! the staged manifest's path dependency to the original repository
//! location. Turning the tree into an archive is left to the caller.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::core::{RewriteError, MANIFEST_NAME};
use crate::ops::rewrite::{rewrite_dependency_path, RewriteOutcome};
use crate::util::fs;

/// Default patterns for files that go into the release tree.
pub const DEFAULT_INCLUDE: &[&str] = &["Cargo.toml", "Cargo.lock", "src"];

/// Options for staging a release tree.
#[derive(Debug, Clone)]
pub struct StageOptions {
    /// Absolute path of the original repository root
    pub original_root: PathBuf,

    /// Directory the release tree is staged into
    pub base_dir: PathBuf,

    /// Glob patterns (relative to the root) of files to stage
    pub include: Vec<String>,

    /// Manifest location relative to the root
    pub manifest: PathBuf,

    /// Dependency whose `path` gets pinned
    pub dependency: String,
}

impl StageOptions {
    /// Options with the default include patterns and manifest location.
    pub fn new(
        original_root: impl Into<PathBuf>,
        base_dir: impl Into<PathBuf>,
        dependency: impl Into<String>,
    ) -> Self {
        StageOptions {
            original_root: original_root.into(),
            base_dir: base_dir.into(),
            include: DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect(),
            manifest: PathBuf::from(MANIFEST_NAME),
            dependency: dependency.into(),
        }
    }
}

/// Result of staging a release tree.
#[derive(Debug, Clone)]
pub struct StageResult {
    /// Staged files, relative to the release tree
    pub files: Vec<PathBuf>,

    /// What happened to the staged manifest
    pub rewrite: RewriteOutcome,
}

/// Stage the files into `base_dir` and rewrite the staged manifest.
pub fn make_release_tree(opts: &StageOptions) -> Result<StageResult> {
    let root = &opts.original_root;
    if !root.is_absolute() {
        bail!(
            "original repository root must be absolute: {}",
            root.display()
        );
    }
    if !root.is_dir() {
        bail!("original repository root does not exist: {}", root.display());
    }
    if opts.manifest.is_absolute() {
        bail!(
            "manifest location must be relative to the repository root: {}",
            opts.manifest.display()
        );
    }

    let files = stage_files(root, &opts.base_dir, &opts.include)?;

    let staged_manifest = opts.base_dir.join(&opts.manifest);
    if !staged_manifest.is_file() {
        return Err(RewriteError::missing_manifest(&staged_manifest).into());
    }

    // A nested manifest's relative paths start from its own directory.
    let manifest_dir = fs::normalize_lexically(
        &root.join(opts.manifest.parent().unwrap_or_else(|| Path::new(""))),
    );
    let rewrite = rewrite_dependency_path(&staged_manifest, &manifest_dir, &opts.dependency)?;

    tracing::debug!(
        "staged {} files into {}",
        files.len(),
        opts.base_dir.display()
    );

    Ok(StageResult { files, rewrite })
}

/// Copy the files matched by `include` from `root` into `base_dir`.
///
/// Paths are kept relative to the root. Files already inside `base_dir` are
/// skipped, so the tree can live under the repository.
pub fn stage_files(root: &Path, base_dir: &Path, include: &[String]) -> Result<Vec<PathBuf>> {
    fs::ensure_dir(base_dir)?;

    let mut staged = Vec::new();
    for file in fs::glob_files(root, include)? {
        if fs::is_inside(&file, base_dir) {
            continue;
        }
        if !fs::is_inside(&file, root) {
            bail!(
                "refusing to stage {}: outside of {}",
                file.display(),
                root.display()
            );
        }

        let relative = fs::relative_path(root, &file);
        let dest = base_dir.join(&relative);
        fs::copy_file(&file, &dest)
            .with_context(|| format!("failed to stage {}", relative.display()))?;

        tracing::debug!("staged {}", relative.display());
        staged.push(relative);
    }

    Ok(staged)
}
