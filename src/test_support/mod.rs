//! Test utilities for unit tests.
//!
//! Provides fixture manifests and a helper that lays out a small repository
//! (an extension crate next to the sibling it depends on by path).

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};

pub use fixtures::*;

/// A repository checkout created inside a temporary directory.
#[derive(Debug, Clone)]
pub struct RepoFixture {
    /// Root of the extension crate (holds `Cargo.toml`)
    pub root: PathBuf,
    /// The sibling dependency referenced as `../nativecore`
    pub sibling: PathBuf,
}

/// Create `<base>/project` with a manifest and sources, plus `<base>/nativecore`.
pub fn create_repo(base: &Path) -> RepoFixture {
    let root = base.join("project");
    let sibling = base.join("nativecore");

    fs::create_dir_all(root.join("src").join("ops")).unwrap();
    fs::create_dir_all(sibling.join("src")).unwrap();

    fs::write(root.join("Cargo.toml"), NATIVECORE_MANIFEST).unwrap();
    fs::write(root.join("src").join("lib.rs"), "mod ops;\n").unwrap();
    fs::write(root.join("src").join("ops").join("mod.rs"), "").unwrap();
    fs::write(root.join("README.md"), "# project\n").unwrap();
    fs::write(sibling.join("src").join("lib.rs"), "").unwrap();

    RepoFixture { root, sibling }
}
