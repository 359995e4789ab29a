//! sdist-pathfix - pins Cargo path dependencies while staging a source distribution
//!
//! A Python package that embeds a Rust extension ships its `Cargo.toml` in
//! the sdist. Isolated builds unpack that sdist into a temporary directory,
//! where `path = "../sibling"` dependencies no longer resolve. This crate
//! stages the release tree and rewrites the staged manifest's dependency
//! path to an absolute one computed against the original repository.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities for unit tests.
#[cfg(test)]
pub mod test_support;

pub use core::{RewriteError, StagedManifest, StagingContext};
pub use ops::{make_release_tree, rewrite_dependency_path, RewriteOutcome, StageOptions};
pub use util::config::Config;
