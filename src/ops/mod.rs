//! High-level operations.
//!
//! This module contains the implementation of the `sdist-pathfix` commands.

pub mod release_tree;
pub mod rewrite;

pub use release_tree::{make_release_tree, stage_files, StageOptions, StageResult};
pub use rewrite::{rewrite_dependency_path, RewriteOutcome};
