//! Core data structures.
//!
//! - The staged manifest and the dependency `path` it carries
//! - The staging context (where the release tree came from)
//! - Rewrite errors

pub mod errors;
pub mod manifest;
pub mod staging;

pub use errors::RewriteError;
pub use manifest::{StagedManifest, MANIFEST_NAME};
pub use staging::StagingContext;
