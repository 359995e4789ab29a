//! Manifest fixtures for common test scenarios.

/// Extension crate depending on a sibling checkout through a dependency table.
pub const NATIVECORE_MANIFEST: &str = r#"# Native extension for the Python package
[package]
name = "rust_transformers"
version = "0.1.0"
edition = "2018"

[lib]
name = "rust_transformers"
crate-type = ["cdylib"]

[dependencies]
ndarray = "0.13"

[dependencies.nativecore]
path = "../nativecore"
features = ["extension-module"]

[profile.release]
lto = true
"#;

/// Dependency declared as an inline table.
pub const INLINE_MANIFEST: &str = r#"[package]
name = "tokenizers-python"
version = "0.1.0"

[dependencies]
pyo3 = { path = "../pyo3", features = ["extension-module"] }
numpy = "0.7"
"#;

/// Unterminated table header.
pub const MALFORMED_MANIFEST: &str = r#"[dependencies.nativecore
path = "../nativecore"
"#;
