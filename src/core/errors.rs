//! Rewrite error types and diagnostics.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// Failure kinds of a manifest path rewrite.
///
/// None of these are retryable: the inputs are build-time artifacts and the
/// packaging step must abort.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum RewriteError {
    /// An input the staging step should have produced is absent.
    #[error("{message}")]
    #[diagnostic(code(sdist_pathfix::rewrite::precondition))]
    Precondition {
        path: PathBuf,
        message: String,
        help: &'static str,
    },

    /// The manifest is not valid TOML.
    #[error("malformed manifest `{}`", path.display())]
    #[diagnostic(code(sdist_pathfix::rewrite::format))]
    Format {
        path: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },

    /// A key the rewrite needs is absent or has the wrong type.
    #[error("missing `{key}` in manifest `{}`", path.display())]
    #[diagnostic(code(sdist_pathfix::rewrite::structural))]
    Structural {
        path: PathBuf,
        key: String,
        detail: String,
    },

    #[error("I/O error on `{}`", path.display())]
    #[diagnostic(code(sdist_pathfix::rewrite::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RewriteError {
    /// The staged manifest is absent, or something other than a file.
    pub(crate) fn missing_manifest(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let reason = if path.exists() {
            "is not a file"
        } else {
            "does not exist"
        };
        RewriteError::Precondition {
            message: format!("staged manifest `{}` {}", path.display(), reason),
            path,
            help: suggestions::STAGE_FIRST,
        }
    }

    pub(crate) fn invalid_root(
        manifest: impl Into<PathBuf>,
        root: &std::path::Path,
        reason: &str,
    ) -> Self {
        RewriteError::Precondition {
            path: manifest.into(),
            message: format!("original repository root `{}` {}", root.display(), reason),
            help: suggestions::ABSOLUTE_ROOT,
        }
    }

    pub(crate) fn structural(
        path: impl Into<PathBuf>,
        key: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        RewriteError::Structural {
            path: path.into(),
            key: key.into(),
            detail: detail.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RewriteError::Io {
            path: path.into(),
            source,
        }
    }

    /// Short name of the failure kind, as shown to users.
    pub fn kind(&self) -> &'static str {
        match self {
            RewriteError::Precondition { .. } => "precondition",
            RewriteError::Format { .. } => "format",
            RewriteError::Structural { .. } => "structural",
            RewriteError::Io { .. } => "io",
        }
    }

    /// The file the failure is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            RewriteError::Precondition { path, .. }
            | RewriteError::Format { path, .. }
            | RewriteError::Structural { path, .. }
            | RewriteError::Io { path, .. } => path,
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag =
            Diagnostic::error(format!("{}: {}", self.kind(), self)).with_location(self.path());

        match self {
            RewriteError::Precondition { help, .. } => diag.with_suggestion(*help),
            RewriteError::Format { source, .. } => diag
                .with_context(source.message().trim().to_string())
                .with_suggestion(suggestions::FIX_SYNTAX),
            RewriteError::Structural { key, detail, .. } => {
                let diag = diag.with_context(detail.clone());
                if key.ends_with(".path") {
                    diag.with_suggestion(suggestions::ADD_PATH)
                } else {
                    diag.with_suggestion(suggestions::CHECK_DEPENDENCY)
                }
            }
            RewriteError::Io { source, .. } => diag.with_context(source.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_manifest_message() {
        let err = RewriteError::missing_manifest("/stage/Cargo.toml");
        assert_eq!(err.kind(), "precondition");
        assert_eq!(
            err.to_string(),
            "staged manifest `/stage/Cargo.toml` does not exist"
        );
        let out = err.to_diagnostic().format(false);
        assert!(out.starts_with("error: precondition: staged manifest"));
        assert!(out.contains("help: stage the release tree"));
    }

    #[test]
    fn test_directory_manifest_is_not_a_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = RewriteError::missing_manifest(tmp.path());
        assert_eq!(err.kind(), "precondition");
        assert!(err.to_string().ends_with("is not a file"));
    }

    #[test]
    fn test_structural_diagnostic_names_key() {
        let err = RewriteError::Structural {
            path: PathBuf::from("Cargo.toml"),
            key: "dependencies.othercore".to_string(),
            detail: "dependency `othercore` is not declared".to_string(),
        };
        let out = err.to_diagnostic().format(false);
        assert!(out.contains("structural: missing `dependencies.othercore`"));
        assert!(out.contains("help: check the dependency name"));
    }
}
