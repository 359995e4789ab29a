//! The staged Cargo manifest.
//!
//! Edits go through `toml_edit` so that everything except the rewritten
//! value keeps its formatting, comments and key order.

use std::fs;
use std::path::{Path, PathBuf};

use toml_edit::{DocumentMut, Item, Value};

use crate::core::errors::RewriteError;
use crate::util::fs::write_atomic;

/// Default manifest location inside a release tree.
pub const MANIFEST_NAME: &str = "Cargo.toml";

/// Key holding dependency specifications.
const DEPENDENCIES: &str = "dependencies";

/// Key holding the filesystem location of a path dependency.
const PATH: &str = "path";

/// A parsed copy of a staged manifest.
///
/// Nothing touches the disk until [`StagedManifest::save`] is called.
#[derive(Debug, Clone)]
pub struct StagedManifest {
    path: PathBuf,
    doc: DocumentMut,
}

impl StagedManifest {
    /// Load and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self, RewriteError> {
        if !path.is_file() {
            return Err(RewriteError::missing_manifest(path));
        }

        let content = fs::read_to_string(path).map_err(|e| RewriteError::io(path, e))?;
        Self::parse(path, &content)
    }

    /// Parse manifest text that was read from `path`.
    pub fn parse(path: &Path, content: &str) -> Result<Self, RewriteError> {
        let doc = content
            .parse::<DocumentMut>()
            .map_err(|source| RewriteError::Format {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(StagedManifest {
            path: path.to_path_buf(),
            doc,
        })
    }

    /// Location of the manifest on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current `path` of the named dependency.
    pub fn dependency_path(&self, name: &str) -> Result<&str, RewriteError> {
        let deps = self
            .doc
            .get(DEPENDENCIES)
            .ok_or_else(|| no_dependencies(&self.path))?;
        let deps = deps
            .as_table_like()
            .ok_or_else(|| dependencies_not_table(&self.path, deps))?;
        let spec = deps.get(name).ok_or_else(|| undeclared(&self.path, name))?;
        let spec = spec
            .as_table_like()
            .ok_or_else(|| spec_not_table(&self.path, name, spec))?;
        let item = spec.get(PATH).ok_or_else(|| no_path(&self.path, name))?;

        item.as_str()
            .ok_or_else(|| path_not_string(&self.path, name, item))
    }

    /// Replace the `path` of the named dependency.
    ///
    /// The new value keeps the whitespace and comments that surrounded the
    /// old one.
    pub fn set_dependency_path(
        &mut self,
        name: &str,
        new_path: &str,
    ) -> Result<(), RewriteError> {
        let manifest = self.path.as_path();

        let deps = self
            .doc
            .get_mut(DEPENDENCIES)
            .ok_or_else(|| no_dependencies(manifest))?;
        if !deps.is_table_like() {
            return Err(dependencies_not_table(manifest, deps));
        }
        let spec = deps
            .as_table_like_mut()
            .and_then(|deps| deps.get_mut(name))
            .ok_or_else(|| undeclared(manifest, name))?;
        if !spec.is_table_like() {
            return Err(spec_not_table(manifest, name, spec));
        }
        let item = spec
            .as_table_like_mut()
            .and_then(|spec| spec.get_mut(PATH))
            .ok_or_else(|| no_path(manifest, name))?;
        if !item.is_str() {
            return Err(path_not_string(manifest, name, item));
        }
        let value = item
            .as_value_mut()
            .ok_or_else(|| no_path(manifest, name))?;

        let decor = value.decor().clone();
        *value = Value::from(new_path);
        *value.decor_mut() = decor;

        Ok(())
    }

    /// Write the document back to its location, replacing the file.
    pub fn save(&self) -> Result<(), RewriteError> {
        write_atomic(&self.path, &self.doc.to_string())
            .map_err(|e| RewriteError::io(&self.path, e))
    }
}

impl std::fmt::Display for StagedManifest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.doc)
    }
}

fn dependency_key(name: &str) -> String {
    format!("{}.{}", DEPENDENCIES, name)
}

fn path_key(name: &str) -> String {
    format!("{}.{}.{}", DEPENDENCIES, name, PATH)
}

fn no_dependencies(manifest: &Path) -> RewriteError {
    RewriteError::structural(
        manifest,
        DEPENDENCIES,
        "manifest has no `[dependencies]` table",
    )
}

fn dependencies_not_table(manifest: &Path, item: &Item) -> RewriteError {
    RewriteError::structural(
        manifest,
        DEPENDENCIES,
        format!("`dependencies` is a {}, expected a table", item.type_name()),
    )
}

fn undeclared(manifest: &Path, name: &str) -> RewriteError {
    RewriteError::structural(
        manifest,
        dependency_key(name),
        format!("dependency `{}` is not declared", name),
    )
}

fn spec_not_table(manifest: &Path, name: &str, item: &Item) -> RewriteError {
    RewriteError::structural(
        manifest,
        path_key(name),
        format!(
            "dependency `{}` is a {}, not a table with a `path` field",
            name,
            item.type_name()
        ),
    )
}

fn no_path(manifest: &Path, name: &str) -> RewriteError {
    RewriteError::structural(
        manifest,
        path_key(name),
        format!("dependency `{}` has no `path` field", name),
    )
}

fn path_not_string(manifest: &Path, name: &str, item: &Item) -> RewriteError {
    RewriteError::structural(
        manifest,
        path_key(name),
        format!(
            "`path` of dependency `{}` is a {}, expected a string",
            name,
            item.type_name()
        ),
    )
}
