//! Configuration file support.
//!
//! Two configuration file locations are read:
//! - Global: `~/.sdist-pathfix/config.toml` - User-wide defaults
//! - Project: `.sdist-pathfix/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config; command-line flags
//! take precedence over both.
//!
//! ```toml
//! [rewrite]
//! manifest = "Cargo.toml"
//! dependency = "pyo3"
//!
//! [stage]
//! include = ["Cargo.toml", "src"]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::MANIFEST_NAME;
use crate::ops::release_tree::DEFAULT_INCLUDE;
use crate::util::fs;

/// Name of the configuration directory, both global and per project.
pub const CONFIG_DIR: &str = ".sdist-pathfix";

/// Name of the configuration file inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Tool configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rewrite settings
    pub rewrite: RewriteConfig,

    /// Staging settings
    pub stage: StageConfig,
}

/// Rewrite-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Manifest location relative to the repository root
    pub manifest: Option<PathBuf>,

    /// Dependency whose `path` gets pinned
    pub dependency: Option<String>,
}

/// Staging-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Glob patterns of files to put into the release tree
    pub include: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.rewrite.manifest.is_some() {
            self.rewrite.manifest = other.rewrite.manifest;
        }
        if other.rewrite.dependency.is_some() {
            self.rewrite.dependency = other.rewrite.dependency;
        }
        if other.stage.include.is_some() {
            self.stage.include = other.stage.include;
        }
    }

    /// Manifest location, defaulting to `Cargo.toml`.
    pub fn manifest(&self) -> PathBuf {
        self.rewrite
            .manifest
            .clone()
            .unwrap_or_else(|| PathBuf::from(MANIFEST_NAME))
    }

    /// Configured dependency name, if any.
    pub fn dependency(&self) -> Option<&str> {
        self.rewrite.dependency.as_deref()
    }

    /// Include patterns, defaulting to the manifest, lockfile and `src`.
    pub fn include(&self) -> Vec<String> {
        match &self.stage.include {
            Some(include) => include.clone(),
            None => DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.sdist-pathfix/config.toml)
/// 2. Global config (~/.sdist-pathfix/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global config directory (~/.sdist-pathfix).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(CONFIG_DIR))
}

/// Get the global config path (~/.sdist-pathfix/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Get the project config path (.sdist-pathfix/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = project_config_path(dir);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.manifest(), PathBuf::from("Cargo.toml"));
        assert_eq!(config.dependency(), None);
        assert_eq!(config.include(), vec!["Cargo.toml", "Cargo.lock", "src"]);
    }

    #[test]
    fn test_load_config() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            tmp.path(),
            r#"
[rewrite]
manifest = "rust/Cargo.toml"
dependency = "pyo3"

[stage]
include = ["rust"]
"#,
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.manifest(), PathBuf::from("rust/Cargo.toml"));
        assert_eq!(config.dependency(), Some("pyo3"));
        assert_eq!(config.include(), vec!["rust"]);
    }

    #[test]
    fn test_project_overrides_global() {
        let global = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let global_path = write_config(
            global.path(),
            "[rewrite]\ndependency = \"pyo3\"\nmanifest = \"native/Cargo.toml\"\n",
        );
        let project_path = write_config(project.path(), "[rewrite]\ndependency = \"nativecore\"\n");

        let config = load_config(Some(&global_path), &project_path);
        assert_eq!(config.dependency(), Some("nativecore"));
        assert_eq!(config.manifest(), PathBuf::from("native/Cargo.toml"));
    }

    #[test]
    fn test_broken_config_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(tmp.path(), "[rewrite\n");

        assert!(Config::load(&path).is_err());
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn test_missing_config_is_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(None, &project_config_path(tmp.path()));
        assert_eq!(config, Config::default());
    }
}
