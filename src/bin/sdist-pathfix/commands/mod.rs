//! Command implementations

pub mod rewrite;
pub mod stage;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use sdist_pathfix::util::config::{global_config_path, load_config, project_config_path};
use sdist_pathfix::util::Config;

/// The original repository root: `--root` or the current directory, made absolute.
pub fn original_root(root: Option<PathBuf>) -> Result<PathBuf> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir().context("failed to get current directory")?,
    };

    std::path::absolute(&root)
        .with_context(|| format!("failed to make {} absolute", root.display()))
}

/// Global config merged with the project config of `root`.
pub fn config_for(root: &Path) -> Config {
    let global = global_config_path();
    load_config(global.as_deref(), &project_config_path(root))
}

/// The dependency to rewrite: the flag if given, else the configured one.
pub fn dependency(flag: Option<String>, config: &Config) -> Result<String> {
    flag.or_else(|| config.dependency().map(str::to_string))
        .context("no dependency given; pass `--dependency` or set `rewrite.dependency` in config")
}
