//! `sdist-pathfix stage` command

use anyhow::{Context, Result};

use crate::cli::StageArgs;
use crate::GlobalOptions;
use sdist_pathfix::ops::{make_release_tree, StageOptions};
use sdist_pathfix::util::Status;

pub fn execute(args: StageArgs, global_opts: &GlobalOptions) -> Result<()> {
    let shell = &global_opts.shell;

    let root = super::original_root(args.root)?;
    let config = super::config_for(&root);
    let dependency = super::dependency(args.dependency, &config)?;

    let base_dir = std::path::absolute(&args.base_dir)
        .with_context(|| format!("failed to make {} absolute", args.base_dir.display()))?;

    let opts = StageOptions {
        original_root: root,
        base_dir,
        include: if args.include.is_empty() {
            config.include()
        } else {
            args.include
        },
        manifest: args.manifest.unwrap_or_else(|| config.manifest()),
        dependency,
    };

    let result = make_release_tree(&opts)?;

    if shell.is_verbose() {
        for file in &result.files {
            shell.status(Status::Info, file.display());
        }
    }
    shell.status(
        Status::Staged,
        format!(
            "{} files into {}",
            result.files.len(),
            opts.base_dir.display()
        ),
    );
    shell.status(
        Status::Rewrote,
        format!(
            "{} path {} -> {}",
            result.rewrite.dependency,
            result.rewrite.previous,
            result.rewrite.resolved.display()
        ),
    );

    Ok(())
}
