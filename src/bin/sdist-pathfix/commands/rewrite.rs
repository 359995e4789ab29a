//! `sdist-pathfix rewrite` command

use anyhow::Result;

use crate::cli::RewriteArgs;
use crate::GlobalOptions;
use sdist_pathfix::ops::rewrite_dependency_path;
use sdist_pathfix::util::Status;

pub fn execute(args: RewriteArgs, global_opts: &GlobalOptions) -> Result<()> {
    let shell = &global_opts.shell;

    let root = super::original_root(args.root)?;
    let config = super::config_for(&root);
    let dependency = super::dependency(args.dependency, &config)?;

    let outcome = rewrite_dependency_path(&args.manifest, &root, &dependency)?;

    if outcome.changed() {
        shell.status(
            Status::Rewrote,
            format!(
                "{} path {} -> {}",
                outcome.dependency,
                outcome.previous,
                outcome.resolved.display()
            ),
        );
    } else {
        shell.status(
            Status::Unchanged,
            format!(
                "{} path already {}",
                outcome.dependency,
                outcome.resolved.display()
            ),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli::RewriteArgs;
    use clap::Parser;

    fn parse_rewrite_args(args: &[&str]) -> RewriteArgs {
        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            rewrite: RewriteArgs,
        }
        TestCli::parse_from(args).rewrite
    }

    #[test]
    fn test_rewrite_args_manifest_only() {
        let args = parse_rewrite_args(&["test", "release/Cargo.toml"]);
        assert_eq!(args.manifest.to_str(), Some("release/Cargo.toml"));
        assert!(args.root.is_none());
    }

    #[test]
    fn test_rewrite_args_all_flags() {
        let args = parse_rewrite_args(&[
            "test",
            "release/Cargo.toml",
            "--root",
            "/home/user/project",
            "--dependency",
            "nativecore",
        ]);
        assert_eq!(args.root.unwrap().to_str(), Some("/home/user/project"));
        assert_eq!(args.dependency.as_deref(), Some("nativecore"));
    }

    #[test]
    fn test_rewrite_args_short_dependency() {
        let args = parse_rewrite_args(&["test", "Cargo.toml", "-d", "pyo3"]);
        assert_eq!(args.dependency.as_deref(), Some("pyo3"));
    }
}
