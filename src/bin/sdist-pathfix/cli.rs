//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// sdist-pathfix - pin Cargo path dependencies in a staged source distribution
#[derive(Parser)]
#[command(name = "sdist-pathfix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite a dependency path in an already staged manifest
    Rewrite(RewriteArgs),

    /// Stage a release tree and rewrite its manifest
    Stage(StageArgs),
}

#[derive(Args)]
pub struct RewriteArgs {
    /// Staged manifest to rewrite in place
    pub manifest: PathBuf,

    /// Original repository root (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Dependency whose path is rewritten
    #[arg(short, long, env = "SDIST_PATHFIX_DEPENDENCY")]
    pub dependency: Option<String>,
}

#[derive(Args)]
pub struct StageArgs {
    /// Directory to stage the release tree into
    pub base_dir: PathBuf,

    /// Original repository root (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Dependency whose path is rewritten
    #[arg(short, long, env = "SDIST_PATHFIX_DEPENDENCY")]
    pub dependency: Option<String>,

    /// Manifest location relative to the root
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Glob pattern of files to stage (repeatable)
    #[arg(long)]
    pub include: Vec<String>,
}
