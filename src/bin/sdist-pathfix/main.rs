//! sdist-pathfix CLI - pins Cargo path dependencies in a staged sdist

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use sdist_pathfix::util::{ColorChoice, Diagnostic, Shell};
use sdist_pathfix::RewriteError;

/// Options shared by every command.
pub struct GlobalOptions {
    pub shell: Shell,
}

fn main() {
    let cli = Cli::parse();

    let color = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let global_opts = GlobalOptions {
        shell: Shell::from_flags(cli.quiet, cli.verbose, color),
    };

    // Set up logging
    let filter = if cli.quiet {
        EnvFilter::new("sdist_pathfix=warn")
    } else if cli.verbose {
        EnvFilter::new("sdist_pathfix=debug")
    } else {
        EnvFilter::new("sdist_pathfix=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run(cli.command, &global_opts) {
        report(&global_opts.shell, &e);
        std::process::exit(1);
    }
}

fn run(command: Commands, global_opts: &GlobalOptions) -> Result<()> {
    match command {
        Commands::Rewrite(args) => commands::rewrite::execute(args, global_opts),
        Commands::Stage(args) => commands::stage::execute(args, global_opts),
    }
}

fn report(shell: &Shell, err: &anyhow::Error) {
    let diag = match err.downcast_ref::<RewriteError>() {
        Some(rewrite) => rewrite.to_diagnostic(),
        None => Diagnostic::error(format!("{:#}", err)),
    };
    shell.diagnostic(&diag);
}
