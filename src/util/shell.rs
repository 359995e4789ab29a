//! Shell output for the command line.
//!
//! Status lines are written to stderr as `{status:>12} {message}`, with the
//! status word colored when stderr is a terminal.

use std::fmt::Display;
use std::io::{self, IsTerminal};

use crate::util::diagnostic::{self, Diagnostic};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// --quiet: diagnostics only
    Quiet,
    #[default]
    Normal,
    /// --verbose: also print per-file detail
    Verbose,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Detect TTY and use colors if available.
    #[default]
    Auto,
    Always,
    Never,
}

/// Status types for output messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    // Success statuses (green)
    Staged,
    Rewrote,

    // Info statuses (blue)
    Info,

    // Warning statuses (yellow)
    Unchanged,
}

impl Status {
    fn as_str(&self) -> &'static str {
        match self {
            Status::Staged => "Staged",
            Status::Rewrote => "Rewrote",
            Status::Info => "Info",
            Status::Unchanged => "Unchanged",
        }
    }

    fn color_code(&self) -> &'static str {
        match self {
            Status::Staged | Status::Rewrote => "\x1b[1;32m",
            Status::Info => "\x1b[1;34m",
            Status::Unchanged => "\x1b[1;33m",
        }
    }
}

/// Central shell for all CLI output.
#[derive(Debug)]
pub struct Shell {
    verbosity: Verbosity,
    use_color: bool,
}

impl Shell {
    /// Create a shell from CLI flags.
    pub fn from_flags(quiet: bool, verbose: bool, color: ColorChoice) -> Self {
        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        let use_color = match color {
            ColorChoice::Auto => io::stderr().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };

        Shell {
            verbosity,
            use_color,
        }
    }

    /// Check if shell is in verbose mode.
    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    /// Print a status message. Suppressed by `--quiet`.
    pub fn status(&self, status: Status, msg: impl Display) {
        if self.verbosity == Verbosity::Quiet {
            return;
        }
        eprintln!("{} {}", self.format_status(status), msg);
    }

    /// Print a full diagnostic. Shown in every verbosity.
    pub fn diagnostic(&self, diag: &Diagnostic) {
        diagnostic::emit(diag, self.use_color);
    }

    fn format_status(&self, status: Status) -> String {
        let text = format!("{:>12}", status.as_str());
        if self.use_color {
            format!("{}{}\x1b[0m", status.color_code(), text)
        } else {
            text
        }
    }
}
