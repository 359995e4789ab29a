//! Rendering failures for the terminal.
//!
//! A failure is printed as an `error:` headline, the manifest it concerns,
//! any detail lines, and a `help:` line per suggested fix.

use std::fmt;
use std::path::PathBuf;

/// Help lines attached to rewrite failures.
pub mod suggestions {
    /// The staged manifest was not there when the rewrite ran.
    pub const STAGE_FIRST: &str =
        "stage the release tree before rewriting (run `sdist-pathfix stage`)";

    /// The original root must be given as an absolute path.
    pub const ABSOLUTE_ROOT: &str = "pass the original repository root as an absolute path";

    /// The manifest could not be parsed.
    pub const FIX_SYNTAX: &str = "fix the TOML syntax in the repository's manifest and re-stage";

    /// The dependency is missing from the manifest.
    pub const CHECK_DEPENDENCY: &str =
        "check the dependency name (`--dependency` or `rewrite.dependency` in config)";

    /// The dependency has no usable `path`.
    pub const ADD_PATH: &str = "declare the dependency with a `path = \"...\"` entry";
}

const RED: &str = "\x1b[1;31m";
const CYAN: &str = "\x1b[1;36m";
const RESET: &str = "\x1b[0m";

/// An error report: headline, manifest location, details, help.
#[derive(Debug, Clone, Default)]
pub struct Diagnostic {
    message: String,
    location: Option<PathBuf>,
    details: Vec<String>,
    help: Vec<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            ..Diagnostic::default()
        }
    }

    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    pub fn with_context(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    pub fn with_suggestion(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// Render the report; `color` wraps the labels in ANSI codes.
    pub fn format(&self, color: bool) -> String {
        let paint = |code: &str, label: &str| {
            if color {
                format!("{code}{label}{RESET}")
            } else {
                label.to_string()
            }
        };

        let mut lines = vec![format!("{}: {}", paint(RED, "error"), self.message)];
        lines.extend(
            self.location
                .iter()
                .map(|path| format!("  --> {}", path.display())),
        );
        lines.extend(self.details.iter().map(|detail| format!("   | {detail}")));
        lines.extend(
            self.help
                .iter()
                .map(|help| format!("{}: {help}", paint(CYAN, "help"))),
        );

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}

/// Print a report to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}
