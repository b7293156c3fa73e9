//! Terminal output for the ninepatch CLI.
//!
//! Cargo-style status lines with right-aligned coloured verbs. Status goes
//! to stderr; stdout is reserved for reports and JSON.

use std::io::{self, IsTerminal, Write};

use crate::validation::{Diagnostic, Severity};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal. A quiet printer only shows
/// warnings and errors.
pub struct Printer {
    color: bool,
    quiet: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    /// Create a printer, detecting colour support from stderr.
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            quiet: false,
        }
    }

    /// Suppress status, success and info lines.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Print a status line with a green bold verb.
    /// e.g. "    Checking res/button.9.png"
    pub fn status(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(GREEN, verb, message);
        }
    }

    /// Print a success/completion line with a green bold verb.
    pub fn success(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(GREEN, verb, message);
        }
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(CYAN, verb, message);
        }
    }

    /// Print a warning line with a yellow bold verb. Shown even when quiet.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Print an error line with a red bold verb. Shown even when quiet.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Print a validation diagnostic with its code and help text.
    pub fn diagnostic(&self, d: &Diagnostic) {
        let line = format!("[{}] {}", d.code, d.message);
        match d.severity {
            Severity::Error => self.error("error", &line),
            Severity::Warning => self.warning("warning", &line),
        }
        if let Some(help) = &d.help {
            self.print_line(CYAN, "help", help);
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// Pluralize a count: `plural(1, "file", "files")` → "1 file".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "chunk", "chunks"), "1 chunk");
        assert_eq!(plural(0, "chunk", "chunks"), "0 chunks");
        assert_eq!(plural(9, "chunk", "chunks"), "9 chunks");
    }

    #[test]
    fn test_display_path_absolute() {
        let p = std::path::Path::new("/nonexistent/res/button.9.png");
        assert_eq!(display_path(p), "/nonexistent/res/button.9.png");
    }
}
