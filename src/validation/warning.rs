//! Diagnostics produced by nine-patch validation.
//!
//! A diagnostic may point at an interior region (a corrupt chunk, a patch
//! that smears) so editors can highlight it over the bitmap.

use std::fmt;

use serde::Serialize;

use crate::types::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding about a nine-patch border or its chunks.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Stable code such as `ninepatch::validate::corrupt-chunk`.
    pub code: String,
    pub message: String,
    pub help: Option<String>,
    /// Interior rectangle the finding is about, if any.
    pub region: Option<Rect>,
}

impl Diagnostic {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code.into(), message.into())
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code.into(), message.into())
    }

    fn new(severity: Severity, code: String, message: String) -> Self {
        Diagnostic {
            severity,
            code,
            message,
            help: None,
            region: None,
        }
    }

    pub fn with_help(self, help: impl Into<String>) -> Self {
        Diagnostic {
            help: Some(help.into()),
            ..self
        }
    }

    pub fn with_region(self, region: Rect) -> Self {
        Diagnostic {
            region: Some(region),
            ..self
        }
    }
}

/// Everything validation found for one image, in check order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Append another result's findings after this one's.
    pub fn merge(&mut self, other: ValidationResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// No findings of any severity.
    pub fn is_ok(&self) -> bool {
        self.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.count_of(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count_of(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    /// The most severe finding, if there is one.
    pub fn worst(&self) -> Option<Severity> {
        self.diagnostics.iter().map(|d| d.severity).max()
    }

    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.diagnostics.iter().filter(move |d| d.code == code)
    }

    /// Interior regions flagged by any finding.
    pub fn regions(&self) -> Vec<Rect> {
        self.diagnostics.iter().filter_map(|d| d.region).collect()
    }

    fn count_of(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}
