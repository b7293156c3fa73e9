//! Project configuration (ninepatch.yaml) parsing.
//!
//! The configuration names where nine-patch sources live, which paths to
//! skip, and how strictly markers and warnings are treated.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::ScanOptions;
use crate::error::{NinePatchError, Result};

/// Project configuration loaded from ninepatch.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source directories to scan. Defaults to the current directory.
    pub sources: Vec<String>,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,

    /// Per-channel tolerance when matching black/red markers.
    pub tolerance: u8,

    /// Treat warnings (bad patches, no stretch region) as failures.
    pub deny_warnings: bool,
}

impl Config {
    /// Load configuration from a ninepatch.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| NinePatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| NinePatchError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Check ninepatch.yaml syntax".to_string()),
        })
    }

    /// Scan options derived from this configuration.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            tolerance: self.tolerance,
        }
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy().replace('\\', "/");
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }

    /// Get effective source paths, defaulting to the current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }
}

/// Minimal glob matching: `**/dir/*`, `*suffix`, `dir/*`, or substring.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix("**/") {
        if let Some(dir) = suffix.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir));
        }
        return path.ends_with(suffix);
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !pattern.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(prefix) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", prefix)) || path.contains(&format!("/{}/", prefix));
    }

    path.contains(pattern)
}
