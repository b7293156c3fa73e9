//! Finding and loading nine-patch sources.
//!
//! Discovery either follows a `ninepatch.yaml` in the project root or
//! scans explicitly given paths for `*.9.png` files.

mod config;
mod loader;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use config::Config;
pub use loader::{load_bitmap, load_image};
pub use scanner::{is_nine_patch, scan_directory, scan_sources, NINE_PATCH_SUFFIX};

/// The name of the project configuration file.
pub const CONFIG_FILENAME: &str = "ninepatch.yaml";

/// Result of discovering nine-patch sources.
#[derive(Debug)]
pub struct DiscoveryResult {
    pub root: PathBuf,
    /// The loaded configuration (default if no ninepatch.yaml was found).
    pub config: Config,
    pub has_config: bool,
    /// Discovered `*.9.png` files.
    pub files: Vec<PathBuf>,
}

/// Discover nine-patch sources in a project directory.
///
/// Uses the `sources` of `ninepatch.yaml` when present, otherwise scans the
/// whole directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let config_path = root.join(CONFIG_FILENAME);
    let (config, has_config) = if config_path.exists() {
        (Config::load(&config_path)?, true)
    } else {
        (Config::default(), false)
    };

    let files = scan_sources(&config.effective_sources(), &root, &config);

    Ok(DiscoveryResult {
        root,
        config,
        has_config,
        files,
    })
}

/// Collect nine-patch sources from explicit files and directories.
///
/// Files are taken as given, whatever their name; directories are scanned.
/// The result is sorted and free of duplicates.
pub fn discover_paths(paths: &[PathBuf], config: &Config) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(scan_directory(path, config));
        } else {
            files.push(path.clone());
        }
    }

    files.sort();
    files.dedup();
    files
}
