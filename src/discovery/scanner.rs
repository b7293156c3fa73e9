//! File system scanner for nine-patch sources.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::config::Config;

/// File suffix that marks a nine-patch source.
pub const NINE_PATCH_SUFFIX: &str = ".9.png";

/// Check whether a path names a nine-patch source (`*.9.png`).
pub fn is_nine_patch(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.to_ascii_lowercase().ends_with(NINE_PATCH_SUFFIX))
}

/// Recursively collect nine-patch files under `root`, sorted by path.
pub fn scan_directory(root: &Path, config: &Config) -> Vec<PathBuf> {
    if !root.exists() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_nine_patch(p) && !config.is_excluded(p))
        .collect();

    files.sort();
    files
}

/// Scan each configured source, relative to `base_path`.
pub fn scan_sources(sources: &[String], base_path: &Path, config: &Config) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };
        files.extend(scan_directory(&source_path, config));
    }

    // Overlapping sources yield the same file more than once.
    files.sort();
    files.dedup();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_nine_patch() {
        assert!(is_nine_patch(Path::new("button.9.png")));
        assert!(is_nine_patch(Path::new("res/Panel.9.PNG")));
        assert!(!is_nine_patch(Path::new("button.png")));
        assert!(!is_nine_patch(Path::new("9.png.txt")));
    }

    #[test]
    fn test_scan_directory() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("a.9.png"), b"").unwrap();
        fs::write(dir.path().join("b.png"), b"").unwrap();
        fs::write(dir.path().join("nested/c.9.png"), b"").unwrap();

        let files = scan_directory(dir.path(), &Config::default());
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.9.png"));
        assert!(files[1].ends_with("nested/c.9.png"));
    }

    #[test]
    fn test_scan_directory_excludes() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("generated")).unwrap();
        fs::write(dir.path().join("a.9.png"), b"").unwrap();
        fs::write(dir.path().join("generated/b.9.png"), b"").unwrap();

        let config = Config {
            excludes: vec!["**/generated/*".to_string()],
            ..Default::default()
        };
        let files = scan_directory(dir.path(), &config);
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_scan_overlapping_sources() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("res/sub")).unwrap();
        fs::write(dir.path().join("res/a.9.png"), b"").unwrap();
        fs::write(dir.path().join("res/sub/b.9.png"), b"").unwrap();

        let sources = vec!["res/sub".to_string(), "res".to_string()];
        let files = scan_sources(&sources, dir.path(), &Config::default());
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("res/a.9.png"));
        assert!(files[1].ends_with("res/sub/b.9.png"));
    }

    #[test]
    fn test_scan_missing_directory() {
        let files = scan_directory(Path::new("/nonexistent/ninepatch"), &Config::default());
        assert!(files.is_empty());
    }
}
