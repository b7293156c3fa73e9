//! Check command implementation.
//!
//! Validates nine-patch files the way an asset compiler would before
//! shipping them: errors fail the run, warnings fail it only when denied.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{
    discover, discover_paths, load_image, scan_sources, Config, CONFIG_FILENAME,
};
use crate::error::{NinePatchError, Result};
use crate::output::{display_path, plural, Printer};
use crate::validation::{validate_image, Diagnostic, Severity, ValidationResult};

/// Validate nine-patch files and report malformed borders
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files or directories to check (default: sources from ninepatch.yaml, or .)
    pub paths: Vec<PathBuf>,

    /// Path to a ninepatch.yaml config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub deny_warnings: bool,
}

/// Totals for one check run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    pub files: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl CheckSummary {
    /// Whether the run fails under the given warning policy.
    pub fn failed(&self, deny_warnings: bool) -> bool {
        self.errors > 0 || (deny_warnings && self.warnings > 0)
    }
}

/// Check a single file, returning its diagnostics.
///
/// Load failures are reported as a single error diagnostic so one broken
/// file does not stop the rest of the run.
pub fn check_file(path: &Path, config: &Config) -> ValidationResult {
    match load_image(path, config.scan_options()) {
        Ok(mut image) => validate_image(&mut image),
        Err(e) => {
            let mut result = ValidationResult::new();
            result.push(Diagnostic::error("ninepatch::validate::load", e.to_string()));
            result
        }
    }
}

/// Check every file and print diagnostics as they come.
pub fn check_files(files: &[PathBuf], config: &Config, printer: &Printer) -> CheckSummary {
    let mut summary = CheckSummary::default();

    for file in files {
        let display = display_path(file);
        printer.status("Checking", &display);

        let result = check_file(file, config);
        for d in result.iter() {
            printer.diagnostic(d);
        }
        if result.worst() == Some(Severity::Error) {
            printer.error("Rejected", &display);
        }

        summary.files += 1;
        summary.errors += result.error_count();
        summary.warnings += result.warning_count();
    }

    summary
}

fn resolve_inputs(args: &CheckArgs) -> Result<(Config, Vec<PathBuf>)> {
    if let Some(path) = &args.config {
        let config = Config::load(path)?;
        let files = if args.paths.is_empty() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            scan_sources(&config.effective_sources(), base, &config)
        } else {
            discover_paths(&args.paths, &config)
        };
        return Ok((config, files));
    }

    if args.paths.is_empty() {
        let result = discover(".")?;
        return Ok((result.config, result.files));
    }

    let local = Path::new(CONFIG_FILENAME);
    let config = if local.exists() {
        Config::load(local)?
    } else {
        Config::default()
    };
    let files = discover_paths(&args.paths, &config);
    Ok((config, files))
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let (config, files) = resolve_inputs(&args)?;
    let deny_warnings = args.deny_warnings || config.deny_warnings;

    if files.is_empty() {
        printer.warning("Warning", "No nine-patch files found");
        return Ok(());
    }

    let summary = check_files(&files, &config, printer);

    let counts = format!(
        "{}, {}, {}",
        plural(summary.files, "file", "files"),
        plural(summary.errors, "error", "errors"),
        plural(summary.warnings, "warning", "warnings")
    );

    if summary.failed(deny_warnings) {
        printer.error("Failed", &counts);
        return Err(NinePatchError::Validation {
            message: format!("Nine-patch check failed ({})", counts),
            help: if summary.errors == 0 {
                Some("Warnings are denied; drop --deny-warnings to allow them".to_string())
            } else {
                None
            },
        });
    }

    printer.success("Finished", &counts);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_patch(path: &Path, top_marker: [u8; 4]) {
        let mut img = RgbaImage::from_pixel(5, 5, Rgba([0, 0, 0, 0]));
        img.put_pixel(2, 0, Rgba(top_marker));
        img.put_pixel(0, 2, Rgba([0, 0, 0, 255]));
        img.save(path).unwrap();
    }

    #[test]
    fn test_summary_failed() {
        let summary = CheckSummary {
            files: 1,
            errors: 0,
            warnings: 2,
        };
        assert!(!summary.failed(false));
        assert!(summary.failed(true));
    }

    #[test]
    fn test_check_file_clean() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ok.9.png");
        write_patch(&path, [0, 0, 0, 255]);

        let result = check_file(&path, &Config::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_check_file_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.9.png");
        write_patch(&path, [0, 255, 0, 255]);

        let result = check_file(&path, &Config::default());
        assert!(result.has_errors());
    }

    #[test]
    fn test_check_file_tolerance_from_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("near.9.png");
        write_patch(&path, [3, 3, 3, 255]);

        assert!(check_file(&path, &Config::default()).has_errors());

        let config = Config {
            tolerance: 3,
            ..Default::default()
        };
        assert!(check_file(&path, &config).is_ok());
    }

    #[test]
    fn test_check_file_unreadable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.9.png");
        std::fs::write(&path, b"garbage").unwrap();

        let result = check_file(&path, &Config::default());
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn test_run_fails_on_errors() {
        let dir = tempdir().unwrap();
        write_patch(&dir.path().join("ok.9.png"), [0, 0, 0, 255]);
        write_patch(&dir.path().join("bad.9.png"), [255, 255, 255, 255]);

        let args = CheckArgs {
            paths: vec![dir.path().to_path_buf()],
            config: None,
            deny_warnings: false,
        };
        let err = run(args, &Printer::new().quiet(true)).unwrap_err();
        assert!(matches!(err, NinePatchError::Validation { .. }));
    }

    #[test]
    fn test_run_with_config_file() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("res")).unwrap();
        write_patch(&dir.path().join("res/ok.9.png"), [0, 0, 0, 255]);
        write_patch(&dir.path().join("skipped.9.png"), [255, 255, 255, 255]);
        let config_path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&config_path, "sources:\n  - res\n").unwrap();

        let args = CheckArgs {
            paths: vec![],
            config: Some(config_path),
            deny_warnings: true,
        };
        assert!(run(args, &Printer::new().quiet(true)).is_ok());
    }
}
