//! Validation of nine-patch border encodings.
//!
//! Turns the data-quality values the engine produces (malformed ticks,
//! corrupt chunks, smearing patches) into diagnostics, so a caller can
//! decide between warning the user and refusing to export.

mod checks;
mod warning;

pub use checks::{BAD_PATCH, CORRUPT_CHUNK, MALFORMED_TICK, NO_STRETCH};
pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::engine::NinePatchImage;

/// Run all validation checks against an image.
pub fn validate_image(image: &mut NinePatchImage) -> ValidationResult {
    let mut result = ValidationResult::new();
    result.merge(checks::check_malformed_ticks(image.ticks()));

    let bad = image.bad_patches();
    let grid = image.chunk_grid();
    result.merge(checks::check_corrupt_chunks(grid));
    result.merge(checks::check_bad_patches(grid, &bad));
    result.merge(checks::check_no_stretch(grid));

    result
}
