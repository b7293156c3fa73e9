//! Validation checks for a nine-patch.
//!
//! Each check inspects one derived artifact and returns a `ValidationResult`.

use crate::types::{BandKind, ChunkGrid, Edge, TickSet};

use super::warning::{Diagnostic, ValidationResult};

pub const MALFORMED_TICK: &str = "ninepatch::validate::malformed-tick";
pub const CORRUPT_CHUNK: &str = "ninepatch::validate::corrupt-chunk";
pub const BAD_PATCH: &str = "ninepatch::validate::bad-patch";
pub const NO_STRETCH: &str = "ninepatch::validate::no-stretch";

/// Report every border run that is neither transparent nor the edge's marker.
pub fn check_malformed_ticks(ticks: &TickSet) -> ValidationResult {
    let mut result = ValidationResult::new();

    for tick in ticks.malformed() {
        let help = match tick.edge {
            Edge::Top | Edge::Left => "Stretch markers must be opaque black (#000000)",
            Edge::Right | Edge::Bottom => "Content markers must be opaque red (#FF0000)",
        };
        result.push(
            Diagnostic::error(
                MALFORMED_TICK,
                format!(
                    "Malformed {} tick at {}..{}",
                    tick.edge,
                    tick.start,
                    tick.end()
                ),
            )
            .with_help(help),
        );
    }

    result
}

/// Report every chunk whose border evidence is contradictory.
pub fn check_corrupt_chunks(grid: &ChunkGrid) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (row, col) in grid.corrupt_chunks() {
        if let Some(chunk) = grid.get(row, col) {
            result.push(
                Diagnostic::error(
                    CORRUPT_CHUNK,
                    format!("Chunk ({}, {}) at {} is corrupt", row, col, chunk.rect),
                )
                .with_help("Its row or column band has malformed, overlapping or out-of-range ticks")
                .with_region(chunk.rect),
            );
        }
    }

    result
}

/// Warn about stretchable chunks whose pixels would smear.
///
/// `bad` holds the positions found by [`crate::engine::find_bad_patches`].
pub fn check_bad_patches(grid: &ChunkGrid, bad: &[(usize, usize)]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for &(row, col) in bad {
        if let Some(chunk) = grid.get(row, col) {
            result.push(
                Diagnostic::warning(
                    BAD_PATCH,
                    format!(
                        "Stretchable chunk ({}, {}) at {} is not uniform along its stretch axis",
                        row, col, chunk.rect
                    ),
                )
                .with_help("Stretched regions should repeat the same pixels along the stretch direction")
                .with_region(chunk.rect),
            );
        }
    }

    result
}

/// Warn when no band stretches on either axis.
pub fn check_no_stretch(grid: &ChunkGrid) -> ValidationResult {
    let mut result = ValidationResult::new();

    let stretches = grid
        .column_bands()
        .iter()
        .chain(grid.row_bands())
        .any(|b| b.kind == BandKind::Stretch);

    if !stretches {
        result.push(
            Diagnostic::warning(NO_STRETCH, "Nine-patch has no stretchable region")
                .with_help("Paint black ticks on the top or left border to mark stretch bands"),
        );
    }

    result
}
