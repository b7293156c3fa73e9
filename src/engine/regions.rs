//! Pixel analysis of chunk regions.

use serde::Serialize;

use crate::types::{Bitmap, ChunkGrid, Colour, Rect};

/// Summary of the source pixels inside one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionColour {
    /// Every pixel has alpha 0.
    Transparent,
    /// Every pixel has this exact colour.
    Solid(Colour),
    /// Anything else.
    Mixed,
}

/// Classify the pixels of an interior rectangle.
///
/// Only the part of `rect` inside the interior is read; a rectangle wholly
/// outside it covers no pixels and reads as transparent.
pub fn region_colour(bitmap: &Bitmap, rect: Rect) -> RegionColour {
    let rect = rect.intersection(&bitmap.interior_bounds());
    if rect.is_empty() {
        return RegionColour::Transparent;
    }

    let first = bitmap.interior_at(rect.x, rect.y);
    let mut all_transparent = true;
    let mut all_same = true;

    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            let p = bitmap.interior_at(x, y);
            all_transparent &= p.is_transparent();
            all_same &= p == first;
            if !all_transparent && !all_same {
                return RegionColour::Mixed;
            }
        }
    }

    if all_transparent {
        RegionColour::Transparent
    } else {
        RegionColour::Solid(first)
    }
}

/// Find stretchable chunks whose pixels would smear when scaled.
///
/// A chunk that stretches horizontally must have identical columns, and one
/// that stretches vertically must have identical rows.
pub fn find_bad_patches(bitmap: &Bitmap, grid: &ChunkGrid) -> Vec<(usize, usize)> {
    grid.iter()
        .filter(|(_, _, chunk)| {
            let r = chunk.rect.intersection(&bitmap.interior_bounds());
            (chunk.kind.stretches_horizontally() && !columns_uniform(bitmap, r))
                || (chunk.kind.stretches_vertically() && !rows_uniform(bitmap, r))
        })
        .map(|(row, col, _)| (row, col))
        .collect()
}

fn columns_uniform(bitmap: &Bitmap, r: Rect) -> bool {
    (r.y..r.bottom()).all(|y| {
        let first = bitmap.interior_at(r.x, y);
        (r.x..r.right()).all(|x| bitmap.interior_at(x, y) == first)
    })
}

fn rows_uniform(bitmap: &Bitmap, r: Rect) -> bool {
    (r.x..r.right()).all(|x| {
        let first = bitmap.interior_at(x, r.y);
        (r.y..r.bottom()).all(|y| bitmap.interior_at(x, y) == first)
    })
}
