//! Compiled chunk table.
//!
//! The runtime form of a nine-patch: stretch divisions per axis, content
//! padding, and one colour hint per chunk so renderers can skip uniform
//! regions.

use serde::Serialize;

use crate::error::{NinePatchError, Result};
use crate::types::{Band, BandKind, Bitmap, ChunkGrid, Rect};

use super::content::Padding;
use super::regions::{region_colour, RegionColour};

/// Colour hint for a fully transparent chunk.
pub const TRANSPARENT_COLOR: u32 = 0x0000_0000;

/// Colour hint for a chunk without a single colour.
pub const NO_COLOR: u32 = 0x0000_0001;

/// A compiled nine-patch chunk table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkTable {
    /// Start/end pairs of the stretching column bands.
    pub x_divs: Vec<u32>,
    /// Start/end pairs of the stretching row bands.
    pub y_divs: Vec<u32>,
    pub padding: Padding,
    /// One colour hint per chunk, row-major.
    pub colours: Vec<u32>,
}

/// Compile a chunk table. Refuses grids that contain corrupt chunks.
pub fn compile(bitmap: &Bitmap, grid: &ChunkGrid, content: Rect) -> Result<ChunkTable> {
    let corrupt = grid.corrupt_chunks();
    if !corrupt.is_empty() {
        return Err(NinePatchError::Corrupt {
            count: corrupt.len(),
        });
    }

    let (w, h) = bitmap.interior_size();
    let colours = grid
        .iter()
        .map(|(_, _, chunk)| encode_colour(region_colour(bitmap, chunk.rect)))
        .collect();

    Ok(ChunkTable {
        x_divs: divs(grid.column_bands()),
        y_divs: divs(grid.row_bands()),
        padding: Padding::from_content(content, w, h),
        colours,
    })
}

fn divs(bands: &[Band]) -> Vec<u32> {
    bands
        .iter()
        .filter(|b| b.kind == BandKind::Stretch)
        .flat_map(|b| [b.start, b.end()])
        .collect()
}

fn encode_colour(colour: RegionColour) -> u32 {
    match colour {
        RegionColour::Transparent => TRANSPARENT_COLOR,
        RegionColour::Mixed => NO_COLOR,
        RegionColour::Solid(c) => c.to_argb(),
    }
}
