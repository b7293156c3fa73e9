//! Chunk grid builder.
//!
//! Slices the interior into column bands (from the top ticks) and row
//! bands (from the left ticks), classifies every band, and combines the two
//! classifications into a chunk kind per cell.
//!
//! A band is `Corrupt` when its tick evidence cannot be read as a single
//! stretch decision:
//! - an `Other` tick (or a non-black tick on a stretch edge) overlaps it
//! - two ticks overlap it, which means they overlap each other
//! - a zero-length tick sits on it
//! - a tick runs past the interior and had its boundary clamped onto it
//!
//! Corruption is confined to the cells whose own row or column band is
//! corrupt; neighbouring cells keep their classification. Projection is
//! stricter: a corrupt band keeps every crossing band at source size (see
//! `projection`).

use crate::types::{Band, BandKind, Bitmap, ChunkGrid, Tick, TickColour};

/// Build the chunk grid for a bitmap from its top and left ticks.
pub fn build(bitmap: &Bitmap, top: &[Tick], left: &[Tick]) -> ChunkGrid {
    let (width, height) = bitmap.interior_size();
    build_for_interior(width, height, top, left)
}

/// Build the chunk grid for an interior of the given size.
pub fn build_for_interior(width: u32, height: u32, top: &[Tick], left: &[Tick]) -> ChunkGrid {
    ChunkGrid::from_bands(axis_bands(top, width), axis_bands(left, height))
}

/// Sorted, deduplicated band boundaries along one axis.
///
/// Always contains `0` and `extent`; tick boundaries past the interior are
/// clamped to `extent`.
pub fn partition(ticks: &[Tick], extent: u32) -> Vec<u32> {
    let mut offsets = vec![0, extent];
    for tick in ticks.iter().filter(|t| !t.colour.is_transparent()) {
        offsets.push(tick.start.min(extent));
        offsets.push(tick.end().min(extent));
    }
    offsets.sort_unstable();
    offsets.dedup();
    offsets
}

/// Classify every band of one axis.
pub fn axis_bands(ticks: &[Tick], extent: u32) -> Vec<Band> {
    let offsets = partition(ticks, extent);
    let mut bands: Vec<Band> = offsets
        .windows(2)
        .map(|w| Band {
            start: w[0],
            length: w[1] - w[0],
            kind: classify_band(ticks, w[0], w[1]),
        })
        .collect();

    for tick in ticks.iter().filter(|t| !t.colour.is_transparent()) {
        if tick.length == 0 {
            mark_corrupt_at(&mut bands, tick.start);
        }
        if tick.end() > extent {
            mark_corrupt_at(&mut bands, extent.saturating_sub(1));
        }
    }

    bands
}

fn classify_band(ticks: &[Tick], start: u32, end: u32) -> BandKind {
    let mut overlapping = ticks
        .iter()
        .filter(|t| !t.colour.is_transparent() && t.overlaps(start, end));

    match (overlapping.next(), overlapping.next()) {
        (None, _) => BandKind::Fixed,
        (Some(tick), None) if tick.colour == TickColour::Black && tick.covers(start, end) => {
            BandKind::Stretch
        }
        _ => BandKind::Corrupt,
    }
}

/// Mark the band containing `offset` (or the last band) corrupt.
fn mark_corrupt_at(bands: &mut [Band], offset: u32) {
    let idx = bands
        .iter()
        .position(|b| offset >= b.start && offset < b.end())
        .unwrap_or(bands.len().saturating_sub(1));
    if let Some(band) = bands.get_mut(idx) {
        band.kind = BandKind::Corrupt;
    }
}
