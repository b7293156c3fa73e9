//! Border tick scanner.
//!
//! Walks the four border lines (corners excluded) and run-length encodes
//! consecutive pixels of identical classification into ticks.

use crate::types::{Bitmap, Colour, Edge, Tick, TickColour, TickSet};

/// Options controlling marker classification.
///
/// Built from `Config::scan_options` or the CLI `--tolerance` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanOptions {
    /// Per-channel tolerance when matching the black and red markers.
    pub tolerance: u8,
}

/// Scan all four edges with default options.
pub fn scan(bitmap: &Bitmap) -> TickSet {
    scan_with(bitmap, &ScanOptions::default())
}

/// Scan all four edges.
pub fn scan_with(bitmap: &Bitmap, options: &ScanOptions) -> TickSet {
    TickSet {
        top: scan_edge(bitmap, Edge::Top, options),
        left: scan_edge(bitmap, Edge::Left, options),
        right: scan_edge(bitmap, Edge::Right, options),
        bottom: scan_edge(bitmap, Edge::Bottom, options),
    }
}

/// Scan a single edge into an ordered tick list.
pub fn scan_edge(bitmap: &Bitmap, edge: Edge, options: &ScanOptions) -> Vec<Tick> {
    let (w, h) = (bitmap.width(), bitmap.height());
    let length = match edge {
        Edge::Top | Edge::Bottom => w - 2,
        Edge::Left | Edge::Right => h - 2,
    };

    let mut ticks: Vec<Tick> = Vec::new();

    for offset in 0..length {
        let (x, y) = match edge {
            Edge::Top => (offset + 1, 0),
            Edge::Bottom => (offset + 1, h - 1),
            Edge::Left => (0, offset + 1),
            Edge::Right => (w - 1, offset + 1),
        };
        let colour = classify(bitmap.pixel(x, y), edge, options.tolerance);

        match ticks.last_mut() {
            Some(last) if last.colour == colour => last.length += 1,
            _ => ticks.push(Tick::new(edge, offset, 1, colour)),
        }
    }

    ticks
}

/// Classify one border pixel for the given edge.
pub fn classify(pixel: Colour, edge: Edge, tolerance: u8) -> TickColour {
    if pixel.is_transparent() {
        return TickColour::Transparent;
    }

    if pixel.matches_marker(edge.marker(), tolerance) {
        if edge.is_stretch() {
            TickColour::Black
        } else {
            TickColour::Red
        }
    } else {
        TickColour::Other
    }
}
