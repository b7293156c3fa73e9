//! Projection of the chunk grid onto a destination size.
//!
//! Fixed bands keep their source extent. Elastic bands share whatever is
//! left of the destination extent, weighted by their source extent. A band
//! is elastic only when every chunk in it stretches along that axis, so a
//! corrupt chunk pins its whole row and column to source size.
//!
//! A corrupt row band therefore stops every column from stretching, and a
//! corrupt column band stops every row: valid `Horizontal` or `Vertical`
//! chunks elsewhere keep their kind but are projected at source size.

use serde::Serialize;

use crate::types::{ChunkGrid, Rect};

/// Source and destination rectangles for one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub src: Rect,
    pub dest: Rect,
}

impl Projection {
    pub fn is_identity(&self) -> bool {
        self.src == self.dest
    }
}

/// Per-chunk projections for one requested destination size, `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projections {
    requested: (u32, u32),
    size: (u32, u32),
    rows: Vec<Vec<Projection>>,
}

impl Projections {
    /// The destination size this was computed for.
    pub fn requested_size(&self) -> (u32, u32) {
        self.requested
    }

    /// The destination size actually covered by the chunks.
    ///
    /// Differs from the requested size when an axis has no elastic band, or
    /// when the fixed bands alone exceed the request.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn rows(&self) -> &[Vec<Projection>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Projection> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projection> {
        self.rows.iter().flatten()
    }
}

/// Project every chunk of `grid` onto a `dest_w x dest_h` destination.
pub fn project(grid: &ChunkGrid, dest_w: u32, dest_h: u32) -> Projections {
    let chunks = grid.chunks();

    let column_elastic: Vec<bool> = (0..grid.col_count())
        .map(|c| chunks.iter().all(|row| row[c].kind.stretches_horizontally()))
        .collect();
    let row_elastic: Vec<bool> = chunks
        .iter()
        .map(|row| row.iter().all(|chunk| chunk.kind.stretches_vertically()))
        .collect();

    let column_src: Vec<u32> = grid.column_bands().iter().map(|b| b.length).collect();
    let row_src: Vec<u32> = grid.row_bands().iter().map(|b| b.length).collect();

    let column_dest = distribute(&column_src, &column_elastic, dest_w);
    let row_dest = distribute(&row_src, &row_elastic, dest_h);

    let column_origin = origins(&column_dest);
    let row_origin = origins(&row_dest);

    let rows = chunks
        .iter()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, chunk)| Projection {
                    src: chunk.rect,
                    dest: Rect::new(column_origin[c], row_origin[r], column_dest[c], row_dest[r]),
                })
                .collect()
        })
        .collect();

    Projections {
        requested: (dest_w, dest_h),
        size: (column_dest.iter().sum(), row_dest.iter().sum()),
        rows,
    }
}

/// Destination extents for the bands of one axis.
///
/// Elastic shares use cumulative rounding, so they always sum to the
/// distributable space and each lands within 1 px of its exact share.
pub fn distribute(src: &[u32], elastic: &[bool], dest: u32) -> Vec<u32> {
    let (mut fixed, mut elastic_total) = (0u64, 0u64);
    for (&s, &e) in src.iter().zip(elastic) {
        if e {
            elastic_total += s as u64;
        } else {
            fixed += s as u64;
        }
    }

    if elastic_total == 0 {
        return src.to_vec();
    }

    let extra = (dest as u64).saturating_sub(fixed);
    let mut cumulative = 0u64;
    let mut placed = 0u64;

    src.iter()
        .zip(elastic)
        .map(|(&s, &e)| {
            if !e {
                return s;
            }
            cumulative += s as u64;
            let target = (2 * extra * cumulative + elastic_total) / (2 * elastic_total);
            let share = target - placed;
            placed = target;
            share as u32
        })
        .collect()
}

fn origins(extents: &[u32]) -> Vec<u32> {
    extents
        .iter()
        .scan(0u32, |acc, &e| {
            let origin = *acc;
            *acc += e;
            Some(origin)
        })
        .collect()
}
