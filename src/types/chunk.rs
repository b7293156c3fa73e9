//! Chunk grid types.
//!
//! The interior of a nine-patch is cut into column bands (from the top
//! ticks) and row bands (from the left ticks). Every cell of that grid is a
//! [`Chunk`] whose kind combines the classification of its two bands.

use std::fmt;

use serde::Serialize;

use super::Rect;

/// How a chunk behaves when the image is resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    Fixed,
    Horizontal,
    Vertical,
    Both,
    /// Contradictory border evidence; never stretched.
    Corrupt,
}

impl ChunkKind {
    /// Combine a column band and a row band.
    pub fn from_bands(column: BandKind, row: BandKind) -> Self {
        match (column, row) {
            (BandKind::Corrupt, _) | (_, BandKind::Corrupt) => ChunkKind::Corrupt,
            (BandKind::Stretch, BandKind::Stretch) => ChunkKind::Both,
            (BandKind::Stretch, BandKind::Fixed) => ChunkKind::Horizontal,
            (BandKind::Fixed, BandKind::Stretch) => ChunkKind::Vertical,
            (BandKind::Fixed, BandKind::Fixed) => ChunkKind::Fixed,
        }
    }

    /// Whether the chunk widens with the destination.
    pub fn stretches_horizontally(self) -> bool {
        matches!(self, ChunkKind::Horizontal | ChunkKind::Both)
    }

    /// Whether the chunk grows taller with the destination.
    pub fn stretches_vertically(self) -> bool {
        matches!(self, ChunkKind::Vertical | ChunkKind::Both)
    }

    /// Whether the border evidence for this chunk is contradictory.
    pub fn is_corrupt(self) -> bool {
        self == ChunkKind::Corrupt
    }

    /// Single-letter code used in grid dumps.
    pub fn glyph(self) -> char {
        match self {
            ChunkKind::Fixed => 'F',
            ChunkKind::Horizontal => 'H',
            ChunkKind::Vertical => 'V',
            ChunkKind::Both => 'B',
            ChunkKind::Corrupt => 'X',
        }
    }
}

/// Classification of a single row or column band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BandKind {
    Fixed,
    Stretch,
    Corrupt,
}

/// One slice of the interior along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Band {
    pub start: u32,
    pub length: u32,
    pub kind: BandKind,
}

impl Band {
    pub fn end(&self) -> u32 {
        self.start + self.length
    }
}

/// One cell of the chunk grid, in interior coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chunk {
    pub rect: Rect,
    pub kind: ChunkKind,
}

/// The `rows x cols` chunk grid of a nine-patch interior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChunkGrid {
    columns: Vec<Band>,
    rows: Vec<Band>,
    chunks: Vec<Vec<Chunk>>,
}

impl ChunkGrid {
    /// Assemble a grid from its column and row bands.
    pub fn from_bands(columns: Vec<Band>, rows: Vec<Band>) -> Self {
        let chunks = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| Chunk {
                        rect: Rect::new(col.start, row.start, col.length, row.length),
                        kind: ChunkKind::from_bands(col.kind, row.kind),
                    })
                    .collect()
            })
            .collect();

        Self {
            columns,
            rows,
            chunks,
        }
    }

    /// Number of row bands.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of column bands.
    pub fn col_count(&self) -> usize {
        self.columns.len()
    }

    /// Column bands, left to right.
    pub fn column_bands(&self) -> &[Band] {
        &self.columns
    }

    /// Row bands, top to bottom.
    pub fn row_bands(&self) -> &[Band] {
        &self.rows
    }

    /// Chunks indexed `[row][col]`.
    pub fn chunks(&self) -> &[Vec<Chunk>] {
        &self.chunks
    }

    /// Get the chunk at a grid position.
    pub fn get(&self, row: usize, col: usize) -> Option<&Chunk> {
        self.chunks.get(row).and_then(|r| r.get(col))
    }

    /// Interior size covered by the grid.
    pub fn size(&self) -> (u32, u32) {
        let w = self.columns.last().map_or(0, |b| b.end());
        let h = self.rows.last().map_or(0, |b| b.end());
        (w, h)
    }

    /// Iterate over all chunks with their `(row, col)` position.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Chunk)> + '_ {
        self.chunks.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, chunk)| (r, c, chunk))
        })
    }

    /// Positions of every corrupt chunk, row-major.
    pub fn corrupt_chunks(&self) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|(_, _, chunk)| chunk.kind.is_corrupt())
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    /// Check if any chunk is corrupt.
    pub fn has_corruption(&self) -> bool {
        self.iter().any(|(_, _, chunk)| chunk.kind.is_corrupt())
    }
}

impl fmt::Display for ChunkGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.chunks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().map(|c| c.kind.glyph()).collect();
            f.write_str(&line)?;
        }
        Ok(())
    }
}
