//! The nine-patch image facade.
//!
//! Owns the pixel buffer and everything derived from it. Border writes only
//! set the dirty flag; the next read reruns the whole pipeline (scan, build,
//! resolve) before answering. Reads take `&mut self` for that reason.

use crate::error::{NinePatchError, Result};
use crate::types::{Bitmap, ChunkGrid, Colour, Rect, TickSet};

use super::builder;
use super::compile::{self, ChunkTable};
use super::content::{self, Padding};
use super::projection::{self, Projections};
use super::regions;
use super::scanner::{self, ScanOptions};

/// A nine-patch bitmap with lazily recomputed chunk data.
#[derive(Debug, Clone)]
pub struct NinePatchImage {
    bitmap: Bitmap,
    options: ScanOptions,
    dirty: bool,
    ticks: TickSet,
    grid: ChunkGrid,
    content: Rect,
    /// Most recent projection, keyed by its requested size.
    projection: Option<Projections>,
}

impl NinePatchImage {
    /// Wrap a bitmap. Derived state is computed on first read.
    pub fn new(bitmap: Bitmap) -> Self {
        Self::with_options(bitmap, ScanOptions::default())
    }

    pub fn with_options(bitmap: Bitmap, options: ScanOptions) -> Self {
        Self {
            bitmap,
            options,
            dirty: true,
            ticks: TickSet::default(),
            grid: ChunkGrid::default(),
            content: Rect::default(),
            projection: None,
        }
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn into_bitmap(self) -> Bitmap {
        self.bitmap
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Change the scan options. Marks derived state dirty.
    pub fn set_options(&mut self, options: ScanOptions) {
        if options != self.options {
            self.options = options;
            self.dirty = true;
        }
    }

    /// Whether the next read will recompute.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Paint a border tick pixel.
    ///
    /// Fails with [`NinePatchError::NotOnBorder`] for corners and interior
    /// pixels, which never carry tick information.
    pub fn set_patch(&mut self, x: u32, y: u32, colour: Colour) -> Result<()> {
        if !self.bitmap.is_tick_pixel(x, y) {
            return Err(NinePatchError::NotOnBorder { x, y });
        }
        self.bitmap.set(x, y, colour);
        self.dirty = true;
        Ok(())
    }

    /// Clear a border tick pixel to transparent.
    pub fn erase(&mut self, x: u32, y: u32) -> Result<()> {
        self.set_patch(x, y, Colour::TRANSPARENT)
    }

    /// Rerun the pipeline if anything changed since the last read.
    pub fn refresh(&mut self) {
        if !self.dirty {
            return;
        }

        let ticks = scanner::scan_with(&self.bitmap, &self.options);
        self.grid = builder::build(&self.bitmap, &ticks.top, &ticks.left);
        self.content = content::resolve(
            &ticks.right,
            &ticks.bottom,
            self.bitmap.width(),
            self.bitmap.height(),
        );
        self.ticks = ticks;
        self.projection = None;
        self.dirty = false;
    }

    pub fn ticks(&mut self) -> &TickSet {
        self.refresh();
        &self.ticks
    }

    pub fn chunk_grid(&mut self) -> &ChunkGrid {
        self.refresh();
        &self.grid
    }

    /// Positions of the corrupt chunks, row-major.
    pub fn corrupt_chunks(&mut self) -> Vec<(usize, usize)> {
        self.chunk_grid().corrupt_chunks()
    }

    pub fn content_area(&mut self) -> Rect {
        self.refresh();
        self.content
    }

    pub fn padding(&mut self) -> Padding {
        let content = self.content_area();
        let (w, h) = self.bitmap.interior_size();
        Padding::from_content(content, w, h)
    }

    /// Projections for a destination size. The last result is cached until
    /// the size or the border changes.
    pub fn projections(&mut self, dest_w: u32, dest_h: u32) -> &Projections {
        self.refresh();

        let stale = self
            .projection
            .as_ref()
            .map_or(true, |p| p.requested_size() != (dest_w, dest_h));
        if stale {
            self.projection = None;
        }

        let grid = &self.grid;
        self.projection
            .get_or_insert_with(|| projection::project(grid, dest_w, dest_h))
    }

    /// Stretchable chunks whose pixels would smear when scaled.
    pub fn bad_patches(&mut self) -> Vec<(usize, usize)> {
        self.refresh();
        regions::find_bad_patches(&self.bitmap, &self.grid)
    }

    /// Compile the runtime chunk table. Fails when any chunk is corrupt.
    pub fn chunk_table(&mut self) -> Result<ChunkTable> {
        self.refresh();
        compile::compile(&self.bitmap, &self.grid, self.content)
    }
}
