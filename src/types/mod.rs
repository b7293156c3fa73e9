//! Core domain types for the nine-patch engine.
//!
//! - `Colour` - RGBA colour values
//! - `Bitmap` - the source pixel buffer, border included
//! - `Tick` / `TickSet` - run-length encoded border markers
//! - `Chunk` / `ChunkGrid` - the classified interior grid

mod bitmap;
mod chunk;
mod colour;
mod rect;
mod tick;

pub use bitmap::{Bitmap, MIN_SIDE};
pub use chunk::{Band, BandKind, Chunk, ChunkGrid, ChunkKind};
pub use colour::Colour;
pub use rect::Rect;
pub use tick::{Edge, Tick, TickColour, TickSet};
