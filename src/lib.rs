//! ninepatch - nine-patch chunk and projection engine
//!
//! Reads the one-pixel marker border of a nine-patch bitmap, cuts the
//! interior into a classified chunk grid, resolves the content area, and
//! projects the chunks onto any destination size. Malformed borders are
//! reported as values (`Other` ticks, `Corrupt` chunks), never guessed at.

pub mod cli;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod output;
pub mod types;
pub mod validation;

pub use discovery::{discover, discover_paths, load_bitmap, load_image, Config, DiscoveryResult};
pub use engine::{
    ChunkTable, NinePatchImage, Padding, Projection, Projections, RegionColour, ScanOptions,
};
pub use error::{NinePatchError, Result};
pub use types::{
    Band, BandKind, Bitmap, Chunk, ChunkGrid, ChunkKind, Colour, Edge, Rect, Tick, TickColour,
    TickSet,
};
pub use validation::{validate_image, Diagnostic, Severity, ValidationResult};
