//! The nine-patch engine.
//!
//! Pipeline, leaves first:
//! - `scanner` - border pixels to ticks
//! - `builder` - top/left ticks to a classified chunk grid
//! - `content` - right/bottom ticks to the content rectangle
//! - `projection` - chunk grid to destination rectangles
//!
//! `NinePatchImage` ties them together behind a dirty flag.

pub mod builder;
pub mod compile;
pub mod content;
mod nine_patch;
pub mod projection;
pub mod regions;
pub mod scanner;

pub use builder::build;
pub use compile::{compile, ChunkTable, NO_COLOR, TRANSPARENT_COLOR};
pub use content::{resolve, Padding};
pub use nine_patch::NinePatchImage;
pub use projection::{project, Projection, Projections};
pub use regions::{find_bad_patches, region_colour, RegionColour};
pub use scanner::{scan, scan_with, ScanOptions};
