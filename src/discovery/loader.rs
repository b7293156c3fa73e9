//! Loading nine-patch sources from disk.

use std::path::Path;

use crate::engine::{NinePatchImage, ScanOptions};
use crate::error::{NinePatchError, Result};
use crate::types::Bitmap;

/// Decode an image file into a bitmap.
pub fn load_bitmap(path: &Path) -> Result<Bitmap> {
    if !path.exists() {
        return Err(NinePatchError::Io {
            path: path.to_path_buf(),
            message: "File not found".to_string(),
        });
    }

    let img = image::open(path)
        .map_err(|e| NinePatchError::Image {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgba8();

    Bitmap::from_rgba(&img)
}

/// Decode an image file into a nine-patch image.
pub fn load_image(path: &Path, options: ScanOptions) -> Result<NinePatchImage> {
    Ok(NinePatchImage::with_options(load_bitmap(path)?, options))
}
