//! Owned RGBA pixel buffer including the one-pixel marker border.

use image::RgbaImage;

use crate::error::{NinePatchError, Result};

use super::{Colour, Rect};

/// Smallest legal side: one border pixel on each side plus one interior pixel.
pub const MIN_SIDE: u32 = 3;

/// A nine-patch source bitmap (row-major, border included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl Bitmap {
    /// Create a bitmap from a row-major pixel buffer.
    pub fn new(width: u32, height: u32, pixels: Vec<Colour>) -> Result<Self> {
        if width < MIN_SIDE || height < MIN_SIDE {
            return Err(NinePatchError::InvalidBitmap {
                message: format!(
                    "{}x{} is too small for a nine-patch (minimum {}x{})",
                    width, height, MIN_SIDE, MIN_SIDE
                ),
                help: Some(
                    "A nine-patch needs a 1-px border on every side and at least one interior pixel"
                        .to_string(),
                ),
            });
        }

        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(NinePatchError::InvalidBitmap {
                message: format!(
                    "buffer holds {} pixels, expected {} for {}x{}",
                    pixels.len(),
                    expected,
                    width,
                    height
                ),
                help: None,
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a bitmap filled with a single colour.
    pub fn filled(width: u32, height: u32, colour: Colour) -> Result<Self> {
        Self::new(
            width,
            height,
            vec![colour; width as usize * height as usize],
        )
    }

    /// Create a bitmap from a decoded RGBA image.
    pub fn from_rgba(img: &RgbaImage) -> Result<Self> {
        let pixels = img.pixels().map(|&p| Colour::from(p)).collect();
        Self::new(img.width(), img.height(), pixels)
    }

    /// Convert back to an `image` buffer.
    pub fn to_rgba(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| self.pixel(x, y).into())
    }

    /// Width including the border.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height including the border.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Interior size as (width, height).
    pub fn interior_size(&self) -> (u32, u32) {
        (self.width - 2, self.height - 2)
    }

    /// Interior region in bitmap coordinates.
    pub fn interior(&self) -> Rect {
        let (w, h) = self.interior_size();
        Rect::new(1, 1, w, h)
    }

    /// Get a pixel, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a pixel known to be in bounds.
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Colour {
        self.pixels[self.index(x, y)]
    }

    /// The interior in its own coordinates, origin at (0, 0).
    pub fn interior_bounds(&self) -> Rect {
        let (w, h) = self.interior_size();
        Rect::new(0, 0, w, h)
    }

    /// Get a pixel by interior coordinates, or `None` outside the interior.
    pub fn interior_pixel(&self, x: u32, y: u32) -> Option<Colour> {
        self.interior_bounds()
            .contains(x, y)
            .then(|| self.interior_at(x, y))
    }

    /// Interior pixel already known to lie inside `interior_bounds()`.
    pub(crate) fn interior_at(&self, x: u32, y: u32) -> Colour {
        self.pixel(x + 1, y + 1)
    }

    /// Overwrite a pixel. Returns `false` when out of bounds.
    pub fn set(&mut self, x: u32, y: u32, colour: Colour) -> bool {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.pixels[idx] = colour;
            true
        } else {
            false
        }
    }

    /// Check whether a pixel lies on the border but is not a corner.
    pub fn is_tick_pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let on_vertical_edge = x == 0 || x == self.width - 1;
        let on_horizontal_edge = y == 0 || y == self.height - 1;
        on_vertical_edge != on_horizontal_edge
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
