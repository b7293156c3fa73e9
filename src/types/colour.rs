//! Colour type and marker matching.

use std::fmt;

use serde::Serialize;

/// A straight-alpha RGBA pixel.
///
/// Only alpha 0 counts as transparent and only alpha 255 as opaque; the
/// scanner treats anything in between as an unreadable marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Colour { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Colour::new(r, g, b, u8::MAX)
    }

    /// An unmarked border pixel.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black, the stretch marker.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Red, the content marker.
    pub const RED: Self = Self::rgb(255, 0, 0);

    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Pack as `0xAARRGGBB`.
    pub fn to_argb(self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    pub fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }

    /// Opaque, with every RGB channel within `tolerance` of `target`.
    pub fn matches_marker(self, target: Colour, tolerance: u8) -> bool {
        self.is_opaque()
            && self.r.abs_diff(target.r) <= tolerance
            && self.g.abs_diff(target.g) <= tolerance
            && self.b.abs_diff(target.b) <= tolerance
    }
}

impl From<image::Rgba<u8>> for Colour {
    fn from(p: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Self::new(r, g, b, a)
    }
}

impl From<Colour> for image::Rgba<u8> {
    fn from(c: Colour) -> Self {
        image::Rgba(c.to_rgba())
    }
}

/// `#RRGGBB` for opaque pixels, `#RRGGBBAA` otherwise.
impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Colour { r, g, b, a } = *self;
        write!(f, "#{r:02X}{g:02X}{b:02X}")?;
        if !self.is_opaque() {
            write!(f, "{a:02X}")?;
        }
        Ok(())
    }
}
