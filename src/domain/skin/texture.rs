use image::RgbaImage;

use crate::shared::{error::TotemError, result::AppResult};

pub const SKIN_WIDTH: u32 = 64;
pub const SKIN_HEIGHT: u32 = 64;

/// A decoded skin in the modern 64x64 layout.
///
/// Construction rejects anything smaller, so every fixed-coordinate crop
/// taken from a `SkinTexture` is in bounds.
#[derive(Debug, Clone)]
pub struct SkinTexture {
    pixels: RgbaImage,
}

impl SkinTexture {
    pub fn new(pixels: RgbaImage) -> AppResult<Self> {
        let (width, height) = pixels.dimensions();
        if width < SKIN_WIDTH || height < SKIN_HEIGHT {
            return Err(TotemError::Geometry { width, height });
        }
        Ok(Self { pixels })
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}
