use image::{
    imageops::{self, FilterType},
    RgbaImage,
};

use super::texture::SkinTexture;

/// Edge length of the face tile pasted onto the totem.
pub const FACE_TILE_SIZE: u32 = 8;

/// A rectangle in source-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Copies this rectangle out of `image`.
    pub fn crop(&self, image: &RgbaImage) -> RgbaImage {
        imageops::crop_imm(image, self.x, self.y, self.width, self.height).to_image()
    }
}

pub const FACE: Region = Region::new(8, 8, 8, 8);
pub const TORSO: Region = Region::new(20, 20, 8, 12);
pub const RIGHT_ARM: Region = Region::new(44, 20, 4, 12);
pub const LEFT_ARM: Region = Region::new(36, 52, 4, 12);
pub const RIGHT_LEG: Region = Region::new(4, 20, 4, 12);
pub const LEFT_LEG: Region = Region::new(20, 52, 4, 12);

/// Front faces of the torso and the four limbs.
#[derive(Debug, Clone)]
pub struct BodyRegions {
    pub torso: RgbaImage,
    pub right_arm: RgbaImage,
    pub left_arm: RgbaImage,
    pub right_leg: RgbaImage,
    pub left_leg: RgbaImage,
}

pub fn extract_face(skin: &SkinTexture) -> RgbaImage {
    let face = FACE.crop(skin.pixels());
    imageops::resize(&face, FACE_TILE_SIZE, FACE_TILE_SIZE, FilterType::Nearest)
}

pub fn extract_limbs_and_torso(skin: &SkinTexture) -> BodyRegions {
    let pixels = skin.pixels();
    BodyRegions {
        torso: TORSO.crop(pixels),
        right_arm: RIGHT_ARM.crop(pixels),
        left_arm: LEFT_ARM.crop(pixels),
        right_leg: RIGHT_LEG.crop(pixels),
        left_leg: LEFT_LEG.crop(pixels),
    }
}
