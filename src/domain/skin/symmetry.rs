use image::{imageops, RgbaImage};

use super::regions::BodyRegions;

pub fn is_fully_transparent(image: &RgbaImage) -> bool {
    image.pixels().all(|pixel| pixel[3] == 0)
}

/// Returns `left` untouched unless every pixel of it is transparent, in which
/// case the mirrored `right` limb stands in for it.
pub fn resolve_limb(left: RgbaImage, right: &RgbaImage) -> RgbaImage {
    if is_fully_transparent(&left) {
        imageops::flip_horizontal(right)
    } else {
        left
    }
}

pub fn resolve(
    left_arm: RgbaImage,
    right_arm: &RgbaImage,
    left_leg: RgbaImage,
    right_leg: &RgbaImage,
) -> (RgbaImage, RgbaImage) {
    (
        resolve_limb(left_arm, right_arm),
        resolve_limb(left_leg, right_leg),
    )
}

/// Applies [`resolve`] to a full set of body regions. Right limbs pass through.
pub fn resolve_body(body: BodyRegions) -> BodyRegions {
    let BodyRegions {
        torso,
        right_arm,
        left_arm,
        right_leg,
        left_leg,
    } = body;
    let (left_arm, left_leg) = resolve(left_arm, &right_arm, left_leg, &right_leg);
    BodyRegions {
        torso,
        right_arm,
        left_arm,
        right_leg,
        left_leg,
    }
}
