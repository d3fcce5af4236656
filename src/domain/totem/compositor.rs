use image::RgbaImage;

pub const TOTEM_WIDTH: u32 = 32;
pub const TOTEM_HEIGHT: u32 = 40;

pub const PATTERN_OFFSET: (i64, i64) = (8, 21);
pub const FACE_OFFSET: (i64, i64) = (12, 14);

/// Pastes the body panel and then the face onto a transparent totem canvas,
/// each masked by its own alpha.
pub fn composite(pattern: &RgbaImage, face: &RgbaImage) -> RgbaImage {
    let mut canvas = RgbaImage::new(TOTEM_WIDTH, TOTEM_HEIGHT);
    paste_masked(&mut canvas, pattern, PATTERN_OFFSET.0, PATTERN_OFFSET.1);
    paste_masked(&mut canvas, face, FACE_OFFSET.0, FACE_OFFSET.1);
    canvas
}

/// Rounded `value / 255`.
fn div255(value: u32) -> u8 {
    let rounded = value + 128;
    (((rounded >> 8) + rounded) >> 8) as u8
}

/// Blends `src` into `canvas` at `(x, y)` using the source alpha as a mask.
///
/// Every channel, alpha included, becomes `dst * (255 - a) + src * a` over 255.
/// Pixels falling outside the canvas are skipped.
pub fn paste_masked(canvas: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let (width, height) = (i64::from(canvas.width()), i64::from(canvas.height()));
    for (sx, sy, pixel) in src.enumerate_pixels() {
        let (dx, dy) = (x + i64::from(sx), y + i64::from(sy));
        if dx < 0 || dy < 0 || dx >= width || dy >= height {
            continue;
        }
        let mask = u32::from(pixel[3]);
        if mask == 0 {
            continue;
        }
        let target = canvas.get_pixel_mut(dx as u32, dy as u32);
        for channel in 0..4 {
            let dst = u32::from(target[channel]);
            let top = u32::from(pixel[channel]);
            target[channel] = div255(dst * (255 - mask) + top * mask);
        }
    }
}
