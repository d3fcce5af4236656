use image::{codecs::png::PngEncoder, ColorType, ImageEncoder, RgbaImage};

use crate::shared::{error::TotemError, result::AppResult};

/// Lossless RGBA8 PNG encoding of a rendered image.
pub fn encode_png(image: &RgbaImage) -> AppResult<Vec<u8>> {
    let (width, height) = image.dimensions();

    let mut output = Vec::<u8>::new();
    let encoder = PngEncoder::new(&mut output);
    encoder
        .write_image(image, width, height, ColorType::Rgba8.into())
        .map_err(|err| TotemError::Encode(format!("PNG encoding failed: {err}")))?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::encode_png;
    use image::{Rgba, RgbaImage};

    #[test]
    fn alpha_survives_encoding() {
        let mut image = RgbaImage::new(3, 2);
        image.put_pixel(0, 0, Rgba([10, 20, 30, 0]));
        image.put_pixel(1, 0, Rgba([10, 20, 30, 128]));
        image.put_pixel(2, 1, Rgba([10, 20, 30, 255]));

        let png = encode_png(&image).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();

        assert_eq!(decoded, image);
    }

    #[test]
    fn encoding_is_deterministic() {
        let image = RgbaImage::from_fn(32, 40, |x, y| Rgba([x as u8, y as u8, 7, 255]));
        assert_eq!(encode_png(&image).unwrap(), encode_png(&image).unwrap());
    }
}
