use std::sync::Arc;

use image::RgbaImage;
use log::info;

use crate::{
    commands::{skin_processor::encode_png, validator::decode_skin},
    domain::{
        skin::{extract_face, extract_limbs_and_torso, symmetry::resolve_body, SkinTexture},
        totem::{assemble, composite},
    },
    infrastructure::http::SkinSource,
    shared::result::AppResult,
};

/// Face, body extraction, mirroring, panel assembly and final composite.
pub fn render_totem(skin: &SkinTexture) -> RgbaImage {
    let face = extract_face(skin);
    let body = resolve_body(extract_limbs_and_torso(skin));
    let pattern = assemble(&body);
    composite(&pattern, &face)
}

/// Decodes raw skin bytes and returns the totem as PNG bytes.
pub fn render_totem_png(skin_bytes: &[u8]) -> AppResult<Vec<u8>> {
    let skin = decode_skin(skin_bytes)?;
    encode_png(&render_totem(&skin))
}

#[derive(Clone)]
pub struct TotemService {
    source: Arc<dyn SkinSource>,
}

impl TotemService {
    pub fn new(source: Arc<dyn SkinSource>) -> Self {
        Self { source }
    }

    pub async fn generate(&self, username: &str) -> AppResult<Vec<u8>> {
        let skin_bytes = self.source.fetch(username).await?;
        let png = render_totem_png(&skin_bytes)?;
        info!("Rendered totem for {username} ({} bytes)", png.len());
        Ok(png)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{render_totem, render_totem_png, TotemService};
    use crate::{
        commands::skin_processor::encode_png,
        domain::skin::{
            regions::{Region, FACE, LEFT_ARM, LEFT_LEG, RIGHT_ARM, RIGHT_LEG, TORSO},
            SkinTexture,
        },
        infrastructure::http::SkinSource,
        shared::{error::TotemError, result::AppResult},
    };
    use async_trait::async_trait;
    use image::{Rgba, RgbaImage};
    use std::sync::Arc;

    pub const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);

    fn paint(image: &mut RgbaImage, region: Region, color: Rgba<u8>) {
        for y in region.y..region.y + region.height {
            for x in region.x..region.x + region.width {
                image.put_pixel(x, y, color);
            }
        }
    }

    /// A skin with a green right arm and no left arm art.
    pub fn one_armed_skin() -> RgbaImage {
        let mut skin = RgbaImage::new(64, 64);
        paint(&mut skin, FACE, Rgba([240, 200, 160, 255]));
        paint(&mut skin, TORSO, Rgba([30, 60, 200, 255]));
        paint(&mut skin, RIGHT_ARM, GREEN);
        paint(&mut skin, RIGHT_LEG, Rgba([90, 40, 10, 255]));
        paint(&mut skin, LEFT_LEG, Rgba([10, 40, 90, 255]));
        skin
    }

    pub struct StubSource(pub AppResult<Vec<u8>>);

    #[async_trait]
    impl SkinSource for StubSource {
        async fn fetch(&self, _username: &str) -> AppResult<Vec<u8>> {
            match &self.0 {
                Ok(bytes) => Ok(bytes.clone()),
                Err(err) => Err(TotemError::Fetch(err.to_string())),
            }
        }
    }

    #[test]
    fn totem_keeps_fixed_size_and_layout() {
        let skin = SkinTexture::new(one_armed_skin()).unwrap();
        let totem = render_totem(&skin);

        assert_eq!(totem.dimensions(), (32, 40));
        // face tile
        assert_eq!(totem.get_pixel(12, 14), &Rgba([240, 200, 160, 255]));
        assert_eq!(totem.get_pixel(19, 20), &Rgba([240, 200, 160, 255]));
        // mirrored left arm sliver at panel row 0
        for x in 9..12 {
            assert_eq!(totem.get_pixel(x, 21), &GREEN);
        }
        // right arm sliver
        for x in 20..23 {
            assert_eq!(totem.get_pixel(x, 21), &GREEN);
        }
        // nothing outside the face and panel rectangles
        for (x, y, pixel) in totem.enumerate_pixels() {
            let in_face = (12..20).contains(&x) && (14..22).contains(&y);
            let in_panel = (8..24).contains(&x) && (21..30).contains(&y);
            if !in_face && !in_panel {
                assert_eq!(pixel[3], 0, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn painted_left_arm_is_used_as_is() {
        let mut pixels = one_armed_skin();
        paint(&mut pixels, LEFT_ARM, Rgba([200, 0, 200, 255]));
        let totem = render_totem(&SkinTexture::new(pixels).unwrap());

        assert_eq!(totem.get_pixel(9, 21), &Rgba([200, 0, 200, 255]));
    }

    #[test]
    fn rendering_is_deterministic() {
        let png = encode_png(&one_armed_skin()).unwrap();
        let first = render_totem_png(&png).unwrap();
        let second = render_totem_png(&png).unwrap();

        assert_eq!(first, second);
        let decoded = image::load_from_memory(&first).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (32, 40));
    }

    #[tokio::test]
    async fn service_renders_fetched_skins() {
        let png = encode_png(&one_armed_skin()).unwrap();
        let service = TotemService::new(Arc::new(StubSource(Ok(png))));

        let totem = service.generate("Steve").await.unwrap();

        assert_eq!(&totem[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[tokio::test]
    async fn service_propagates_fetch_and_decode_failures() {
        let failing = TotemService::new(Arc::new(StubSource(Err(TotemError::Fetch(
            "HTTP 404".to_string(),
        )))));
        assert!(matches!(
            failing.generate("ghost").await,
            Err(TotemError::Fetch(_))
        ));

        let garbage = TotemService::new(Arc::new(StubSource(Ok(b"<html>".to_vec()))));
        assert!(matches!(
            garbage.generate("ghost").await,
            Err(TotemError::Decode(_))
        ));
    }
}
