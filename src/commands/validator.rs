use log::debug;

use crate::{
    domain::skin::SkinTexture,
    shared::{error::TotemError, result::AppResult},
};

pub const MAX_USERNAME_LEN: usize = 36;

/// Pulls `username` out of a request body.
///
/// Anything that is not a JSON object carrying the key counts as missing.
/// The accepted alphabet covers player names and dashed UUIDs, so the value
/// can go into the lookup URL and the download filename unescaped.
pub fn extract_username(body: &[u8]) -> AppResult<String> {
    let payload = serde_json::from_slice::<serde_json::Value>(body)
        .map_err(|_| TotemError::MissingUsername)?;
    let value = payload
        .get("username")
        .filter(|value| !value.is_null())
        .ok_or(TotemError::MissingUsername)?;
    let username = value
        .as_str()
        .ok_or_else(|| TotemError::InvalidUsername("expected a string".to_string()))?;
    validate_username(username)
}

pub fn validate_username(value: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TotemError::InvalidUsername("value is empty".to_string()));
    }
    if trimmed.len() > MAX_USERNAME_LEN {
        return Err(TotemError::InvalidUsername(format!(
            "longer than {MAX_USERNAME_LEN} characters"
        )));
    }
    if !trimmed
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
    {
        return Err(TotemError::InvalidUsername(
            "only letters, digits, '_' and '-' are allowed".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Decodes fetched bytes into a skin texture.
pub fn decode_skin(bytes: &[u8]) -> AppResult<SkinTexture> {
    let format = image::guess_format(bytes)
        .map_err(|err| TotemError::Decode(format!("unrecognised image format: {err}")))?;
    let image = image::load_from_memory_with_format(bytes, format)
        .map_err(|err| TotemError::Decode(format!("could not read image: {err}")))?;
    let skin = SkinTexture::new(image.to_rgba8())?;
    let (width, height) = skin.dimensions();
    debug!("Decoded {width}x{height} skin texture");
    Ok(skin)
}
