//! PNG / data URL encoding for finished canvases

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use crate::errors::RenderError;

pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Encode the canvas as PNG bytes
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Encode the canvas as a `data:image/png;base64,` URL
pub fn encode_data_url(image: &RgbaImage) -> Result<String, RenderError> {
    let png = encode_png(image)?;
    Ok(format!("{}{}", DATA_URL_PREFIX, BASE64.encode(png)))
}
