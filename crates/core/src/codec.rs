//! Image decode / encode helpers.
//!
//! Uploads may arrive as PNG or JPEG; everything leaving the system (both the
//! bytes sent to the matching service and the annotated response) is JPEG.

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use crate::error::CoreError;

/// MIME type of every encoded output.
pub const OUTPUT_CONTENT_TYPE: &str = "image/jpeg";

pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Decode an uploaded photo into an RGB raster, dropping any alpha channel.
pub fn decode_photo(bytes: &[u8]) -> Result<RgbImage, CoreError> {
    let image = image::load_from_memory(bytes).map_err(|e| CoreError::Decode(e.to_string()))?;
    Ok(image.into_rgb8())
}

/// Encode a raster as JPEG at the given quality (1-100).
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, CoreError> {
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality)
        .encode_image(image)
        .map_err(|e| CoreError::Internal(format!("JPEG encoding failed: {e}")))?;
    Ok(buf)
}
