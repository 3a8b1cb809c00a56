//! Decoding of uploaded images and PNG/base64 encoding of results.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::ImageReader;
use sprite_ops::PixelBuffer;
use std::io::Cursor;

use crate::error::EditError;

/// Decode any supported raster format (PNG, JPEG, GIF, BMP, WebP) into RGBA8.
///
/// The format is sniffed from the content. Sources without an alpha channel
/// come back fully opaque; 16-bit sources are reduced to 8 bits per channel.
pub fn decode(bytes: &[u8]) -> Result<PixelBuffer, EditError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| EditError::Decode(e.to_string()))?;

    if reader.format().is_none() {
        return Err(EditError::Decode("unrecognized image format".to_string()));
    }

    let rgba = reader
        .decode()
        .map_err(|e| EditError::Decode(e.to_string()))?
        .into_rgba8();

    let (width, height) = rgba.dimensions();
    PixelBuffer::from_raw(width, height, rgba.into_raw()).map_err(EditError::from)
}

/// Encode a buffer as an 8-bit RGBA PNG.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, EditError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, buffer.width(), buffer.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| EditError::Encode(e.to_string()))?;
        writer
            .write_image_data(buffer.as_raw())
            .map_err(|e| EditError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Encode a buffer as PNG wrapped in standard (padded) base64.
pub fn encode_base64(buffer: &PixelBuffer) -> Result<String, EditError> {
    encode_png(buffer).map(|png| STANDARD.encode(png))
}
