//! Test fixtures: small sprite images and decoding helpers.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use sprite_ops::PixelBuffer;

use spritekit::services::codec;

/// Opaque colors used across tests
pub mod colors {
    pub const WHITE: [u8; 4] = [255, 255, 255, 255];
    pub const RED: [u8; 4] = [255, 0, 0, 255];
    pub const GREEN: [u8; 4] = [0, 255, 0, 255];
    pub const BLUE: [u8; 4] = [0, 0, 255, 255];
    pub const NEAR_WHITE: [u8; 4] = [250, 250, 250, 255];
    pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];
}

/// Single-color image of the given size
pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> PixelBuffer {
    PixelBuffer::filled(width, height, rgba).expect("valid test dimensions")
}

/// Image built from rows of pixels
pub fn from_rows(rows: &[&[[u8; 4]]]) -> PixelBuffer {
    let height = rows.len() as u32;
    let width = rows[0].len() as u32;
    let data = rows.iter().flat_map(|row| row.iter().flatten().copied()).collect();
    PixelBuffer::from_raw(width, height, data).expect("rectangular test image")
}

/// A sprite on a white background: red square in the middle of a 4x4 canvas
pub fn sprite_on_white() -> PixelBuffer {
    let mut buffer = solid(4, 4, colors::WHITE);
    for y in 1..3 {
        for x in 1..3 {
            buffer.set_pixel(x, y, colors::RED);
        }
    }
    buffer
}

/// Encode a buffer as PNG bytes for upload
pub fn png_bytes(buffer: &PixelBuffer) -> Vec<u8> {
    codec::encode_png(buffer).expect("encode test PNG")
}

/// Decode the base64 PNG returned by the edit endpoints
pub fn decode_base64_png(image: &str) -> PixelBuffer {
    let png = STANDARD.decode(image).expect("response image is base64");
    codec::decode(&png).expect("response image is a PNG")
}
