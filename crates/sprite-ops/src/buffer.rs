//! RGBA pixel storage shared by all operations.

use crate::error::OpsError;

/// Bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// An owned RGBA image with 8 bits per channel.
///
/// Conceptually a `(height, width, 4)` array. Pixels are stored row-major in a
/// flat byte vector; the alpha channel is always present.
///
/// # Example
///
/// ```
/// use sprite_ops::PixelBuffer;
///
/// let buffer = PixelBuffer::filled(3, 2, [255, 0, 0, 255]).unwrap();
/// assert_eq!(buffer.width(), 3);
/// assert_eq!(buffer.height(), 2);
/// assert_eq!(buffer.pixel(2, 1), [255, 0, 0, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw row-major RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidDimension`] for a zero width or height and
    /// [`OpsError::BufferSize`] if `data.len() != width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, OpsError> {
        if width == 0 || height == 0 {
            return Err(OpsError::InvalidDimension {
                width: width as u64,
                height: height as u64,
            });
        }
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(OpsError::BufferSize {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer where every pixel has the same RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, OpsError> {
        let count = width as usize * height as usize;
        let data = rgba.iter().copied().cycle().take(count * CHANNELS).collect();
        Self::from_raw(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Flat row-major RGBA bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// RGBA value at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = self.offset(x, y);
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Overwrite the RGBA value at column `x`, row `y`.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = self.offset(x, y);
        self.data[idx..idx + CHANNELS].copy_from_slice(&rgba);
    }

    /// Bytes of row `y`.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * CHANNELS;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Iterate over pixels as mutable 4-byte slices.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.data.chunks_exact_mut(CHANNELS)
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}
