//! Chroma-key background removal.
//!
//! A pixel is background when each of its R, G and B channels lies within
//! [`Tolerance`] of the [`ColorKey`]. Background pixels become fully
//! transparent black; everything else, alpha included, is left alone.
//! Existing transparency plays no part in the match.

use std::fmt;
use std::str::FromStr;

use crate::buffer::PixelBuffer;
use crate::error::ParseColorError;

/// Reference color for background removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorKey {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorKey {
    pub const WHITE: ColorKey = ColorKey::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for ColorKey {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for ColorKey {
    type Err = ParseColorError;

    /// Parse a `#RRGGBB` string. Hex digits are case-insensitive and
    /// surrounding whitespace is ignored; shorthand and hashless forms are
    /// rejected.
    ///
    /// ```
    /// use sprite_ops::ColorKey;
    ///
    /// let key: ColorKey = "#00ff80".parse().unwrap();
    /// assert_eq!(key, ColorKey::new(0, 255, 128));
    /// assert!("red".parse::<ColorKey>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseColorError::InvalidFormat(s.to_string());
        let hex = s
            .trim()
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.bytes().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(invalid)?;

        // Digits are validated above: `from_str_radix` alone accepts a leading '+'.
        let channel =
            |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid());

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Per-channel maximum absolute difference still treated as background.
///
/// Zero requires an exact RGB match; 255 or more matches every pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tolerance(pub u32);

impl Tolerance {
    pub const EXACT: Tolerance = Tolerance(0);

    #[inline]
    fn accepts(self, a: u8, b: u8) -> bool {
        (a.abs_diff(b) as u32) <= self.0
    }
}

/// Returns true if the RGB part of `rgba` is within `tolerance` of `key`.
#[inline]
pub fn is_background(rgba: &[u8], key: ColorKey, tolerance: Tolerance) -> bool {
    tolerance.accepts(rgba[0], key.r)
        && tolerance.accepts(rgba[1], key.g)
        && tolerance.accepts(rgba[2], key.b)
}

/// Zero every pixel whose color matches `key` within `tolerance`.
///
/// ```
/// use sprite_ops::{remove_background, ColorKey, PixelBuffer, Tolerance};
///
/// let white = PixelBuffer::filled(4, 4, [255, 255, 255, 255]).unwrap();
/// let cleared = remove_background(white, ColorKey::WHITE, Tolerance::EXACT);
/// assert!(cleared.as_raw().iter().all(|&v| v == 0));
/// ```
pub fn remove_background(
    mut buffer: PixelBuffer,
    key: ColorKey,
    tolerance: Tolerance,
) -> PixelBuffer {
    for px in buffer.pixels_mut() {
        if is_background(px, key, tolerance) {
            px.fill(0);
        }
    }
    buffer
}
