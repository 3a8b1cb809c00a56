//! Uniform scaling with bilinear interpolation.
//!
//! Output dimensions are `floor(width * scale)` by `floor(height * scale)`.
//! A scale that truncates either dimension to zero is rejected rather than
//! clamped.
//!
//! Sampling uses pixel-center alignment: destination pixel `d` maps to source
//! coordinate `(d + 0.5) * src_len / dst_len - 0.5`, clamped to the image.
//! All four channels are interpolated independently without alpha
//! premultiplication, so fully transparent pixels can bleed their RGB into
//! neighbours along transparent edges.

use crate::buffer::{PixelBuffer, CHANNELS};
use crate::error::OpsError;

/// A finite scale factor greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    pub const IDENTITY: ScaleFactor = ScaleFactor(1.0);

    /// # Errors
    ///
    /// Returns [`OpsError::InvalidScale`] for zero, negative, NaN or infinite
    /// values.
    pub fn new(value: f64) -> Result<Self, OpsError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(OpsError::InvalidScale(value))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Target `(width, height)` for a source of the given size, truncated
    /// toward zero. Values saturate at `u64::MAX`.
    pub fn target_dimensions(self, width: u32, height: u32) -> (u64, u64) {
        (
            (width as f64 * self.0).floor() as u64,
            (height as f64 * self.0).floor() as u64,
        )
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Precomputed source taps for one output coordinate.
#[derive(Debug, Clone, Copy)]
struct Tap {
    lo: usize,
    hi: usize,
    frac: f64,
}

fn taps(src_len: u32, dst_len: u32) -> Vec<Tap> {
    let ratio = src_len as f64 / dst_len as f64;
    let max = (src_len - 1) as f64;
    (0..dst_len)
        .map(|d| {
            let pos = ((d as f64 + 0.5) * ratio - 0.5).clamp(0.0, max);
            let lo = pos.floor() as usize;
            let hi = (lo + 1).min(src_len as usize - 1);
            Tap {
                lo,
                hi,
                frac: pos - lo as f64,
            }
        })
        .collect()
}

/// Scale `buffer` by `scale` using bilinear interpolation.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimension`] if either target dimension is zero
/// or does not fit in `u32`.
///
/// ```
/// use sprite_ops::{resize, PixelBuffer, ScaleFactor};
///
/// let source = PixelBuffer::filled(20, 10, [0, 0, 0, 255]).unwrap();
/// let half = resize(source, ScaleFactor::new(0.5).unwrap()).unwrap();
/// assert_eq!(half.dimensions(), (10, 5));
/// ```
pub fn resize(buffer: PixelBuffer, scale: ScaleFactor) -> Result<PixelBuffer, OpsError> {
    let (src_w, src_h) = buffer.dimensions();
    let (tw, th) = scale.target_dimensions(src_w, src_h);
    let invalid = || OpsError::InvalidDimension {
        width: tw,
        height: th,
    };
    if tw == 0 || th == 0 {
        return Err(invalid());
    }
    let dst_w = u32::try_from(tw).map_err(|_| invalid())?;
    let dst_h = u32::try_from(th).map_err(|_| invalid())?;

    if (dst_w, dst_h) == (src_w, src_h) {
        return Ok(buffer);
    }

    let x_taps = taps(src_w, dst_w);
    let y_taps = taps(src_h, dst_h);
    let src = buffer.as_raw();
    let stride = src_w as usize * CHANNELS;

    let mut data = Vec::with_capacity(dst_w as usize * dst_h as usize * CHANNELS);
    for ty in &y_taps {
        let row_lo = &src[ty.lo * stride..(ty.lo + 1) * stride];
        let row_hi = &src[ty.hi * stride..(ty.hi + 1) * stride];
        for tx in &x_taps {
            for c in 0..CHANNELS {
                let p00 = row_lo[tx.lo * CHANNELS + c] as f64;
                let p10 = row_lo[tx.hi * CHANNELS + c] as f64;
                let p01 = row_hi[tx.lo * CHANNELS + c] as f64;
                let p11 = row_hi[tx.hi * CHANNELS + c] as f64;

                let top = p00 + (p10 - p00) * tx.frac;
                let bottom = p01 + (p11 - p01) * tx.frac;
                let v = top + (bottom - top) * ty.frac;
                data.push(v.round().clamp(0.0, 255.0) as u8);
            }
        }
    }

    PixelBuffer::from_raw(dst_w, dst_h, data)
}
