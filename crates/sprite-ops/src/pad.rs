//! Edge-replication padding.
//!
//! New border pixels copy the nearest source pixel along each axis, so the
//! padded regions continue the outermost rows and columns outward and the
//! corners take the matching corner pixel. This matches numpy's `edge` mode;
//! there is no constant fill and no mirroring.

use crate::buffer::{PixelBuffer, CHANNELS};
use crate::error::OpsError;

/// Number of pixels to add on each side of the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PaddingSpec {
    pub left: u32,
    pub right: u32,
    pub up: u32,
    pub down: u32,
}

impl PaddingSpec {
    pub const fn new(left: u32, right: u32, up: u32, down: u32) -> Self {
        Self {
            left,
            right,
            up,
            down,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Output dimensions for a `width` x `height` source, widened to `u64`.
    pub fn padded_dimensions(&self, width: u32, height: u32) -> (u64, u64) {
        (
            width as u64 + self.left as u64 + self.right as u64,
            height as u64 + self.up as u64 + self.down as u64,
        )
    }
}

/// Pad `buffer` by replicating its edge pixels.
///
/// The source lands at offset `(up, left)` in an image of
/// `(height + up + down, width + left + right)`.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimension`] if the padded size does not fit in
/// `u32`.
///
/// ```
/// use sprite_ops::{pad, PaddingSpec, PixelBuffer};
///
/// let source = PixelBuffer::filled(2, 2, [1, 2, 3, 4]).unwrap();
/// let padded = pad(source, PaddingSpec::new(1, 0, 0, 0)).unwrap();
/// assert_eq!(padded.dimensions(), (3, 2));
/// ```
pub fn pad(buffer: PixelBuffer, spec: PaddingSpec) -> Result<PixelBuffer, OpsError> {
    if spec.is_zero() {
        return Ok(buffer);
    }

    let (out_w, out_h) = spec.padded_dimensions(buffer.width(), buffer.height());
    let (Ok(out_w32), Ok(out_h32)) = (u32::try_from(out_w), u32::try_from(out_h)) else {
        return Err(OpsError::InvalidDimension {
            width: out_w,
            height: out_h,
        });
    };

    let src_w = buffer.width() as usize;
    let src_h = buffer.height() as usize;
    let left = spec.left as usize;
    let right = spec.right as usize;
    let up = spec.up as usize;

    // Build one padded row per source row, then repeat the first and last.
    let mut padded_rows: Vec<Vec<u8>> = Vec::with_capacity(src_h);
    for y in 0..src_h {
        let row = buffer.row(y as u32);
        let first = &row[..CHANNELS];
        let last = &row[(src_w - 1) * CHANNELS..];

        let mut out = Vec::with_capacity(out_w as usize * CHANNELS);
        for _ in 0..left {
            out.extend_from_slice(first);
        }
        out.extend_from_slice(row);
        for _ in 0..right {
            out.extend_from_slice(last);
        }
        padded_rows.push(out);
    }

    let mut data = Vec::with_capacity(out_w as usize * out_h as usize * CHANNELS);
    for y in 0..out_h as usize {
        let src_y = y.saturating_sub(up).min(src_h - 1);
        data.extend_from_slice(&padded_rows[src_y]);
    }

    PixelBuffer::from_raw(out_w32, out_h32, data)
}
