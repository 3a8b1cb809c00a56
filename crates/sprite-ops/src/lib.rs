//! sprite-ops: pixel-level spritesheet operations
//!
//! Stateless transforms over an owned RGBA [`PixelBuffer`]. Each operation
//! consumes its input buffer and returns a new one, so concurrent callers
//! never share image state.
//!
//! | Operation | Parameters | Behavior |
//! |-----------|------------|----------|
//! | [`remove_background`] | [`ColorKey`], [`Tolerance`] | Pixels within tolerance of the key on every RGB channel become `(0, 0, 0, 0)` |
//! | [`pad`] | [`PaddingSpec`] | Grows the canvas, filling new pixels by edge replication |
//! | [`resize`] | [`ScaleFactor`] | Bilinear scaling to `floor(dim * scale)` |
//!
//! # Example
//!
//! ```
//! use sprite_ops::{pad, remove_background, resize, ColorKey, PaddingSpec, PixelBuffer,
//!     ScaleFactor, Tolerance};
//!
//! let sheet = PixelBuffer::filled(10, 20, [255, 255, 255, 255]).unwrap();
//! let keyed = remove_background(sheet, ColorKey::WHITE, Tolerance(8));
//! let padded = pad(keyed, PaddingSpec::new(1, 1, 0, 0)).unwrap();
//! let scaled = resize(padded, ScaleFactor::new(0.5).unwrap()).unwrap();
//!
//! assert_eq!(scaled.dimensions(), (6, 10));
//! ```

mod buffer;
mod chroma;
mod error;
mod pad;
mod resize;

pub use buffer::{PixelBuffer, CHANNELS};
pub use chroma::{is_background, remove_background, ColorKey, Tolerance};
pub use error::{OpsError, ParseColorError};
pub use pad::{pad, PaddingSpec};
pub use resize::{resize, ScaleFactor};
