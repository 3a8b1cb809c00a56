//! Error types for pixel operations.

use thiserror::Error;

/// Error type for parsing `#RRGGBB` color keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The string is not `#` followed by exactly six hex digits.
    #[error("invalid color {0:?} (expected #RRGGBB)")]
    InvalidFormat(String),
}

/// Errors returned by buffer construction and the pixel operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpsError {
    /// Color key could not be parsed.
    #[error(transparent)]
    InvalidColor(#[from] ParseColorError),

    /// Scale factor is zero, negative, NaN or infinite.
    #[error("invalid scale factor {0} (must be a finite number greater than 0)")]
    InvalidScale(f64),

    /// An operation would produce (or was given) an empty image.
    #[error("invalid target dimensions {width}x{height}")]
    InvalidDimension { width: u64, height: u64 },

    /// Raw pixel data does not match the declared dimensions.
    #[error("pixel data has {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
