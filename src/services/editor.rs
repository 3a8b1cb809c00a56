//! Request-scoped image editing: decode, transform, encode.
//!
//! The editor holds only immutable limits. Every call owns its pixel buffer
//! from decode to encode, so any number of edits can run in parallel.

use std::sync::Arc;

use axum::body::Bytes;
use sprite_ops::PixelBuffer;

use crate::error::EditError;
use crate::models::Edit;
use crate::services::codec;

pub struct Editor {
    max_output_pixels: u64,
}

impl Editor {
    pub fn new(max_output_pixels: u64) -> Self {
        Self { max_output_pixels }
    }

    /// Decode `bytes` and apply `edit`, returning the transformed buffer.
    pub fn apply(&self, bytes: &[u8], edit: &Edit) -> Result<PixelBuffer, EditError> {
        let buffer = codec::decode(bytes)?;
        let (width, height) = buffer.dimensions();

        let output = match *edit {
            Edit::RemoveBackground { key, tolerance } => {
                sprite_ops::remove_background(buffer, key, tolerance)
            }
            Edit::Pad(spec) => {
                let (w, h) = spec.padded_dimensions(width, height);
                self.check_output_size(w, h)?;
                sprite_ops::pad(buffer, spec)?
            }
            Edit::Resize(scale) => {
                let (w, h) = scale.target_dimensions(width, height);
                self.check_output_size(w, h)?;
                sprite_ops::resize(buffer, scale)?
            }
        };

        tracing::debug!(
            edit = edit.name(),
            width,
            height,
            out_width = output.width(),
            out_height = output.height(),
            "Applied edit"
        );
        Ok(output)
    }

    /// Apply `edit` and return the result as base64 PNG text.
    pub fn apply_base64(&self, bytes: &[u8], edit: &Edit) -> Result<String, EditError> {
        codec::encode_base64(&self.apply(bytes, edit)?)
    }

    /// Apply `edit` and return raw PNG bytes.
    pub fn apply_png(&self, bytes: &[u8], edit: &Edit) -> Result<Vec<u8>, EditError> {
        codec::encode_png(&self.apply(bytes, edit)?)
    }

    /// Run [`Editor::apply_base64`] on the blocking pool so large images do
    /// not stall the async executor.
    pub async fn run(self: Arc<Self>, bytes: Bytes, edit: Edit) -> Result<String, EditError> {
        tokio::task::spawn_blocking(move || self.apply_base64(&bytes, &edit))
            .await
            .map_err(|e| EditError::Worker(e.to_string()))?
    }

    fn check_output_size(&self, width: u64, height: u64) -> Result<(), EditError> {
        if width.saturating_mul(height) > self.max_output_pixels {
            tracing::warn!(
                width,
                height,
                max_pixels = self.max_output_pixels,
                "Rejected oversized output"
            );
            return Err(EditError::InvalidDimension { width, height });
        }
        Ok(())
    }
}
