//! Multipart upload parsing shared by the edit endpoints.

use axum::{
    body::Bytes,
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
};
use std::collections::HashMap;

use crate::error::ApiError;

/// Name of the form field carrying the image.
pub const FILE_FIELD: &str = "file";

/// An uploaded image plus its text form fields.
#[derive(Debug, Default)]
pub struct UploadForm {
    file: Option<Bytes>,
    fields: HashMap<String, String>,
}

impl UploadForm {
    /// Drain a multipart stream. The body is consumed as it arrives; unnamed
    /// parts are skipped and a repeated field keeps its last value.
    pub async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == FILE_FIELD {
                let bytes = field.bytes().await.map_err(multipart_error)?;
                tracing::debug!(bytes = bytes.len(), "Received upload");
                form.file = Some(bytes);
            } else {
                let value = field.text().await.map_err(multipart_error)?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// The uploaded image, or [`ApiError::MissingField`].
    pub fn take_file(&mut self) -> Result<Bytes, ApiError> {
        self.file
            .take()
            .ok_or(ApiError::MissingField(FILE_FIELD))
    }

    /// A text field, or `default` when it was not sent.
    pub fn field_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.fields.get(name).map(String::as_str).unwrap_or(default)
    }
}

fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::UploadTooLarge(e.body_text())
    } else {
        ApiError::Multipart(e.body_text())
    }
}
