use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sprite_ops::OpsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required form field: {0}")]
    MissingField(&'static str),

    #[error("Malformed multipart body: {0}")]
    Multipart(String),

    #[error("Upload too large: {0}")]
    UploadTooLarge(String),

    #[error(transparent)]
    Edit(#[from] EditError),
}

/// Failures of a single edit request. None of them leave partial output.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Parameter error: {0}")]
    Parameter(String),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimension { width: u64, height: u64 },

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("Worker error: {0}")]
    Worker(String),
}

impl EditError {
    pub fn parameter(message: impl Into<String>) -> Self {
        EditError::Parameter(message.into())
    }
}

impl From<OpsError> for EditError {
    fn from(e: OpsError) -> Self {
        match e {
            OpsError::InvalidDimension { width, height } => {
                EditError::InvalidDimension { width, height }
            }
            OpsError::BufferSize { .. } => EditError::Decode(e.to_string()),
            OpsError::InvalidColor(_) | OpsError::InvalidScale(_) => {
                EditError::Parameter(e.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingField(_) | ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            ApiError::UploadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Edit(
                EditError::Decode(_)
                | EditError::Parameter(_)
                | EditError::InvalidDimension { .. },
            ) => StatusCode::BAD_REQUEST,
            ApiError::Edit(EditError::Encode(_) | EditError::Worker(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
