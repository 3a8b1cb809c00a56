use axum::{
    extract::{Multipart, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::upload::UploadForm;
use crate::error::ApiError;
use crate::models::edit::{DEFAULT_COLOR, DEFAULT_FEATHER, DEFAULT_PADDING, DEFAULT_SCALE};
use crate::models::Edit;
use crate::services::Editor;

/// Successful edit response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImageResponse {
    /// Base64-encoded PNG of the edited image
    pub image: String,
}

/// Error response for edit endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct EditErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Error message
    pub error: String,
}

/// Form fields for background removal
#[derive(Debug, ToSchema)]
pub struct RemoveBackgroundForm {
    /// Image to edit (PNG, JPEG, GIF, BMP or WebP)
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Key color as `#RRGGBB` (default `#FFFFFF`)
    pub color: Option<String>,
    /// Per-channel tolerance, non-negative integer (default `0`)
    pub feather: Option<String>,
}

/// Form fields for padding
#[derive(Debug, ToSchema)]
pub struct SetPaddingForm {
    /// Image to edit (PNG, JPEG, GIF, BMP or WebP)
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// JSON object, e.g. `{"left":1,"right":0,"up":0,"down":2}`
    pub padding: Option<String>,
}

/// Form fields for resizing
#[derive(Debug, ToSchema)]
pub struct ResizeForm {
    /// Image to edit (PNG, JPEG, GIF, BMP or WebP)
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Scale factor greater than zero (default `1`)
    pub scale: Option<String>,
}

/// Remove a chroma-key background
///
/// Pixels whose R, G and B are each within `feather` of `color` become
/// fully transparent.
#[utoipa::path(
    post,
    path = "/remove-background/",
    request_body(content = RemoveBackgroundForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Edited image", body = ImageResponse),
        (status = 400, description = "Invalid image or parameters", body = EditErrorResponse),
    ),
    tag = "Edit"
)]
pub async fn handle_remove_background(
    State(editor): State<Arc<Editor>>,
    multipart: Multipart,
) -> Result<Json<ImageResponse>, ApiError> {
    let mut form = UploadForm::read(multipart).await?;
    let edit = Edit::remove_background(
        form.field_or("color", DEFAULT_COLOR),
        form.field_or("feather", DEFAULT_FEATHER),
    )?;
    run(editor, &mut form, edit).await
}

/// Pad the canvas by edge replication
#[utoipa::path(
    post,
    path = "/set-padding/",
    request_body(content = SetPaddingForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Edited image", body = ImageResponse),
        (status = 400, description = "Invalid image or parameters", body = EditErrorResponse),
    ),
    tag = "Edit"
)]
pub async fn handle_set_padding(
    State(editor): State<Arc<Editor>>,
    multipart: Multipart,
) -> Result<Json<ImageResponse>, ApiError> {
    let mut form = UploadForm::read(multipart).await?;
    let edit = Edit::set_padding(form.field_or("padding", DEFAULT_PADDING))?;
    run(editor, &mut form, edit).await
}

/// Scale the image with bilinear interpolation
///
/// Output dimensions are `floor(width * scale)` by `floor(height * scale)`;
/// a scale that truncates either to zero is rejected.
#[utoipa::path(
    post,
    path = "/resize/",
    request_body(content = ResizeForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Edited image", body = ImageResponse),
        (status = 400, description = "Invalid image, parameters or target size", body = EditErrorResponse),
    ),
    tag = "Edit"
)]
pub async fn handle_resize(
    State(editor): State<Arc<Editor>>,
    multipart: Multipart,
) -> Result<Json<ImageResponse>, ApiError> {
    let mut form = UploadForm::read(multipart).await?;
    let edit = Edit::resize(form.field_or("scale", DEFAULT_SCALE))?;
    run(editor, &mut form, edit).await
}

async fn run(
    editor: Arc<Editor>,
    form: &mut UploadForm,
    edit: Edit,
) -> Result<Json<ImageResponse>, ApiError> {
    let file = form.take_file()?;
    tracing::info!(edit = edit.name(), bytes = file.len(), "Edit request received");

    let image = editor.run(file, edit).await.inspect_err(|e| {
        tracing::warn!(edit = edit.name(), error = %e, "Edit failed");
    })?;

    Ok(Json(ImageResponse { image }))
}
