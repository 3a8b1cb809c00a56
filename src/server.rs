//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::HeaderValue,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::{self, ImageResponse};
use crate::error::ApiError;
use crate::models::ServerConfig;
use crate::services::Editor;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub editor: Arc<Editor>,
}

/// Create application state from a loaded configuration.
pub fn create_app_state(config: ServerConfig) -> AppState {
    let editor = Arc::new(Editor::new(config.max_output_pixels));
    AppState {
        config: Arc::new(config),
        editor,
    }
}

/// Build the API router with all endpoints and middleware.
///
/// Every edit route answers both with and without the trailing slash.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;
    let cors = cors_layer(&state.config.allowed_origins);

    Router::new()
        .route("/remove-background/", post(handle_remove_background))
        .route("/remove-background", post(handle_remove_background))
        .route("/set-padding/", post(handle_set_padding))
        .route("/set-padding", post(handle_set_padding))
        .route("/resize/", post(handle_resize))
        .route("/resize", post(handle_resize))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// CORS policy from the configured origin list.
///
/// `"*"` allows any origin. Entries that are not valid header values are
/// skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

// Wrapper handlers to extract state components for the underlying API handlers

/// A missing or malformed multipart boundary becomes [`ApiError::Multipart`].
fn accept_multipart(
    form: Result<Multipart, MultipartRejection>,
) -> Result<Multipart, ApiError> {
    form.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected multipart request");
        ApiError::Multipart(rejection.body_text())
    })
}

async fn handle_remove_background(
    State(state): State<AppState>,
    form: Result<Multipart, MultipartRejection>,
) -> Result<Json<ImageResponse>, ApiError> {
    api::handle_remove_background(State(state.editor), accept_multipart(form)?).await
}

async fn handle_set_padding(
    State(state): State<AppState>,
    form: Result<Multipart, MultipartRejection>,
) -> Result<Json<ImageResponse>, ApiError> {
    api::handle_set_padding(State(state.editor), accept_multipart(form)?).await
}

async fn handle_resize(
    State(state): State<AppState>,
    form: Result<Multipart, MultipartRejection>,
) -> Result<Json<ImageResponse>, ApiError> {
    api::handle_resize(State(state.editor), accept_multipart(form)?).await
}
