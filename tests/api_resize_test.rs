//! Tests for the /resize/ endpoint.

mod common;

use axum::http::StatusCode;
use common::fixtures::{self, colors};
use common::TestApp;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_half_scale_floors_dimensions() {
    let app = TestApp::new();
    let upload = fixtures::png_bytes(&fixtures::solid(20, 10, colors::BLUE));

    let response = app
        .post_multipart("/resize/", &[("scale", "0.5")], Some(&upload))
        .await;
    let image = common::assert_image(&response);

    assert_eq!(image.dimensions(), (10, 5));
    // Uniform input stays uniform under interpolation
    assert_eq!(image.pixel(0, 0), colors::BLUE);
    assert_eq!(image.pixel(9, 4), colors::BLUE);
}

#[tokio::test]
async fn test_odd_dimensions_truncate() {
    let app = TestApp::new();
    let upload = fixtures::png_bytes(&fixtures::solid(7, 3, colors::RED));

    let response = app
        .post_multipart("/resize", &[("scale", "0.5")], Some(&upload))
        .await;
    let image = common::assert_image(&response);

    assert_eq!(image.dimensions(), (3, 1));
}

#[tokio::test]
async fn test_upscale() {
    let app = TestApp::new();
    let upload = fixtures::png_bytes(&fixtures::solid(3, 2, colors::GREEN));

    let response = app
        .post_multipart("/resize/", &[("scale", "2.5")], Some(&upload))
        .await;
    let image = common::assert_image(&response);

    assert_eq!(image.dimensions(), (7, 5));
    assert_eq!(image.pixel(6, 4), colors::GREEN);
}

#[tokio::test]
async fn test_default_scale_is_identity() {
    let app = TestApp::new();
    let source = fixtures::sprite_on_white();
    let upload = fixtures::png_bytes(&source);

    let response = app.post_multipart("/resize/", &[], Some(&upload)).await;
    let image = common::assert_image(&response);

    assert_eq!(image, source);
}

#[tokio::test]
async fn test_scale_to_zero_rejected() {
    let app = TestApp::new();
    let upload = fixtures::png_bytes(&fixtures::solid(20, 10, colors::BLUE));

    let response = app
        .post_multipart("/resize/", &[("scale", "0.01")], Some(&upload))
        .await;

    common::assert_error(&response, StatusCode::BAD_REQUEST, "Invalid dimensions: 0x0");
}

#[tokio::test]
async fn test_non_numeric_scale_rejected() {
    let app = TestApp::new();
    let upload = fixtures::png_bytes(&fixtures::solid(2, 2, colors::BLUE));

    let response = app
        .post_multipart("/resize/", &[("scale", "half")], Some(&upload))
        .await;

    common::assert_error(&response, StatusCode::BAD_REQUEST, "scale must be a number");
}

#[tokio::test]
async fn test_non_positive_scale_rejected() {
    let app = TestApp::new();
    let upload = fixtures::png_bytes(&fixtures::solid(2, 2, colors::BLUE));

    for scale in ["0", "-2", "NaN", "inf"] {
        let response = app
            .post_multipart("/resize/", &[("scale", scale)], Some(&upload))
            .await;
        common::assert_error(&response, StatusCode::BAD_REQUEST, "invalid scale factor");
    }
}

#[tokio::test]
async fn test_garbage_upload_rejected() {
    let app = TestApp::new();

    let response = app
        .post_multipart("/resize/", &[("scale", "2")], Some(&[0u8, 1, 2, 3, 4, 5]))
        .await;

    common::assert_error(&response, StatusCode::BAD_REQUEST, "Decode error");
}

#[tokio::test]
async fn test_upload_over_body_limit_rejected() {
    let app = TestApp::with_config(spritekit::models::ServerConfig {
        max_upload_bytes: 1024,
        ..Default::default()
    });
    let upload = vec![0u8; 4096];

    let response = app.post_multipart("/resize/", &[], Some(&upload)).await;

    common::assert_status(&response, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_non_multipart_body_rejected_as_json() {
    let app = TestApp::new();

    let response = app
        .request_with_headers("POST", "/resize/", &[("Content-Type", "application/json")])
        .await;
    common::assert_error(&response, StatusCode::BAD_REQUEST, "boundary");

    // No Content-Type at all
    let response = app.request_with_headers("POST", "/resize", &[]).await;
    common::assert_error(&response, StatusCode::BAD_REQUEST, "Malformed multipart body");
}
