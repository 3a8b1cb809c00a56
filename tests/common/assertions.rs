//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use sprite_ops::PixelBuffer;

use super::app::TestResponse;
use super::fixtures;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert a successful edit and decode the returned image
pub fn assert_image(response: &TestResponse) -> PixelBuffer {
    assert_ok(response);
    let json: serde_json::Value = response.json();
    let image = json["image"]
        .as_str()
        .unwrap_or_else(|| panic!("Response should carry an image field: {json}"));
    fixtures::decode_base64_png(image)
}

/// Assert an error response with the given status whose message contains `needle`
pub fn assert_error(response: &TestResponse, expected: StatusCode, needle: &str) {
    assert_status(response, expected);

    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}. Full response: {}",
        expected.as_u16(),
        serde_json::to_string_pretty(&json).unwrap()
    );

    let message = json["error"].as_str().unwrap_or_default();
    assert!(
        message.contains(needle),
        "Expected error containing {needle:?}, got {message:?}"
    );
}
