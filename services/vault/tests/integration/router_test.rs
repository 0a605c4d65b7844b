use axum_test::TestServer;
use bytes::Bytes;
use http::{StatusCode, header};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};

use qrvault_bridge::GrayFrame;
use qrvault_bridge::render::render_gray;
use qrvault_server::router::build_router;
use qrvault_server::state::AppState;

/// A server whose database is unreachable: every store call fails, so these
/// tests cover everything that is decided before or after the store.
fn offline_server() -> TestServer {
    let state = AppState::new(DatabaseConnection::Disconnected);
    TestServer::new(build_router(state)).unwrap()
}

// ── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_live_but_not_ready_without_database() {
    let server = offline_server();
    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(
        server.get("/readyz").await.status_code(),
        StatusCode::SERVICE_UNAVAILABLE
    );
}

#[tokio::test]
async fn should_echo_request_id() {
    let server = offline_server();
    let response = server.get("/healthz").await;
    assert!(response.headers().contains_key("x-request-id"));
}

// ── Listings ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_fail_listing_with_generic_message() {
    let server = offline_server();

    let response = server.get("/generated").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["kind"], "LISTING_UNAVAILABLE");
    assert_eq!(body["message"], "Failed to fetch generated codes");

    let body: Value = server.get("/scanned").await.json();
    assert_eq!(body["message"], "Failed to fetch scanned codes");
}

// ── Actions ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_invalid_generated_submission_with_field_errors() {
    let server = offline_server();
    let response = server
        .post("/generated")
        .json(&json!({ "data": "", "foregroundColor": "red" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed.");
    assert_eq!(body["error"]["data"][0], "URL or text is required.");
    assert_eq!(body["error"]["foregroundColor"][0], "Invalid color format.");
    assert_eq!(body["error"]["backgroundColor"][0], "Color is required.");
}

#[tokio::test]
async fn should_require_colors_on_create() {
    let server = offline_server();
    let response = server
        .post("/generated")
        .json(&json!({ "data": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Validation failed.");
    assert_eq!(body["error"]["foregroundColor"][0], "Color is required.");
    assert_eq!(body["error"]["backgroundColor"][0], "Color is required.");
    assert!(body["error"].get("data").is_none());
}

#[tokio::test]
async fn should_reject_empty_scan_with_field_errors() {
    let server = offline_server();
    let response = server.post("/scanned").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["data"][0], "Scanned data cannot be empty.");
}

#[tokio::test]
async fn should_report_store_failure_as_action_state() {
    let server = offline_server();

    let response = server
        .post("/generated")
        .json(&json!({
            "data": "https://example.com",
            "foregroundColor": "#000000",
            "backgroundColor": "#FFFFFF",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "success": false,
            "message": "Database error.",
            "error": "Failed to save QR code to the database.",
        })
    );

    let body: Value = server
        .post("/scanned")
        .json(&json!({ "data": "hello" }))
        .await
        .json();
    assert_eq!(body["error"], "Failed to save scan to the database.");
}

#[tokio::test]
async fn should_answer_malformed_json_with_action_state() {
    let server = offline_server();
    let response = server
        .post("/generated")
        .bytes(Bytes::from_static(b"{\"data\": "))
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed.");
    assert!(body["error"]["body"][0].is_string());
}

#[tokio::test]
async fn should_answer_mistyped_fields_with_action_state() {
    let server = offline_server();
    let response = server.post("/scanned").json(&json!({ "data": 5 })).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed.");
    assert!(body["error"]["body"][0].is_string());

    let response = server
        .patch("/scanned/0190b5a4-0000-7000-8000-000000000000/note")
        .text("desk")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["success"], false);
}

#[tokio::test]
async fn should_answer_not_found_for_malformed_id() {
    let server = offline_server();
    let response = server
        .patch("/generated/not-a-uuid/label")
        .json(&json!({ "label": "x" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "success": false, "message": "Failed to update label." })
    );
}

#[tokio::test]
async fn should_report_note_update_store_failure() {
    let server = offline_server();
    let response = server
        .patch("/scanned/0190b5a4-0000-7000-8000-000000000000/note")
        .json(&json!({ "note": "desk" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["message"], "Failed to update note.");
}

// ── Preview ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_render_svg_preview() {
    let server = offline_server();
    let response = server
        .get("/preview.svg")
        .add_query_param("data", "https://example.com")
        .add_query_param("foreground-color", "#112233")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header(header::CONTENT_TYPE), "image/svg+xml");
    let svg = response.text();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("#112233"));
}

#[tokio::test]
async fn should_reject_preview_with_bad_color() {
    let server = offline_server();
    let response = server
        .get("/preview.svg")
        .add_query_param("data", "x")
        .add_query_param("background-color", "#fff")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["errors"]["backgroundColor"][0], "Invalid color format.");
}

// ── Decode ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_decode_uploaded_png() {
    let server = offline_server();
    let png = render_gray("WIFI:S:home;T:WPA;P:secret;;", 6)
        .unwrap()
        .to_png()
        .unwrap();

    let response = server.post("/scanned/decode").bytes(Bytes::from(png)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "data": "WIFI:S:home;T:WPA;P:secret;;" })
    );
}

#[tokio::test]
async fn should_answer_unprocessable_when_no_code_is_visible() {
    let server = offline_server();
    let png = GrayFrame::filled(64, 64, 255).to_png().unwrap();

    let response = server.post("/scanned/decode").bytes(Bytes::from(png)).await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["kind"], "NO_CODE_FOUND");
}

#[tokio::test]
async fn should_reject_unreadable_upload() {
    let server = offline_server();
    let response = server
        .post("/scanned/decode")
        .bytes(Bytes::from_static(b"definitely not an image"))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_IMAGE");
}
