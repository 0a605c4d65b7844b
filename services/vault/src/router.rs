use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
};
use tower::ServiceBuilder;

use qrvault_core::health::healthz;
use qrvault_core::middleware::{
    http_trace_layer, propagate_request_id_layer, request_id_layer,
};

use crate::handlers::{
    generated::{create_generated, list_generated, update_generated_label},
    health::readyz,
    preview::{decode_scan, preview_svg},
    scanned::{create_scanned, list_scanned, update_scanned_note},
};
use crate::state::AppState;

/// Largest image accepted by `POST /scanned/decode`.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Generated codes
        .route("/generated", get(list_generated))
        .route("/generated", post(create_generated))
        .route("/generated/{id}/label", patch(update_generated_label))
        // Scanned codes
        .route("/scanned", get(list_scanned))
        .route("/scanned", post(create_scanned))
        .route("/scanned/{id}/note", patch(update_scanned_note))
        .route(
            "/scanned/decode",
            post(decode_scan).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        // Rendering
        .route("/preview.svg", get(preview_svg))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(http_trace_layer())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
