use anyhow::Context as _;
use axum::{
    Json,
    extract::Query,
    http::header,
    response::IntoResponse,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use qrvault_bridge::decode::decode_image;
use qrvault_bridge::render::{QrStyle, render_svg};
use qrvault_domain::color::{DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};

use crate::domain::types::CreateGeneratedSubmission;
use crate::domain::validation::validate_create_generated;
use crate::error::VaultServiceError;

// ── GET /preview.svg ─────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct PreviewQuery {
    pub data: Option<String>,
    pub foreground_color: Option<String>,
    pub background_color: Option<String>,
}

/// Renders exactly what `POST /generated` would store for the same input.
/// Colors left out of the query fall back to black on white, the values a
/// fresh create form starts with.
pub async fn preview_svg(
    Query(query): Query<PreviewQuery>,
) -> Result<impl IntoResponse, VaultServiceError> {
    let code = validate_create_generated(CreateGeneratedSubmission {
        data: query.data,
        label: None,
        foreground_color: query
            .foreground_color
            .or_else(|| Some(DEFAULT_FOREGROUND.to_owned())),
        background_color: query
            .background_color
            .or_else(|| Some(DEFAULT_BACKGROUND.to_owned())),
    })
    .map_err(VaultServiceError::Validation)?;
    let style = QrStyle {
        foreground: code.foreground_color,
        background: code.background_color,
    };
    let svg = render_svg(&code.data, &style)?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}

// ── POST /scanned/decode ─────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct DecodeResponse {
    pub data: String,
}

/// Decodes an uploaded image. Nothing is stored; the caller saves the
/// payload through `POST /scanned`.
pub async fn decode_scan(body: Bytes) -> Result<Json<DecodeResponse>, VaultServiceError> {
    let data = tokio::task::spawn_blocking(move || decode_image(&body))
        .await
        .context("join decode task")??;
    tracing::debug!(len = data.len(), "image decoded");
    Ok(Json(DecodeResponse { data }))
}
