use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::header,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use qrvault_domain::code::{CodeKind, ScannedCode};
use qrvault_domain::id::CodeId;

use crate::domain::types::CreateScannedSubmission;
use crate::error::VaultServiceError;
use crate::handlers::action::{Action, ActionReply};
use crate::state::AppState;
use crate::usecase::scanned::{
    CreateScannedCodeUseCase, ListScannedCodesUseCase, UpdateScannedNoteUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedCodeResponse {
    pub kind: CodeKind,
    pub id: CodeId,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(serialize_with = "qrvault_core::serde::to_rfc3339_ms")]
    pub scanned_at: chrono::DateTime<chrono::Utc>,
}

impl From<ScannedCode> for ScannedCodeResponse {
    fn from(code: ScannedCode) -> Self {
        Self {
            kind: CodeKind::Scanned,
            id: code.id,
            data: code.data,
            note: code.note,
            scanned_at: code.scanned_at,
        }
    }
}

// ── GET /scanned ─────────────────────────────────────────────────────────────

pub async fn list_scanned(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, VaultServiceError> {
    let usecase = ListScannedCodesUseCase {
        repo: state.scanned_repo(),
        cache: state.listing_cache(),
    };
    let codes = usecase
        .execute()
        .await
        .map_err(|e| e.into_listing(CodeKind::Scanned))?;
    let items: Vec<ScannedCodeResponse> = codes.into_iter().map(Into::into).collect();
    Ok(([(header::CACHE_CONTROL, "no-store")], Json(items)))
}

// ── POST /scanned ────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct CreateScannedRequest {
    pub data: Option<String>,
    pub note: Option<String>,
}

pub async fn create_scanned(
    State(state): State<AppState>,
    payload: Result<Json<CreateScannedRequest>, JsonRejection>,
) -> ActionReply {
    let body = match Action::CreateScanned.body(payload) {
        Ok(body) => body,
        Err(reply) => return reply,
    };
    let usecase = CreateScannedCodeUseCase {
        repo: state.scanned_repo(),
        cache: state.listing_cache(),
    };
    let result = usecase
        .execute(CreateScannedSubmission {
            data: body.data,
            note: body.note,
        })
        .await;
    Action::CreateScanned.reply(result)
}

// ── PATCH /scanned/{id}/note ─────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub note: Option<String>,
}

pub async fn update_scanned_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> ActionReply {
    let body = match Action::UpdateNote.body(payload) {
        Ok(body) => body,
        Err(reply) => return reply,
    };
    let usecase = UpdateScannedNoteUseCase {
        repo: state.scanned_repo(),
        cache: state.listing_cache(),
    };
    Action::UpdateNote.reply(usecase.execute(&id, body.note).await)
}
