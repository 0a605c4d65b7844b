use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::header,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use qrvault_domain::code::{CodeKind, GeneratedCode};
use qrvault_domain::id::CodeId;

use crate::domain::types::CreateGeneratedSubmission;
use crate::error::VaultServiceError;
use crate::handlers::action::{Action, ActionReply};
use crate::state::AppState;
use crate::usecase::generated::{
    CreateGeneratedCodeUseCase, ListGeneratedCodesUseCase, UpdateGeneratedLabelUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCodeResponse {
    pub kind: CodeKind,
    pub id: CodeId,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub foreground_color: String,
    pub background_color: String,
    #[serde(serialize_with = "qrvault_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<GeneratedCode> for GeneratedCodeResponse {
    fn from(code: GeneratedCode) -> Self {
        Self {
            kind: CodeKind::Generated,
            id: code.id,
            data: code.data,
            label: code.label,
            foreground_color: code.foreground_color,
            background_color: code.background_color,
            created_at: code.created_at,
        }
    }
}

// ── GET /generated ───────────────────────────────────────────────────────────

pub async fn list_generated(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, VaultServiceError> {
    let usecase = ListGeneratedCodesUseCase {
        repo: state.generated_repo(),
        cache: state.listing_cache(),
    };
    let codes = usecase
        .execute()
        .await
        .map_err(|e| e.into_listing(CodeKind::Generated))?;
    let items: Vec<GeneratedCodeResponse> = codes.into_iter().map(Into::into).collect();
    Ok(([(header::CACHE_CONTROL, "no-store")], Json(items)))
}

// ── POST /generated ──────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateGeneratedRequest {
    pub data: Option<String>,
    pub label: Option<String>,
    pub foreground_color: Option<String>,
    pub background_color: Option<String>,
}

pub async fn create_generated(
    State(state): State<AppState>,
    payload: Result<Json<CreateGeneratedRequest>, JsonRejection>,
) -> ActionReply {
    let body = match Action::CreateGenerated.body(payload) {
        Ok(body) => body,
        Err(reply) => return reply,
    };
    let usecase = CreateGeneratedCodeUseCase {
        repo: state.generated_repo(),
        cache: state.listing_cache(),
    };
    let result = usecase
        .execute(CreateGeneratedSubmission {
            data: body.data,
            label: body.label,
            foreground_color: body.foreground_color,
            background_color: body.background_color,
        })
        .await;
    Action::CreateGenerated.reply(result)
}

// ── PATCH /generated/{id}/label ──────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdateLabelRequest {
    #[serde(default)]
    pub label: Option<String>,
}

pub async fn update_generated_label(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateLabelRequest>, JsonRejection>,
) -> ActionReply {
    let body = match Action::UpdateLabel.body(payload) {
        Ok(body) => body,
        Err(reply) => return reply,
    };
    let usecase = UpdateGeneratedLabelUseCase {
        repo: state.generated_repo(),
        cache: state.listing_cache(),
    };
    Action::UpdateLabel.reply(usecase.execute(&id, body.label).await)
}
