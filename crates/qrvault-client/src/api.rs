#![allow(async_fn_in_trait)]

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use qrvault_domain::action::ActionState;
use qrvault_domain::code::{GeneratedCode, ScannedCode};
use qrvault_domain::id::CodeId;

use crate::error::ClientError;

// ── Request bodies ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGeneratedRequest {
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub foreground_color: String,
    pub background_color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateScannedRequest {
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Deserialize)]
struct DecodeBody {
    data: String,
}

// ── VaultApi ─────────────────────────────────────────────────────────────────

/// Remote operations the client needs from the vault service.
///
/// Actions resolve to the server's [`ActionState`] whatever the HTTP status;
/// only transport failures and unexpected bodies are errors.
pub trait VaultApi: Send + Sync {
    async fn list_generated(&self) -> Result<Vec<GeneratedCode>, ClientError>;
    async fn list_scanned(&self) -> Result<Vec<ScannedCode>, ClientError>;
    async fn create_generated(
        &self,
        request: &CreateGeneratedRequest,
    ) -> Result<ActionState, ClientError>;
    async fn create_scanned(
        &self,
        request: &CreateScannedRequest,
    ) -> Result<ActionState, ClientError>;
    async fn update_label(&self, id: CodeId, label: &str) -> Result<ActionState, ClientError>;
    async fn update_note(&self, id: CodeId, note: &str) -> Result<ActionState, ClientError>;
}

pub struct HttpVaultApi {
    client: Client,
    base_url: String,
}

impl HttpVaultApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Server-side decode of an uploaded image.
    pub async fn decode(&self, image: Vec<u8>) -> Result<String, ClientError> {
        let resp = self
            .client
            .post(self.url("/scanned/decode"))
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(image)
            .send()
            .await?;
        Ok(expect_success(resp).await?.json::<DecodeBody>().await?.data)
    }
}

impl VaultApi for HttpVaultApi {
    async fn list_generated(&self) -> Result<Vec<GeneratedCode>, ClientError> {
        let resp = self.client.get(self.url("/generated")).send().await?;
        Ok(expect_success(resp).await?.json().await?)
    }

    async fn list_scanned(&self) -> Result<Vec<ScannedCode>, ClientError> {
        let resp = self.client.get(self.url("/scanned")).send().await?;
        Ok(expect_success(resp).await?.json().await?)
    }

    async fn create_generated(
        &self,
        request: &CreateGeneratedRequest,
    ) -> Result<ActionState, ClientError> {
        let resp = self
            .client
            .post(self.url("/generated"))
            .json(request)
            .send()
            .await?;
        action_state(resp).await
    }

    async fn create_scanned(
        &self,
        request: &CreateScannedRequest,
    ) -> Result<ActionState, ClientError> {
        let resp = self
            .client
            .post(self.url("/scanned"))
            .json(request)
            .send()
            .await?;
        action_state(resp).await
    }

    async fn update_label(&self, id: CodeId, label: &str) -> Result<ActionState, ClientError> {
        let resp = self
            .client
            .patch(self.url(&format!("/generated/{id}/label")))
            .json(&serde_json::json!({ "label": label }))
            .send()
            .await?;
        action_state(resp).await
    }

    async fn update_note(&self, id: CodeId, note: &str) -> Result<ActionState, ClientError> {
        let resp = self
            .client
            .patch(self.url(&format!("/scanned/{id}/note")))
            .json(&serde_json::json!({ "note": note }))
            .send()
            .await?;
        action_state(resp).await
    }
}

async fn expect_success(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let text = resp.text().await.unwrap_or_default();
    Err(status_error(status, &text))
}

async fn action_state(resp: Response) -> Result<ActionState, ClientError> {
    let status = resp.status();
    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|_| status_error(status, &text))
}

fn status_error(status: StatusCode, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_owned()
        });
    ClientError::Status {
        status: status.as_u16(),
        message,
    }
}
