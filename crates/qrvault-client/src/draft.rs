//! Editors for new records before they are submitted.

use qrvault_bridge::camera::{Camera, CameraSession};
use qrvault_bridge::decode::decode_image;
use qrvault_bridge::render::{QrStyle, preview};
use qrvault_domain::action::ActionState;
use qrvault_domain::color::{DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};

use crate::api::{CreateGeneratedRequest, CreateScannedRequest, VaultApi};
use crate::error::ClientError;
use crate::vault::VaultState;

// ── CreateDraft ──────────────────────────────────────────────────────────────

/// Form state for a new generated code. The preview is recomputed on every
/// change.
#[derive(Debug, Clone)]
pub struct CreateDraft {
    data: String,
    label: String,
    foreground_color: String,
    background_color: String,
    preview: Option<String>,
    preview_error: Option<String>,
}

impl Default for CreateDraft {
    fn default() -> Self {
        Self {
            data: String::new(),
            label: String::new(),
            foreground_color: DEFAULT_FOREGROUND.to_owned(),
            background_color: DEFAULT_BACKGROUND.to_owned(),
            preview: None,
            preview_error: None,
        }
    }
}

impl CreateDraft {
    pub fn set_data(&mut self, data: impl Into<String>) {
        self.data = data.into();
        self.render();
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_foreground_color(&mut self, color: impl Into<String>) {
        self.foreground_color = color.into();
        self.render();
    }

    pub fn set_background_color(&mut self, color: impl Into<String>) {
        self.background_color = color.into();
        self.render();
    }

    /// `data:` URL of the current preview; `None` while data is empty or the
    /// input cannot be rendered.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn preview_error(&self) -> Option<&str> {
        self.preview_error.as_deref()
    }

    fn render(&mut self) {
        let rendered = QrStyle::parse(&self.foreground_color, &self.background_color)
            .and_then(|style| preview(&self.data, &style));
        match rendered {
            Ok(preview) => {
                self.preview = preview;
                self.preview_error = None;
            }
            Err(e) => {
                self.preview = None;
                self.preview_error = Some(e.to_string());
            }
        }
    }

    pub fn request(&self) -> CreateGeneratedRequest {
        CreateGeneratedRequest {
            data: self.data.clone(),
            label: Some(self.label.clone()).filter(|l| !l.trim().is_empty()),
            foreground_color: self.foreground_color.clone(),
            background_color: self.background_color.clone(),
        }
    }

    /// Submit the draft. It is cleared once the server accepts it.
    pub async fn submit<A: VaultApi>(
        &mut self,
        vault: &mut VaultState<A>,
    ) -> Result<ActionState, ClientError> {
        let state = vault.create_generated(&self.request()).await?;
        if state.success {
            *self = Self::default();
        }
        Ok(state)
    }
}

// ── ScanDraft ────────────────────────────────────────────────────────────────

/// A decoded payload waiting to be saved, with an optional note.
#[derive(Debug, Clone, Default)]
pub struct ScanDraft {
    data: Option<String>,
    note: String,
}

impl ScanDraft {
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    pub fn capture(&mut self, data: impl Into<String>) {
        self.data = Some(data.into());
    }

    /// Decode a still image locally and capture its payload.
    pub fn capture_image(&mut self, image: &[u8]) -> Result<&str, ClientError> {
        let data = decode_image(image)?;
        Ok(self.data.insert(data).as_str())
    }

    /// Scan with the camera until a code is found; the camera is released
    /// either way.
    pub async fn capture_camera<C: Camera>(
        &mut self,
        session: &mut CameraSession<C>,
    ) -> Result<&str, ClientError> {
        let data = session.scan().await?;
        Ok(self.data.insert(data).as_str())
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    /// Discard the capture to scan another code.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn request(&self) -> CreateScannedRequest {
        CreateScannedRequest {
            data: self.data.clone().unwrap_or_default(),
            note: Some(self.note.clone()).filter(|n| !n.trim().is_empty()),
        }
    }

    pub async fn submit<A: VaultApi>(
        &mut self,
        vault: &mut VaultState<A>,
    ) -> Result<ActionState, ClientError> {
        let state = vault.save_scan(&self.request()).await?;
        if state.success {
            self.reset();
        }
        Ok(state)
    }
}
