//! Generated and scanned code records as exchanged over the wire.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::color::{DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};
use crate::id::CodeId;

/// A QR code created from user-supplied text plus styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCode {
    pub id: CodeId,
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub foreground_color: String,
    pub background_color: String,
    pub created_at: DateTime<Utc>,
}

/// A QR code payload captured by decoding an image or camera frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedCode {
    pub id: CodeId,
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub scanned_at: DateTime<Utc>,
}

/// Discriminates the two record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeKind {
    Generated,
    Scanned,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generated => "generated",
            Self::Scanned => "scanned",
        })
    }
}

/// Either record, tagged with an explicit `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VaultEntry {
    Generated(GeneratedCode),
    Scanned(ScannedCode),
}

impl VaultEntry {
    pub fn kind(&self) -> CodeKind {
        match self {
            Self::Generated(_) => CodeKind::Generated,
            Self::Scanned(_) => CodeKind::Scanned,
        }
    }

    pub fn id(&self) -> CodeId {
        match self {
            Self::Generated(code) => code.id,
            Self::Scanned(code) => code.id,
        }
    }

    pub fn data(&self) -> &str {
        match self {
            Self::Generated(code) => &code.data,
            Self::Scanned(code) => &code.data,
        }
    }

    /// The one field users may edit: the label of a generated code or the
    /// note of a scanned one.
    pub fn editable_text(&self) -> Option<&str> {
        match self {
            Self::Generated(code) => code.label.as_deref(),
            Self::Scanned(code) => code.note.as_deref(),
        }
    }

    /// Foreground and background colors used when rendering the entry.
    /// Scanned codes carry no styling and render black on white.
    pub fn colors(&self) -> (&str, &str) {
        match self {
            Self::Generated(code) => (&code.foreground_color, &code.background_color),
            Self::Scanned(_) => (DEFAULT_FOREGROUND, DEFAULT_BACKGROUND),
        }
    }
}

impl From<GeneratedCode> for VaultEntry {
    fn from(code: GeneratedCode) -> Self {
        Self::Generated(code)
    }
}

impl From<ScannedCode> for VaultEntry {
    fn from(code: ScannedCode) -> Self {
        Self::Scanned(code)
    }
}
