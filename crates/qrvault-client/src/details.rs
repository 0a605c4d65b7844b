use qrvault_bridge::render::{QrStyle, preview};
use qrvault_domain::action::ActionState;
use qrvault_domain::code::{CodeKind, VaultEntry};

use crate::api::VaultApi;
use crate::error::ClientError;
use crate::vault::VaultState;

/// Detail view of one entry with its single editable field.
#[derive(Debug, Clone)]
pub struct DetailView {
    entry: VaultEntry,
    value: String,
    preview: Option<String>,
}

impl DetailView {
    /// Seed the editor from the entry's label or note and render its preview
    /// in the entry's own colors.
    pub fn open(entry: VaultEntry) -> Result<Self, ClientError> {
        let (foreground, background) = entry.colors();
        let style = QrStyle::parse(foreground, background)?;
        let preview = preview(entry.data(), &style)?;
        Ok(Self {
            value: entry.editable_text().unwrap_or_default().to_owned(),
            entry,
            preview,
        })
    }

    pub fn entry(&self) -> &VaultEntry {
        &self.entry
    }

    pub fn field_name(&self) -> &'static str {
        match self.entry.kind() {
            CodeKind::Generated => "Label",
            CodeKind::Scanned => "Note",
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_dirty(&self) -> bool {
        self.value != self.entry.editable_text().unwrap_or_default()
    }

    /// `data:` URL of the rendered code.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub async fn save<A: VaultApi>(
        &self,
        vault: &mut VaultState<A>,
    ) -> Result<ActionState, ClientError> {
        vault.save_edit(&self.entry, &self.value).await
    }
}
