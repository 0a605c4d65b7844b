use qrvault_domain::action::ActionState;
use qrvault_domain::code::{CodeKind, GeneratedCode, ScannedCode, VaultEntry};
use qrvault_domain::id::CodeId;
use qrvault_domain::sort::VaultSort;

use crate::api::{CreateGeneratedRequest, CreateScannedRequest, VaultApi};
use crate::error::ClientError;
use crate::projection::VaultFilter;

/// Shown in place of the lists when a fetch fails.
pub const FETCH_FAILED: &str = "Failed to fetch data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

/// Browsing state of the vault: both listings plus the search and sort the
/// user has applied to them.
pub struct VaultState<A: VaultApi> {
    api: A,
    phase: Phase,
    generated: Vec<GeneratedCode>,
    scanned: Vec<ScannedCode>,
    error: Option<String>,
    filter: VaultFilter,
}

impl<A: VaultApi> VaultState<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            phase: Phase::Loading,
            generated: Vec::new(),
            scanned: Vec::new(),
            error: None,
            filter: VaultFilter::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn filter(&self) -> &VaultFilter {
        &self.filter
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_sort(&mut self, sort: VaultSort) {
        self.filter.sort = sort;
    }

    pub fn visible_generated(&self) -> Vec<GeneratedCode> {
        self.filter.generated(&self.generated)
    }

    pub fn visible_scanned(&self) -> Vec<ScannedCode> {
        self.filter.scanned(&self.scanned)
    }

    /// Initial fetch. Ends in [`Phase::Ready`] whether or not it succeeds.
    pub async fn load(&mut self) {
        self.phase = Phase::Loading;
        self.fetch().await;
        self.phase = Phase::Ready;
    }

    /// Re-fetch both lists without going back to [`Phase::Loading`].
    pub async fn refresh(&mut self) {
        self.fetch().await;
    }

    async fn fetch(&mut self) {
        match tokio::try_join!(self.api.list_generated(), self.api.list_scanned()) {
            Ok((generated, scanned)) => {
                self.generated = generated;
                self.scanned = scanned;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch vault");
                self.error = Some(FETCH_FAILED.to_owned());
            }
        }
    }

    pub async fn create_generated(
        &mut self,
        request: &CreateGeneratedRequest,
    ) -> Result<ActionState, ClientError> {
        let state = self.api.create_generated(request).await?;
        self.after_write(state).await
    }

    pub async fn save_scan(
        &mut self,
        request: &CreateScannedRequest,
    ) -> Result<ActionState, ClientError> {
        let state = self.api.create_scanned(request).await?;
        self.after_write(state).await
    }

    /// Save the edited label or note of `entry`.
    pub async fn save_edit(
        &mut self,
        entry: &VaultEntry,
        text: &str,
    ) -> Result<ActionState, ClientError> {
        match entry.kind() {
            CodeKind::Generated => self.save_label(entry.id(), text).await,
            CodeKind::Scanned => self.save_note(entry.id(), text).await,
        }
    }

    pub async fn save_label(
        &mut self,
        id: CodeId,
        label: &str,
    ) -> Result<ActionState, ClientError> {
        let state = self.api.update_label(id, label).await?;
        self.after_write(state).await
    }

    pub async fn save_note(
        &mut self,
        id: CodeId,
        note: &str,
    ) -> Result<ActionState, ClientError> {
        let state = self.api.update_note(id, note).await?;
        self.after_write(state).await
    }

    async fn after_write(&mut self, state: ActionState) -> Result<ActionState, ClientError> {
        if state.success {
            self.refresh().await;
        }
        Ok(state)
    }
}
