use qrvault_domain::code::ScannedCode;
use qrvault_domain::id::CodeId;

use crate::domain::repository::{ListingCache, ScannedCodeRepository};
use crate::domain::types::{CachedListing, CreateScannedSubmission, normalize_text};
use crate::domain::validation::validate_create_scanned;
use crate::error::VaultServiceError;

// ── ListScannedCodes ─────────────────────────────────────────────────────────

pub struct ListScannedCodesUseCase<R: ScannedCodeRepository, C: ListingCache> {
    pub repo: R,
    pub cache: C,
}

impl<R: ScannedCodeRepository, C: ListingCache> ListScannedCodesUseCase<R, C> {
    pub async fn execute(&self) -> Result<Vec<ScannedCode>, VaultServiceError> {
        let generation = match self.cache.scanned().await {
            CachedListing::Fresh(codes) => return Ok(codes),
            CachedListing::Stale { generation } => generation,
        };
        let codes = self.repo.list().await?;
        self.cache.store_scanned(generation, codes.clone()).await;
        Ok(codes)
    }
}

// ── CreateScannedCode ────────────────────────────────────────────────────────

pub struct CreateScannedCodeUseCase<R: ScannedCodeRepository, C: ListingCache> {
    pub repo: R,
    pub cache: C,
}

impl<R: ScannedCodeRepository, C: ListingCache> CreateScannedCodeUseCase<R, C> {
    pub async fn execute(
        &self,
        submission: CreateScannedSubmission,
    ) -> Result<ScannedCode, VaultServiceError> {
        let code = validate_create_scanned(submission).map_err(VaultServiceError::Validation)?;
        let created = self.repo.create(&code).await?;
        self.cache.invalidate().await;
        tracing::info!(id = %created.id, "scan saved");
        Ok(created)
    }
}

// ── UpdateScannedNote ────────────────────────────────────────────────────────

pub struct UpdateScannedNoteUseCase<R: ScannedCodeRepository, C: ListingCache> {
    pub repo: R,
    pub cache: C,
}

impl<R: ScannedCodeRepository, C: ListingCache> UpdateScannedNoteUseCase<R, C> {
    pub async fn execute(
        &self,
        id: &str,
        note: Option<String>,
    ) -> Result<ScannedCode, VaultServiceError> {
        let id: CodeId = id
            .parse()
            .map_err(|_| VaultServiceError::ScannedCodeNotFound)?;
        let note = normalize_text(note);
        let updated = self
            .repo
            .update_note(id, note.as_deref())
            .await?
            .ok_or(VaultServiceError::ScannedCodeNotFound)?;
        self.cache.invalidate().await;
        tracing::info!(id = %updated.id, "scanned code note updated");
        Ok(updated)
    }
}
