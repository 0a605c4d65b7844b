use qrvault_domain::code::GeneratedCode;
use qrvault_domain::id::CodeId;

use crate::domain::repository::{GeneratedCodeRepository, ListingCache};
use crate::domain::types::{CachedListing, CreateGeneratedSubmission, normalize_text};
use crate::domain::validation::validate_create_generated;
use crate::error::VaultServiceError;

// ── ListGeneratedCodes ───────────────────────────────────────────────────────

pub struct ListGeneratedCodesUseCase<R: GeneratedCodeRepository, C: ListingCache> {
    pub repo: R,
    pub cache: C,
}

impl<R: GeneratedCodeRepository, C: ListingCache> ListGeneratedCodesUseCase<R, C> {
    pub async fn execute(&self) -> Result<Vec<GeneratedCode>, VaultServiceError> {
        let generation = match self.cache.generated().await {
            CachedListing::Fresh(codes) => return Ok(codes),
            CachedListing::Stale { generation } => generation,
        };
        let codes = self.repo.list().await?;
        self.cache.store_generated(generation, codes.clone()).await;
        Ok(codes)
    }
}

// ── CreateGeneratedCode ──────────────────────────────────────────────────────

pub struct CreateGeneratedCodeUseCase<R: GeneratedCodeRepository, C: ListingCache> {
    pub repo: R,
    pub cache: C,
}

impl<R: GeneratedCodeRepository, C: ListingCache> CreateGeneratedCodeUseCase<R, C> {
    pub async fn execute(
        &self,
        submission: CreateGeneratedSubmission,
    ) -> Result<GeneratedCode, VaultServiceError> {
        let code = validate_create_generated(submission).map_err(VaultServiceError::Validation)?;
        let created = self.repo.create(&code).await?;
        self.cache.invalidate().await;
        tracing::info!(id = %created.id, "generated code created");
        Ok(created)
    }
}

// ── UpdateGeneratedLabel ─────────────────────────────────────────────────────

pub struct UpdateGeneratedLabelUseCase<R: GeneratedCodeRepository, C: ListingCache> {
    pub repo: R,
    pub cache: C,
}

impl<R: GeneratedCodeRepository, C: ListingCache> UpdateGeneratedLabelUseCase<R, C> {
    /// An id that does not parse cannot name a record and is reported as
    /// not found.
    pub async fn execute(
        &self,
        id: &str,
        label: Option<String>,
    ) -> Result<GeneratedCode, VaultServiceError> {
        let id: CodeId = id
            .parse()
            .map_err(|_| VaultServiceError::GeneratedCodeNotFound)?;
        let label = normalize_text(label);
        let updated = self
            .repo
            .update_label(id, label.as_deref())
            .await?
            .ok_or(VaultServiceError::GeneratedCodeNotFound)?;
        self.cache.invalidate().await;
        tracing::info!(id = %updated.id, "generated code label updated");
        Ok(updated)
    }
}
