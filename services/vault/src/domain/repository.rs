#![allow(async_fn_in_trait)]

use qrvault_domain::code::{GeneratedCode, ScannedCode};
use qrvault_domain::id::CodeId;

use crate::domain::types::{CachedListing, NewGeneratedCode, NewScannedCode};
use crate::error::VaultServiceError;

/// Repository for generated codes.
pub trait GeneratedCodeRepository: Send + Sync {
    /// All records, newest first.
    async fn list(&self) -> Result<Vec<GeneratedCode>, VaultServiceError>;

    /// Insert a record. The id and `created_at` are assigned here.
    async fn create(&self, code: &NewGeneratedCode) -> Result<GeneratedCode, VaultServiceError>;

    /// Replace the label. Returns `None` when no record has this id.
    async fn update_label(
        &self,
        id: CodeId,
        label: Option<&str>,
    ) -> Result<Option<GeneratedCode>, VaultServiceError>;
}

/// Repository for scanned codes.
pub trait ScannedCodeRepository: Send + Sync {
    /// All records, most recently scanned first.
    async fn list(&self) -> Result<Vec<ScannedCode>, VaultServiceError>;

    /// Insert a record. The id and `scanned_at` are assigned here.
    async fn create(&self, code: &NewScannedCode) -> Result<ScannedCode, VaultServiceError>;

    /// Replace the note. Returns `None` when no record has this id.
    async fn update_note(
        &self,
        id: CodeId,
        note: Option<&str>,
    ) -> Result<Option<ScannedCode>, VaultServiceError>;
}

/// Cache of the two full listings.
///
/// Every successful write calls [`ListingCache::invalidate`], which marks both
/// views stale and advances the generation. A store carrying an older
/// generation than the current one is discarded.
pub trait ListingCache: Send + Sync {
    async fn generated(&self) -> CachedListing<GeneratedCode>;
    async fn store_generated(&self, generation: u64, codes: Vec<GeneratedCode>);
    async fn scanned(&self) -> CachedListing<ScannedCode>;
    async fn store_scanned(&self, generation: u64, codes: Vec<ScannedCode>);
    async fn invalidate(&self);
}
