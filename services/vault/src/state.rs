use sea_orm::DatabaseConnection;

use crate::infra::cache::MemoryListingCache;
use crate::infra::db::{DbGeneratedCodeRepository, DbScannedCodeRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub listing_cache: MemoryListingCache,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            listing_cache: MemoryListingCache::new(),
        }
    }

    pub fn generated_repo(&self) -> DbGeneratedCodeRepository {
        DbGeneratedCodeRepository {
            db: self.db.clone(),
        }
    }

    pub fn scanned_repo(&self) -> DbScannedCodeRepository {
        DbScannedCodeRepository {
            db: self.db.clone(),
        }
    }

    pub fn listing_cache(&self) -> MemoryListingCache {
        self.listing_cache.clone()
    }
}
