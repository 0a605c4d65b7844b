use std::sync::Arc;

use tokio::sync::RwLock;

use qrvault_domain::code::{GeneratedCode, ScannedCode};

use crate::domain::repository::ListingCache;
use crate::domain::types::CachedListing;

#[derive(Default)]
struct Slots {
    generation: u64,
    generated: Option<Vec<GeneratedCode>>,
    scanned: Option<Vec<ScannedCode>>,
}

/// Process-local listing cache shared by every handler.
#[derive(Clone, Default)]
pub struct MemoryListingCache {
    slots: Arc<RwLock<Slots>>,
}

impl MemoryListingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn generation(&self) -> u64 {
        self.slots.read().await.generation
    }
}

impl ListingCache for MemoryListingCache {
    async fn generated(&self) -> CachedListing<GeneratedCode> {
        let slots = self.slots.read().await;
        match &slots.generated {
            Some(codes) => CachedListing::Fresh(codes.clone()),
            None => CachedListing::Stale {
                generation: slots.generation,
            },
        }
    }

    async fn store_generated(&self, generation: u64, codes: Vec<GeneratedCode>) {
        let mut slots = self.slots.write().await;
        if slots.generation == generation {
            slots.generated = Some(codes);
        }
    }

    async fn scanned(&self) -> CachedListing<ScannedCode> {
        let slots = self.slots.read().await;
        match &slots.scanned {
            Some(codes) => CachedListing::Fresh(codes.clone()),
            None => CachedListing::Stale {
                generation: slots.generation,
            },
        }
    }

    async fn store_scanned(&self, generation: u64, codes: Vec<ScannedCode>) {
        let mut slots = self.slots.write().await;
        if slots.generation == generation {
            slots.scanned = Some(codes);
        }
    }

    async fn invalidate(&self) {
        let mut slots = self.slots.write().await;
        slots.generation += 1;
        slots.generated = None;
        slots.scanned = None;
        tracing::debug!(generation = slots.generation, "listing cache invalidated");
    }
}
