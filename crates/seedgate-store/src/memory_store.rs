//! In-memory [`SeedStore`] for tests and embedding.

use std::sync::{PoisonError, RwLock};

use seedgate_crypto_core::Seed;

use crate::error::StoreError;
use crate::seed_store::SeedStore;

/// Volatile single-slot store. The slot is lost when the value is dropped.
#[derive(Debug, Default)]
pub struct MemorySeedStore {
    slot: RwLock<Option<Seed>>,
}

impl MemorySeedStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts out provisioned with `seed`.
    #[must_use]
    pub const fn with_seed(seed: Seed) -> Self {
        Self {
            slot: RwLock::new(Some(seed)),
        }
    }
}

impl SeedStore for MemorySeedStore {
    fn persist(&self, seed: &Seed) -> Result<(), StoreError> {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(seed.clone());
        Ok(())
    }

    fn load(&self) -> Result<Seed, StoreError> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(StoreError::NotProvisioned)
    }

    fn is_provisioned(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
