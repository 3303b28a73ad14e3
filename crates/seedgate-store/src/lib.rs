//! `seedgate-store` — single-slot seed persistence and the provisioning
//! lifecycle.
//!
//! [`SeedStore`] holds the one current seed; [`TwoFactor`] composes it with
//! envelope opening and the TOTP engine from `seedgate-crypto-core`.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod seed_store;

pub mod memory_store;

pub mod lifecycle;

pub use error::{ErrorKind, StoreError};
pub use lifecycle::{CodeSnapshot, ProvisioningState, TwoFactor};
pub use memory_store::MemorySeedStore;
pub use seed_store::{FileSeedStore, SeedStore};
