//! Provisioning lifecycle: envelope in, seed stored, codes out.
//!
//! `Unprovisioned` becomes `Provisioned` on the first envelope that opens
//! and persists. Later envelopes replace the seed. A rejected envelope
//! leaves state and seed untouched.

use seedgate_crypto_core::{
    open_envelope, totp, PrivateKey, TotpCode, DEFAULT_WINDOW, MAX_WINDOW,
};

use crate::error::StoreError;
use crate::seed_store::SeedStore;

/// Whether a seed is available for code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisioningState {
    Unprovisioned,
    Provisioned,
}

/// The current code and the seconds left before it rolls over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSnapshot {
    pub code: TotpCode,
    /// In `1..=30`.
    pub valid_for: u64,
}

/// Two-factor service over a [`SeedStore`].
#[derive(Debug)]
pub struct TwoFactor<S> {
    store: S,
    window: u32,
}

impl<S: SeedStore> TwoFactor<S> {
    /// Wrap `store` with the default ±1 step verification window.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            window: DEFAULT_WINDOW,
        }
    }

    /// Override the verification window (steps on each side), clamped to
    /// [`MAX_WINDOW`].
    #[must_use]
    pub fn with_window(mut self, window: u32) -> Self {
        if window > MAX_WINDOW {
            tracing::warn!(requested = window, max = MAX_WINDOW, "verification window clamped");
        }
        self.window = window.min(MAX_WINDOW);
        self
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn window(&self) -> u32 {
        self.window
    }

    /// Open `envelope` with `key` and replace the stored seed.
    ///
    /// The rejection cause goes to the `debug` log only; the `warn` line
    /// carries no detail.
    ///
    /// # Errors
    ///
    /// - `StoreError::Crypto` with `EnvelopeDecode`, `Decryption` or
    ///   `SeedFormat` if the envelope is rejected.
    /// - `StoreError::Io` if the seed cannot be persisted.
    pub fn provision(&self, key: &PrivateKey, envelope: &str) -> Result<(), StoreError> {
        let seed = open_envelope(key, envelope).map_err(|e| {
            if e.is_envelope_rejection() {
                tracing::debug!(cause = %e, "envelope rejection cause");
                tracing::warn!("envelope rejected");
            }
            StoreError::from(e)
        })?;

        self.store.persist(&seed)?;
        tracing::info!("seed provisioned");
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> ProvisioningState {
        if self.store.is_provisioned() {
            ProvisioningState::Provisioned
        } else {
            ProvisioningState::Unprovisioned
        }
    }

    /// The code for Unix time `now` with its remaining validity.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotProvisioned` before the first successful
    /// [`provision`](Self::provision), or any [`SeedStore::load`] failure.
    pub fn current_code(&self, now: u64) -> Result<CodeSnapshot, StoreError> {
        let seed = self.store.load()?;
        let code = totp::generate(&seed, now)?;
        Ok(CodeSnapshot {
            code,
            valid_for: totp::remaining_validity(now),
        })
    }

    /// Check `code` at Unix time `now` within the configured window.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotProvisioned` before the first provisioning.
    /// - `StoreError::Crypto(VerificationInput)` if `code` is empty or not
    ///   all digits.
    pub fn verify_code(&self, code: &str, now: u64) -> Result<bool, StoreError> {
        let seed = self.store.load()?;
        let valid = totp::verify(&seed, code, now, self.window)?;
        tracing::info!(valid, "code verification");
        Ok(valid)
    }
}
