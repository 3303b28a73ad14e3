//! Provisioning commands: key loading, envelope intake, status.

use std::io::Read;

use serde::{Deserialize, Serialize};
use seedgate_crypto_core::{CryptoError, KeyStore, PrivateKey, MAX_ENVELOPE_LEN};
use seedgate_store::{ProvisioningState, SeedStore, StoreError, TwoFactor};

use super::ErrorResponse;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Success body for `provision`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionResponse {
    /// Always `"ok"`.
    pub status: String,
}

/// Body for `status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub provisioned: bool,
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Load the service private key.
///
/// # Errors
///
/// Returns an `INTERNAL` response if the key is missing, unparsable or
/// password-protected.
pub fn load_key(keystore: &KeyStore) -> Result<PrivateKey, ErrorResponse> {
    keystore
        .load()
        .map_err(|e| ErrorResponse::from(StoreError::from(e)))
}

/// Read an envelope from `reader`, never buffering more than one byte past
/// [`MAX_ENVELOPE_LEN`].
///
/// # Errors
///
/// Returns `DECRYPTION_FAILED` if the input is too long or not UTF-8, and
/// `INTERNAL` if the read itself fails.
pub fn read_envelope(reader: impl Read) -> Result<String, ErrorResponse> {
    let limit = u64::try_from(MAX_ENVELOPE_LEN)
        .unwrap_or(u64::MAX)
        .saturating_add(1);
    let mut bytes = Vec::new();
    reader
        .take(limit)
        .read_to_end(&mut bytes)
        .map_err(|e| ErrorResponse::from(StoreError::from(e)))?;

    if bytes.len() > MAX_ENVELOPE_LEN {
        return Err(StoreError::from(CryptoError::EnvelopeDecode(format!(
            "envelope exceeds {MAX_ENVELOPE_LEN} bytes"
        )))
        .into());
    }
    String::from_utf8(bytes).map_err(|_| {
        StoreError::from(CryptoError::EnvelopeDecode("envelope is not UTF-8".into())).into()
    })
}

/// Open `envelope` and replace the stored seed.
///
/// # Errors
///
/// Returns `DECRYPTION_FAILED` for any envelope rejection, `INTERNAL` if
/// the seed cannot be stored.
pub fn provision<S: SeedStore>(
    two_factor: &TwoFactor<S>,
    key: &PrivateKey,
    envelope: &str,
) -> Result<ProvisionResponse, ErrorResponse> {
    two_factor.provision(key, envelope)?;
    Ok(ProvisionResponse {
        status: "ok".into(),
    })
}

#[must_use]
pub fn status<S: SeedStore>(two_factor: &TwoFactor<S>) -> StatusResponse {
    StatusResponse {
        provisioned: two_factor.state() == ProvisioningState::Provisioned,
    }
}
