//! Code generation and verification commands.

use serde::{Deserialize, Serialize};
use seedgate_store::{ErrorKind, SeedStore, StoreError, TwoFactor};

use super::{ErrorResponse, INTERNAL};

/// Success body for `generate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Six-digit code.
    pub code: String,
    /// Seconds until the code rolls over.
    pub valid_for: u64,
}

/// Success body for `verify`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub valid: bool,
}

/// On these paths a seed-format error means the stored slot is corrupt,
/// not that a requester sent a bad envelope.
fn read_failure(err: StoreError) -> ErrorResponse {
    if err.kind() == ErrorKind::SeedFormat {
        tracing::error!("stored seed unreadable: {err}");
        return ErrorResponse::new(INTERNAL, "Internal error");
    }
    ErrorResponse::from(err)
}

/// Current code at Unix time `now`.
///
/// # Errors
///
/// `NOT_PROVISIONED` before the first provisioning, `INTERNAL` if the
/// stored seed cannot be read or is corrupt.
pub fn generate<S: SeedStore>(
    two_factor: &TwoFactor<S>,
    now: u64,
) -> Result<GenerateResponse, ErrorResponse> {
    let snapshot = two_factor.current_code(now).map_err(read_failure)?;
    Ok(GenerateResponse {
        code: snapshot.code.as_str().to_owned(),
        valid_for: snapshot.valid_for,
    })
}

/// Check `code` at Unix time `now`.
///
/// # Errors
///
/// `INVALID_CODE` if `code` is empty or not all digits,
/// `NOT_PROVISIONED` before the first provisioning.
pub fn verify<S: SeedStore>(
    two_factor: &TwoFactor<S>,
    code: &str,
    now: u64,
) -> Result<VerifyResponse, ErrorResponse> {
    let valid = two_factor.verify_code(code, now).map_err(read_failure)?;
    Ok(VerifyResponse { valid })
}
