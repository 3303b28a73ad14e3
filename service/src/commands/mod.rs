//! Command handlers for the SEEDGATE CLI.
//!
//! Each submodule returns dedicated DTOs with camelCase fields, never
//! domain types. Failures become an [`ErrorResponse`] with a fixed,
//! generic message; internal detail stays in the log.

pub mod seed;
pub mod totp;

use serde::{Deserialize, Serialize};
use seedgate_store::{ErrorKind, StoreError};

pub const DECRYPTION_FAILED: &str = "DECRYPTION_FAILED";
pub const NOT_PROVISIONED: &str = "NOT_PROVISIONED";
pub const INVALID_CODE: &str = "INVALID_CODE";
pub const INTERNAL: &str = "INTERNAL";

/// Error body written to stderr on failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub code: String,
    /// Generic, caller-facing message.
    pub message: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Process exit status for this response.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self.code.as_str() {
            DECRYPTION_FAILED => 2,
            NOT_PROVISIONED => 3,
            INVALID_CODE => 4,
            _ => 1,
        }
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }
}

impl From<&StoreError> for ErrorResponse {
    fn from(err: &StoreError) -> Self {
        match err.kind() {
            ErrorKind::EnvelopeDecode | ErrorKind::Decryption | ErrorKind::SeedFormat => {
                Self::new(DECRYPTION_FAILED, "Decryption failed")
            }
            ErrorKind::NotProvisioned => Self::new(NOT_PROVISIONED, "Seed not decrypted yet"),
            ErrorKind::VerificationInput => {
                Self::new(INVALID_CODE, "Code must be a string of digits")
            }
            ErrorKind::KeyLoad | ErrorKind::Storage => {
                tracing::error!("internal failure: {err}");
                Self::new(INTERNAL, "Internal error")
            }
        }
    }
}

impl From<StoreError> for ErrorResponse {
    fn from(err: StoreError) -> Self {
        Self::from(&err)
    }
}

/// Current Unix time in seconds; `0` if the clock is before the epoch.
#[must_use]
pub fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
