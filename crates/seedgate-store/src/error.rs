//! Error types for `seedgate-store`.

use seedgate_crypto_core::CryptoError;
use thiserror::Error;

/// Errors produced by seed storage and lifecycle operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Envelope, seed, key or code failure (delegated from crypto-core).
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// No seed has been persisted yet.
    #[error("seed not provisioned")]
    NotProvisioned,

    /// I/O error from the durable backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse failure category, for choosing a response without matching on
/// error detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    KeyLoad,
    EnvelopeDecode,
    Decryption,
    SeedFormat,
    NotProvisioned,
    VerificationInput,
    /// Filesystem, platform resource or encryptor-side failure.
    Storage,
}

impl StoreError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Crypto(err) => match err {
                CryptoError::KeyLoad(_) => ErrorKind::KeyLoad,
                CryptoError::EnvelopeDecode(_) => ErrorKind::EnvelopeDecode,
                CryptoError::Decryption(_) => ErrorKind::Decryption,
                CryptoError::SeedFormat(_) => ErrorKind::SeedFormat,
                CryptoError::VerificationInput(_) => ErrorKind::VerificationInput,
                CryptoError::SecureMemory(_) | CryptoError::Encryption(_) => ErrorKind::Storage,
            },
            Self::NotProvisioned => ErrorKind::NotProvisioned,
            Self::Io(_) => ErrorKind::Storage,
        }
    }
}

impl ErrorKind {
    /// Whether this kind belongs to the envelope-opening path, which
    /// callers must report as a single generic failure.
    #[must_use]
    pub const fn is_envelope_rejection(self) -> bool {
        matches!(self, Self::EnvelopeDecode | Self::Decryption | Self::SeedFormat)
    }
}
