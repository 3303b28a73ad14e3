//! Cryptographic error types for `seedgate-crypto-core`.
//!
//! The `String` payloads carry local diagnostic detail (which decoding or
//! validation step failed). They are meant for operator logs only; callers
//! facing a requester must map the variant, never the message.

use thiserror::Error;

/// Errors produced by key loading, envelope opening and the TOTP engine.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The private key is missing, unparsable, or password-protected.
    #[error("private key load failed: {0}")]
    KeyLoad(String),

    /// The envelope is oversized or is not valid base64.
    #[error("envelope decode failed: {0}")]
    EnvelopeDecode(String),

    /// RSA-OAEP unwrap failed, or the recovered bytes are not UTF-8.
    #[error("decryption failed: {0}")]
    Decryption(String),

    /// Sealing failed: plaintext over the OAEP capacity, or the CSPRNG
    /// failed. Only raised on the encryptor side.
    #[error("envelope encryption failed: {0}")]
    Encryption(String),

    /// The recovered or stored text is not 64 lowercase hex characters.
    #[error("invalid seed format: {0}")]
    SeedFormat(String),

    /// The code argument passed to verification is malformed.
    #[error("invalid verification input: {0}")]
    VerificationInput(String),

    /// A platform memory-protection call failed (core dump limit).
    #[error("secure memory error: {0}")]
    SecureMemory(String),
}

impl CryptoError {
    /// Returns `true` for failures of the envelope pipeline (decode, unwrap,
    /// seed format).
    ///
    /// These must reach a requester as one indistinguishable signal.
    #[must_use]
    pub const fn is_envelope_rejection(&self) -> bool {
        matches!(
            self,
            Self::EnvelopeDecode(_) | Self::Decryption(_) | Self::SeedFormat(_)
        )
    }
}
