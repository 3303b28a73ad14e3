//! RSA-OAEP seed envelopes.
//!
//! Wire format: standard padded base64 of an RSA-OAEP ciphertext
//! (SHA-256 hash, MGF1-SHA256, empty label). The plaintext is the seed's
//! 64-character lowercase hex text.
//!
//! - [`open_envelope`] is the provisioning path: size bound, base64, OAEP,
//!   UTF-8, seed validation.
//! - [`seal_envelope`] is the remote encryptor's side, used by tooling and
//!   tests.
//!
//! Each stage fails with its own [`CryptoError`] variant. Those variants are
//! for the caller's mapping and the operator's log; a requester must only
//! ever see one generic failure.

use rand::rngs::OsRng;
use rsa::Oaep;
use sha2::Sha256;

use crate::error::CryptoError;
use crate::keystore::{PrivateKey, PublicKey};
use crate::memory::SecretBuffer;
use crate::seed::Seed;

/// Largest envelope text accepted before any decoding (16 KiB).
///
/// A 4096-bit ciphertext is 684 base64 characters.
pub const MAX_ENVELOPE_LEN: usize = 16 * 1024;

fn oaep() -> Oaep {
    Oaep::new::<Sha256>()
}

/// Open a base64 envelope and return the validated seed.
///
/// ASCII whitespace anywhere in `envelope` is ignored, so wrapped or
/// newline-terminated envelope files decode as-is.
///
/// # Errors
///
/// - `CryptoError::EnvelopeDecode`: longer than [`MAX_ENVELOPE_LEN`], or
///   not valid base64.
/// - `CryptoError::Decryption`: OAEP unwrap failed, or the plaintext is
///   not UTF-8.
/// - `CryptoError::SeedFormat`: the plaintext is not 64 lowercase hex
///   characters.
pub fn open_envelope(key: &PrivateKey, envelope: &str) -> Result<Seed, CryptoError> {
    if envelope.len() > MAX_ENVELOPE_LEN {
        return Err(CryptoError::EnvelopeDecode(format!(
            "envelope is {} bytes (maximum {MAX_ENVELOPE_LEN})",
            envelope.len()
        )));
    }

    let compact: Vec<u8> = envelope
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let ciphertext = data_encoding::BASE64
        .decode(&compact)
        .map_err(|e| CryptoError::EnvelopeDecode(format!("invalid base64: {e}")))?;

    let plaintext = key
        .rsa()
        .decrypt(oaep(), &ciphertext)
        .map(SecretBuffer::from_vec)
        .map_err(|e| CryptoError::Decryption(format!("RSA-OAEP unwrap failed: {e}")))?;

    let text = std::str::from_utf8(plaintext.expose())
        .map_err(|e| CryptoError::Decryption(format!("plaintext is not UTF-8: {e}")))?;

    Seed::from_hex(text)
}

/// Encrypt `plaintext` to `key` and return the base64 envelope.
///
/// OAEP padding is randomised, so sealing the same plaintext twice yields
/// different envelopes.
///
/// # Errors
///
/// Returns `CryptoError::Encryption` if the plaintext is too long for the
/// key's OAEP capacity (190 bytes for RSA-2048) or the CSPRNG fails.
pub fn seal_envelope(key: &PublicKey, plaintext: &[u8]) -> Result<String, CryptoError> {
    let ciphertext = key
        .rsa()
        .encrypt(&mut OsRng, oaep(), plaintext)
        .map_err(|e| CryptoError::Encryption(format!("RSA-OAEP encryption failed: {e}")))?;
    Ok(data_encoding::BASE64.encode(&ciphertext))
}

/// Seal a validated seed's hex form.
///
/// # Errors
///
/// See [`seal_envelope`].
pub fn seal_seed(key: &PublicKey, seed: &Seed) -> Result<String, CryptoError> {
    seal_envelope(key, seed.to_hex().as_bytes())
}
