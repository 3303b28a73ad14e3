//! The validated 32-byte shared secret.
//!
//! A [`Seed`] only exists once its text form has passed validation: exactly
//! [`SEED_HEX_LEN`] characters from `0123456789abcdef`. Uppercase hex is
//! rejected, not folded.

use std::fmt;

use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::memory::{constant_time_eq, SecretBytes};

/// Raw seed length in bytes.
pub const SEED_LEN: usize = 32;

/// Length of the hex text form (two characters per byte).
pub const SEED_HEX_LEN: usize = 64;

/// A validated seed.
///
/// `Debug` and `Display` are masked, equality is constant-time.
#[derive(Clone)]
pub struct Seed {
    bytes: SecretBytes<SEED_LEN>,
}

impl Seed {
    /// Parse the 64-character lowercase hex form.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::SeedFormat` if `text` is not exactly 64
    /// characters or contains anything outside `0-9a-f`.
    pub fn from_hex(text: &str) -> Result<Self, CryptoError> {
        if text.len() != SEED_HEX_LEN {
            return Err(CryptoError::SeedFormat(format!(
                "expected {SEED_HEX_LEN} characters, got {}",
                text.len()
            )));
        }
        if !text.bytes().all(is_lower_hex) {
            return Err(CryptoError::SeedFormat(
                "seed contains characters outside 0-9a-f".into(),
            ));
        }

        let mut bytes = [0u8; SEED_LEN];
        data_encoding::HEXLOWER
            .decode_mut(text.as_bytes(), &mut bytes)
            .map_err(|e| CryptoError::SeedFormat(format!("hex decode failed: {}", e.error)))?;
        Ok(Self::from_bytes(bytes))
    }

    /// Wrap 32 raw bytes. The array is moved, no copy is left behind.
    #[must_use]
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self {
            bytes: SecretBytes::new(bytes),
        }
    }

    /// Borrow the raw seed bytes.
    #[must_use]
    pub const fn expose(&self) -> &[u8; SEED_LEN] {
        self.bytes.expose()
    }

    /// The canonical lowercase hex form, in a zeroize-on-drop string.
    #[must_use]
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(data_encoding::HEXLOWER.encode(self.bytes.expose()))
    }
}

const fn is_lower_hex(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'a'..=b'f')
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(self.expose(), other.expose())
    }
}

impl Eq for Seed {}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(***)")
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(***)")
    }
}
