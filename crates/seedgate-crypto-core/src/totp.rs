//! RFC 6238 TOTP engine over a [`Seed`].
//!
//! Parameters are fixed: HMAC-SHA1, 6 digits, 30-second steps. SHA-1 is
//! what standard authenticator apps compute for a plain base32 secret, so
//! changing it breaks every enrolled device.
//!
//! The HMAC key is the raw key behind the seed's [`Base32Secret`], which is
//! derived fresh on every call and never stored.

use std::fmt;

use ring::hmac;
use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::memory::{constant_time_eq, SecretBuffer};
use crate::seed::Seed;

// ── Constants ───────────────────────────────────────────────────────

/// Time step in seconds (RFC 6238 §4 default).
pub const PERIOD: u64 = 30;

/// Code length.
pub const DIGITS: usize = 6;

/// Steps accepted on either side of the current one (RFC 6238 §5.2).
pub const DEFAULT_WINDOW: u32 = 1;

/// Largest window [`verify`] honours; wider requests are clamped.
pub const MAX_WINDOW: u32 = 10;

const MODULUS: u32 = 1_000_000;

const ALGORITHM: hmac::Algorithm = hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY;

// ── Types ───────────────────────────────────────────────────────────

/// RFC 4648 base32 form of a seed: uppercase alphabet, `=` padding.
///
/// This is the string an authenticator app is enrolled with.
pub struct Base32Secret(Zeroizing<String>);

impl Base32Secret {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode back to the raw HMAC key bytes.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::SeedFormat` if the text is not valid padded
    /// base32.
    pub fn key_bytes(&self) -> Result<SecretBuffer, CryptoError> {
        data_encoding::BASE32
            .decode(self.0.as_bytes())
            .map(SecretBuffer::from_vec)
            .map_err(|e| CryptoError::SeedFormat(format!("base32 secret did not decode: {e}")))
    }
}

impl fmt::Debug for Base32Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Base32Secret(***)")
    }
}

/// A 6-digit, zero-padded one-time code.
#[derive(Clone, PartialEq, Eq)]
pub struct TotpCode(String);

impl TotpCode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TotpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for TotpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TotpCode(******)")
    }
}

// ── Secret encoding ─────────────────────────────────────────────────

/// Encode the seed's 32 raw bytes as a [`Base32Secret`] (56 characters).
#[must_use]
pub fn encode(seed: &Seed) -> Base32Secret {
    Base32Secret(Zeroizing::new(data_encoding::BASE32.encode(seed.expose())))
}

// ── HOTP (RFC 4226) ────────────────────────────────────────────────

/// RFC 4226 HOTP with HMAC-SHA1, truncated to [`DIGITS`] digits.
///
/// # Errors
///
/// Returns `CryptoError::SeedFormat` if `key` is empty.
#[must_use = "OTP code should be used or compared"]
pub fn generate_hotp(key: &[u8], counter: u64) -> Result<TotpCode, CryptoError> {
    if key.is_empty() {
        return Err(CryptoError::SeedFormat("HMAC key must not be empty".into()));
    }

    // HMAC(K, C), C as 8-byte big-endian (RFC 4226 §5.2).
    let key = hmac::Key::new(ALGORITHM, key);
    let tag = hmac::sign(&key, &counter.to_be_bytes());
    let mac = tag.as_ref();

    // Dynamic truncation (RFC 4226 §5.3); SHA-1 output is 20 bytes so
    // offset + 3 <= 18.
    let offset = usize::from(mac[mac.len().wrapping_sub(1)] & 0x0F);
    let binary = u32::from_be_bytes([
        mac[offset] & 0x7F,
        mac[offset.wrapping_add(1)],
        mac[offset.wrapping_add(2)],
        mac[offset.wrapping_add(3)],
    ]);

    #[allow(clippy::arithmetic_side_effects)]
    let code = binary % MODULUS;
    let width = DIGITS;
    Ok(TotpCode(format!("{code:0>width$}")))
}

// ── TOTP (RFC 6238) ────────────────────────────────────────────────

/// The RFC 6238 counter for `now`: `floor(now / 30)`.
#[must_use]
#[allow(clippy::arithmetic_side_effects)] // PERIOD is a non-zero constant.
pub const fn time_step(now: u64) -> u64 {
    now / PERIOD
}

/// Seconds until the current code rolls over, in `1..=30`.
///
/// Informational only.
#[must_use]
#[allow(clippy::arithmetic_side_effects)] // now % PERIOD < PERIOD, no underflow.
pub const fn remaining_validity(now: u64) -> u64 {
    PERIOD - now % PERIOD
}

/// Generate the code for `seed` at Unix time `now` (seconds).
///
/// # Errors
///
/// Returns `CryptoError::SeedFormat` only if the derived base32 secret
/// fails to decode, which a valid [`Seed`] cannot produce.
#[must_use = "OTP code should be used or compared"]
pub fn generate(seed: &Seed, now: u64) -> Result<TotpCode, CryptoError> {
    let key = encode(seed).key_bytes()?;
    generate_hotp(key.expose(), time_step(now))
}

/// Check `code` against every step in `T - window ..= T + window`.
///
/// `window` is clamped to [`MAX_WINDOW`], bounding the work per call at
/// 21 HMACs.
///
/// Every step in the window is computed and compared in constant time;
/// the loop never stops at the first match, so timing does not reveal
/// which step (if any) matched. Step arithmetic saturates at both ends of
/// the `u64` range.
///
/// # Errors
///
/// Returns `CryptoError::VerificationInput` if `code` is empty or
/// contains anything other than ASCII digits. A numeric code of the wrong
/// length is well-formed and yields `Ok(false)`.
#[must_use = "verification result should be checked"]
pub fn verify(seed: &Seed, code: &str, now: u64, window: u32) -> Result<bool, CryptoError> {
    if code.is_empty() {
        return Err(CryptoError::VerificationInput("code must not be empty".into()));
    }
    if !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CryptoError::VerificationInput(
            "code must contain only digits".into(),
        ));
    }

    let window = window.min(MAX_WINDOW);
    let key = encode(seed).key_bytes()?;
    let current = time_step(now);
    let start = current.saturating_sub(u64::from(window));
    let end = current.saturating_add(u64::from(window));

    let mut valid = false;
    let mut step = start;
    loop {
        let expected = generate_hotp(key.expose(), step)?;
        valid |= constant_time_eq(expected.as_str().as_bytes(), code.as_bytes());
        if step == end {
            break;
        }
        step = step.wrapping_add(1);
    }

    Ok(valid)
}

// ── Tests ───────────────────────────────────────────────────────────
