//! `seedgate-crypto-core` — envelope opening, seed validation and TOTP.
//!
//! Pure, synchronous primitives: the only I/O is [`KeyStore::load`] reading
//! the private key file. Persistence lives in `seedgate-store`.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod memory;

pub mod seed;

pub mod keystore;

pub mod envelope;

pub mod totp;

pub use envelope::{open_envelope, seal_envelope, seal_seed, MAX_ENVELOPE_LEN};
pub use error::CryptoError;
pub use keystore::{KeyStore, PrivateKey, PublicKey};
pub use memory::{constant_time_eq, disable_core_dumps, SecretBuffer, SecretBytes};
pub use seed::{Seed, SEED_HEX_LEN, SEED_LEN};
pub use totp::{
    encode, generate, generate_hotp, remaining_validity, time_step, verify, Base32Secret,
    TotpCode, DEFAULT_WINDOW, DIGITS, MAX_WINDOW, PERIOD,
};
