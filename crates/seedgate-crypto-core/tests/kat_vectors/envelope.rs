//! Envelopes produced by OpenSSL (`pkeyutl`, OAEP, SHA-256 digest and
//! MGF1) for the fixture keypair.
//!
//! Reference TOTP codes were computed independently with HMAC-SHA1 over
//! the base32-decoded seed key.

use seedgate_crypto_core::{generate, open_envelope, CryptoError, PrivateKey};

const PRIVATE_PEM: &str = include_str!("../fixtures/test_private.pem");
const SEED_HEX: &str = "3f1c9a7e5b2d4f60819a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f70";

const ENVELOPE_SEED: &str = include_str!("../fixtures/envelope_seed.b64");
const ENVELOPE_UPPERCASE: &str = include_str!("../fixtures/envelope_uppercase.b64");
const ENVELOPE_SHORT: &str = include_str!("../fixtures/envelope_short.b64");
const ENVELOPE_NON_UTF8: &str = include_str!("../fixtures/envelope_non_utf8.b64");
const ENVELOPE_OAEP_SHA1: &str = include_str!("../fixtures/envelope_oaep_sha1.b64");

fn key() -> PrivateKey {
    PrivateKey::from_pem(PRIVATE_PEM).expect("fixture key should parse")
}

#[test]
fn openssl_envelope_yields_known_seed() {
    let seed = open_envelope(&key(), ENVELOPE_SEED).expect("fixture envelope should open");
    assert_eq!(seed.to_hex().as_str(), SEED_HEX);
}

#[test]
fn openssl_envelope_seed_reproduces_reference_totp() {
    let seed = open_envelope(&key(), ENVELOPE_SEED).expect("fixture envelope should open");
    for (time, expected) in [
        (1_234_567_890u64, "020532"),
        (1_700_000_000, "407257"),
        (1_700_000_030, "421249"),
    ] {
        let code = generate(&seed, time).expect("generate");
        assert_eq!(code.as_str(), expected, "reference mismatch at time {time}");
    }
}

#[test]
fn uppercase_plaintext_is_format_error() {
    assert!(matches!(
        open_envelope(&key(), ENVELOPE_UPPERCASE),
        Err(CryptoError::SeedFormat(_))
    ));
}

#[test]
fn short_plaintext_is_format_error() {
    assert!(matches!(
        open_envelope(&key(), ENVELOPE_SHORT),
        Err(CryptoError::SeedFormat(_))
    ));
}

#[test]
fn non_utf8_plaintext_is_decryption_error() {
    assert!(matches!(
        open_envelope(&key(), ENVELOPE_NON_UTF8),
        Err(CryptoError::Decryption(_))
    ));
}

#[test]
fn oaep_sha1_envelope_does_not_open() {
    assert!(matches!(
        open_envelope(&key(), ENVELOPE_OAEP_SHA1),
        Err(CryptoError::Decryption(_))
    ));
}
