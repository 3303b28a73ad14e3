//! Generate → verify lifecycle and time-window boundary behaviour.

use seedgate_crypto_core::{generate, remaining_validity, verify, Seed, DEFAULT_WINDOW, PERIOD};

const SEED_HEX: &str = "3f1c9a7e5b2d4f60819a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f70";

fn seed() -> Seed {
    Seed::from_hex(SEED_HEX).expect("fixture seed")
}

/// A code stays valid across its own step and the neighbouring steps.
#[test]
fn code_verifies_through_its_whole_tolerance_span() {
    let seed = seed();
    let issued_at = 1_700_000_010u64; // first second of a step
    let code = generate(&seed, issued_at).expect("generate");

    // Step before, own step, step after: 90 seconds of acceptance.
    for now in (issued_at - PERIOD)..(issued_at + 2 * PERIOD) {
        assert!(
            verify(&seed, code.as_str(), now, DEFAULT_WINDOW).expect("verify"),
            "code issued at {issued_at} should verify at {now}"
        );
    }
    assert!(!verify(&seed, code.as_str(), issued_at - PERIOD - 1, DEFAULT_WINDOW).expect("verify"));
    assert!(!verify(&seed, code.as_str(), issued_at + 2 * PERIOD, DEFAULT_WINDOW).expect("verify"));
}

/// `remaining_validity` reaches 1 exactly before the code changes.
#[test]
fn remaining_validity_tracks_code_rollover() {
    let seed = seed();
    let start = 1_700_000_010u64;
    let code = generate(&seed, start).expect("generate");
    assert_eq!(remaining_validity(start), PERIOD);

    let last = start + remaining_validity(start) - 1;
    assert_eq!(remaining_validity(last), 1);
    assert_eq!(generate(&seed, last).expect("generate"), code);
    assert_ne!(generate(&seed, last + 1).expect("generate"), code);
}

/// Distinct seeds produce distinct code sequences.
#[test]
fn different_seeds_produce_different_sequences() {
    let a = seed();
    let b = Seed::from_bytes([0x11; 32]);
    let seq_a: Vec<_> = (0..10u64)
        .map(|i| generate(&a, i * PERIOD).expect("generate"))
        .collect();
    let seq_b: Vec<_> = (0..10u64)
        .map(|i| generate(&b, i * PERIOD).expect("generate"))
        .collect();
    assert_ne!(seq_a, seq_b);
}
