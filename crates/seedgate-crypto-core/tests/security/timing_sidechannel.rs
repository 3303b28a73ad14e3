//! Timing check for code verification.
//!
//! A matching code and a same-length wrong code are verified alternately,
//! and the two duration sets are compared with Welch's t-test. `|t|` at or
//! above 4.5 fails the test. Scheduler jitter can occasionally trip it.

use std::time::Instant;

use seedgate_crypto_core::{generate, verify, Seed, DEFAULT_WINDOW};

const ROUNDS: usize = 10_000;
const WARMUP: usize = 100;
const T_LIMIT: f64 = 4.5;

/// Sample count, mean and unbiased variance of one duration set.
struct Summary {
    n: f64,
    mean: f64,
    var: f64,
}

impl Summary {
    #[allow(clippy::cast_precision_loss)]
    fn of(xs: &[f64]) -> Option<Self> {
        if xs.len() < 2 {
            return None;
        }
        let n = xs.len() as f64;
        let mean = xs.iter().sum::<f64>() / n;
        let var = xs.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / (n - 1.0);
        Some(Self { n, mean, var })
    }

    fn std_err_sq(&self) -> f64 {
        self.var / self.n
    }
}

/// Welch's t between two sets; `None` with fewer than two samples in either.
fn welch_t(a: &[f64], b: &[f64]) -> Option<f64> {
    let (a, b) = (Summary::of(a)?, Summary::of(b)?);
    let spread = (a.std_err_sq() + b.std_err_sq()).sqrt();
    if spread == 0.0 {
        return Some(0.0);
    }
    Some((a.mean - b.mean) / spread)
}

#[inline(never)]
fn check(seed: &Seed, code: &str, now: u64) -> bool {
    std::hint::black_box(verify(seed, code, now, DEFAULT_WINDOW).expect("verify"))
}

#[allow(clippy::cast_precision_loss)]
fn nanos(f: impl FnOnce() -> bool) -> f64 {
    let start = Instant::now();
    std::hint::black_box(f());
    start.elapsed().as_nanos() as f64
}

#[test]
fn verify_has_no_match_dependent_timing() {
    let seed = Seed::from_bytes([0x7C; 32]);
    let now = 1_700_000_000u64;

    let good = generate(&seed, now).expect("generate");
    let bad = if good.as_str() == "000000" { "111111" } else { "000000" };
    assert!(check(&seed, good.as_str(), now));
    assert!(!check(&seed, bad, now));

    for _ in 0..WARMUP {
        check(&seed, good.as_str(), now);
        check(&seed, bad, now);
    }

    let (matches, misses): (Vec<f64>, Vec<f64>) = (0..ROUNDS)
        .map(|_| {
            (
                nanos(|| check(&seed, good.as_str(), now)),
                nanos(|| check(&seed, bad, now)),
            )
        })
        .unzip();

    let t = welch_t(&matches, &misses).expect("enough samples").abs();
    eprintln!("verify timing: |t| = {t:.2} over {ROUNDS} rounds (limit {T_LIMIT})");
    assert!(t < T_LIMIT, "match/mismatch timing differs: |t| = {t:.2}");
}

#[test]
fn welch_t_is_zero_for_constant_sets() {
    assert_eq!(welch_t(&[3.0; 50], &[3.0; 50]), Some(0.0));
}

#[test]
fn welch_t_is_large_for_shifted_sets() {
    let a: Vec<f64> = (0..1000).map(|i| 100.0 + f64::from(i % 3)).collect();
    let b: Vec<f64> = (0..1000).map(|i| 200.0 + f64::from(i % 3)).collect();
    assert!(welch_t(&a, &b).unwrap().abs() > 100.0);
}

#[test]
fn welch_t_needs_two_samples() {
    assert_eq!(welch_t(&[1.0], &[1.0, 2.0]), None);
}
