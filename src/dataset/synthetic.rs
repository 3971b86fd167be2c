//! Seeded synthetic totals for exercising the digit auditor
//!
//! `log_normal` mimics organically accumulated counts, `uniform_integers`
//! mimics totals invented within a fixed range, and `log_uniform` spreads
//! magnitudes evenly across decades, which follows the leading-digit law
//! almost exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// `n` draws of `exp(N(mu, sigma))`, truncated to integers, zeros dropped.
///
/// Fewer than `n` values may be returned when truncation yields zero.
pub fn log_normal(n: usize, mu: f64, sigma: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (mu + sigma * standard_normal(&mut rng)).exp().trunc())
        .filter(|&v| v > 0.0)
        .collect()
}

/// `n` integers drawn uniformly from `low..high`
pub fn uniform_integers(n: usize, low: u64, high: u64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(low..high) as f64).collect()
}

/// `n` values `10^u` with `u` uniform on `[0, decades)`
pub fn log_uniform(n: usize, decades: u32, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let span = f64::from(decades);
    (0..n)
        .map(|_| 10f64.powf(rng.gen::<f64>() * span))
        .collect()
}

// Box-Muller
fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}
