//! The seeded draw every array benchmark derives its ratio `n` from.

use bench_core::constants::RAND_MAX;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draw one integer in `[0, RAND_MAX]` from a generator seeded with `seed`.
pub fn draw(seed: u64) -> i32 {
    let mut rng = StdRng::seed_from_u64(seed);
    rng.gen_range(0..=RAND_MAX)
}

/// `n = (1 + m·1e-9) / (2 + m·1e-9)` for the integer `m` drawn from `seed`.
///
/// Always lies in `[0.5, 1)`, so `1/n` and `n` are both well away from zero.
pub fn seeded_ratio(seed: u64) -> f64 {
    let m = f64::from(draw(seed));
    (1.0 + m * 1.0e-9) / (2.0 + m * 1.0e-9)
}
