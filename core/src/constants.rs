//! Build-time constants shared by every benchmark program.

/// Element count of every buffer in the array benchmarks.
pub const SIZE: usize = 1_000;

/// Repetition count of every timed loop.
pub const ITERATIONS: usize = 100_000;

/// Step size of the Euler integration benchmarks.
pub const EPSILON: f64 = 1.0e-6;

/// Seed for the single random draw each array benchmark makes.
pub const SEED: u64 = 1;

/// Largest value the seeded draw can produce.
pub const RAND_MAX: i32 = i32::MAX;

/// Divisor applied to each term of the c-arrays reduction.
pub const CHECKSUM_SCALE: f64 = 1.0e9;

/// Starting `(x0, x1)` of the Euler benchmarks.
pub const EULER_INITIAL_STATE: [f64; 2] = [0.1, 0.0];
