//! The benchmark programs and the common `BenchProgram` trait.
//!
//! Five implementations are provided:
//! - [`c_arrays::CArrays`] — stack arrays, index loops, checksum dropped
//! - [`std_arrays::StdArrays`] — stack arrays through the slice kernels
//! - [`std_vectors::StdVectors`] — heap vectors through the slice kernels
//! - [`euler::EulerAllocator`] — Euler step returning a new allocation
//! - [`euler::EulerPreallocator`] — Euler step mutating in place

pub mod c_arrays;
pub mod euler;
pub mod std_arrays;
pub mod std_vectors;

use bench_core::constants::{ITERATIONS, SEED, SIZE};
use std::time::Duration;

/// Run parameters. The defaults are the build-time constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchParams {
    /// Repetitions of every timed loop.
    pub iterations: usize,
    /// Seed of the draw the array programs derive `n` from.
    pub seed: u64,
}

impl Default for BenchParams {
    fn default() -> Self {
        Self {
            iterations: ITERATIONS,
            seed: SEED,
        }
    }
}

/// The scalar a program produces after its timed loops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Reduction over the buffers, printed.
    Checksum(f64),
    /// Reduction computed but deliberately not printed.
    DroppedChecksum(f64),
    /// Final `(x0, x1)` of an Euler integration.
    State([f64; 2]),
}

#[derive(Debug, Clone)]
pub struct ProgramResult {
    pub label: &'static str,
    /// One entry per timed loop, in execution order.
    pub loop_durations: Vec<Duration>,
    pub outcome: Outcome,
}

impl ProgramResult {
    pub fn total(&self) -> Duration {
        self.loop_durations.iter().sum()
    }
}

/// One self-contained benchmark: set up data, time its loops, reduce.
pub trait BenchProgram {
    /// First line of the program's output.
    fn label(&self) -> &'static str;

    fn run(&self, params: &BenchParams) -> ProgramResult;
}

/// All five programs at the build-time `SIZE`, in output order.
pub fn default_programs() -> Vec<Box<dyn BenchProgram>> {
    vec![
        Box::new(c_arrays::CArrays::<SIZE>),
        Box::new(std_arrays::StdArrays::<SIZE>),
        Box::new(std_vectors::StdVectors::new(SIZE)),
        Box::new(euler::EulerAllocator),
        Box::new(euler::EulerPreallocator),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = BenchParams::default();
        assert_eq!(params.iterations, ITERATIONS);
        assert_eq!(params.seed, SEED);
    }

    #[test]
    fn test_default_program_labels() {
        let labels: Vec<&str> = default_programs().iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            vec![
                "c arrays result",
                "std::arrays",
                "std::vectors",
                "euler allocator",
                "euler preallocator",
            ]
        );
    }

    #[test]
    fn test_total_sums_loops() {
        let result = ProgramResult {
            label: "x",
            loop_durations: vec![Duration::from_micros(3), Duration::from_micros(4)],
            outcome: Outcome::Checksum(0.0),
        };
        assert_eq!(result.total(), Duration::from_micros(7));
    }
}
