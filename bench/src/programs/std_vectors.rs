//! "std::vectors": five heap vectors through the slice kernels.

use super::{BenchParams, BenchProgram, Outcome, ProgramResult};
use crate::kernels::{checksum, copy_chain, drift, fill_initial};
use crate::seed::seeded_ratio;
use crate::timing::time_loop;

pub struct StdVectors {
    size: usize,
}

impl StdVectors {
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl BenchProgram for StdVectors {
    fn label(&self) -> &'static str {
        "std::vectors"
    }

    fn run(&self, params: &BenchParams) -> ProgramResult {
        let n = seeded_ratio(params.seed);
        let mut buffers: [Vec<f64>; 5] = std::array::from_fn(|_| vec![0.0; self.size]);
        fill_initial(&mut buffers[0], n);

        let first = time_loop(|| drift(&mut buffers[0], 1.0 / n, params.iterations));
        let second = time_loop(|| copy_chain(&mut buffers, n, params.iterations));

        ProgramResult {
            label: self.label(),
            loop_durations: vec![first, second],
            outcome: Outcome::Checksum(checksum(&buffers[4])),
        }
    }
}
