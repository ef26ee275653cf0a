//! "std::arrays": five fixed-size stack arrays through the slice kernels.

use super::{BenchParams, BenchProgram, Outcome, ProgramResult};
use crate::kernels::{checksum, copy_chain, drift, fill_initial};
use crate::seed::seeded_ratio;
use crate::timing::time_loop;

pub struct StdArrays<const N: usize>;

impl<const N: usize> BenchProgram for StdArrays<N> {
    fn label(&self) -> &'static str {
        "std::arrays"
    }

    fn run(&self, params: &BenchParams) -> ProgramResult {
        let n = seeded_ratio(params.seed);
        let mut buffers = [[0.0f64; N]; 5];
        fill_initial(&mut buffers[0], n);

        // Loop 1 drifts by `n`, not `1/n` like the other array programs.
        let first = time_loop(|| drift(&mut buffers[0], n, params.iterations));
        let second = time_loop(|| copy_chain(&mut buffers, n, params.iterations));

        ProgramResult {
            label: self.label(),
            loop_durations: vec![first, second],
            outcome: Outcome::Checksum(checksum(&buffers[4])),
        }
    }
}
