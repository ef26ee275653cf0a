//! "c arrays result": five plain stack arrays driven with index loops.
//!
//! The chain loop here offsets each stage by `n` or `1/n` instead of copying,
//! and the final reduction is computed but never printed.

// Index loops over `0..N` are the point of this variant.
#![allow(clippy::needless_range_loop)]

use super::{BenchParams, BenchProgram, Outcome, ProgramResult};
use crate::kernels::integer_reciprocal;
use crate::seed::seeded_ratio;
use crate::timing::time_loop;
use bench_core::constants::CHECKSUM_SCALE;
use std::hint::black_box;

pub struct CArrays<const N: usize>;

/// The five stack buffers of the c-arrays program.
#[derive(Debug, Clone)]
pub struct CBuffers<const N: usize> {
    pub a: [f64; N],
    pub b: [f64; N],
    pub c: [f64; N],
    pub d: [f64; N],
    pub e: [f64; N],
}

impl<const N: usize> CBuffers<N> {
    /// `a[j] = 1/n + j`, everything else zeroed.
    pub fn new(n: f64) -> Self {
        let mut a = [0.0; N];
        for j in 0..N {
            a[j] = 1.0 / n + j as f64;
        }
        Self {
            a,
            b: [0.0; N],
            c: [0.0; N],
            d: [0.0; N],
            e: [0.0; N],
        }
    }

    /// First timed loop: `a[j] += j - 1/n`.
    pub fn drift(&mut self, n: f64, iterations: usize) {
        for _ in 0..iterations {
            for j in 0..N {
                self.a[j] += j as f64 - 1.0 / n;
            }
        }
    }

    /// Second timed loop: the offset chain through all five buffers.
    pub fn offset_chain(&mut self, n: f64, iterations: usize) {
        for _ in 0..iterations {
            for j in 0..N {
                self.a[j] += n + integer_reciprocal(j);
                self.b[j] = self.a[j] - n;
                self.c[j] = self.b[j] - 1.0 / n;
                self.d[j] = self.c[j] + n;
                self.e[j] = self.d[j] + 1.0 / n;
            }
        }
    }

    /// `Σ (a + b - c - d + e) / CHECKSUM_SCALE`, accumulated term by term.
    pub fn reduce(&self) -> f64 {
        let mut r = 0.0;
        for j in 0..N {
            r += self.a[j] / CHECKSUM_SCALE;
            r += self.b[j] / CHECKSUM_SCALE;
            r -= self.c[j] / CHECKSUM_SCALE;
            r -= self.d[j] / CHECKSUM_SCALE;
            r += self.e[j] / CHECKSUM_SCALE;
        }
        r
    }
}

impl<const N: usize> BenchProgram for CArrays<N> {
    fn label(&self) -> &'static str {
        "c arrays result"
    }

    fn run(&self, params: &BenchParams) -> ProgramResult {
        let n = seeded_ratio(params.seed);
        let mut buffers = CBuffers::<N>::new(n);

        let first = time_loop(|| buffers.drift(n, params.iterations));
        let second = time_loop(|| buffers.offset_chain(n, params.iterations));

        let r = black_box(buffers.reduce());

        ProgramResult {
            label: self.label(),
            loop_durations: vec![first, second],
            outcome: Outcome::DroppedChecksum(r),
        }
    }
}
