//! Explicit Euler integration of `x0' = x1`, `x1' = sin(x0)`.
//!
//! Both programs run the same arithmetic. [`EulerAllocator`] gets a fresh heap
//! state back from every step, [`EulerPreallocator`] allocates once and
//! mutates that state in place.

use super::{BenchParams, BenchProgram, Outcome, ProgramResult};
use crate::timing::time_loop;
use bench_core::constants::{EPSILON, EULER_INITIAL_STATE};
use std::hint::black_box;

/// One step returning a newly allocated state.
pub fn step(x: &[f64; 2]) -> Box<[f64; 2]> {
    Box::new([x[0] + EPSILON * x[1], x[1] + EPSILON * x[0].sin()])
}

/// One step applied to `x` in place.
pub fn step_in_place(x: &mut [f64; 2]) {
    let p = x[0];
    x[0] += EPSILON * x[1];
    x[1] += EPSILON * p.sin();
}

fn integrate_allocating(x: &mut Box<[f64; 2]>, iterations: usize) {
    for _ in 0..iterations {
        // Keeps the per-step allocation from being elided.
        *x = black_box(step(x));
    }
}

fn integrate_in_place(x: &mut [f64; 2], iterations: usize) {
    for _ in 0..iterations {
        step_in_place(x);
    }
}

pub struct EulerAllocator;

impl BenchProgram for EulerAllocator {
    fn label(&self) -> &'static str {
        "euler allocator"
    }

    fn run(&self, params: &BenchParams) -> ProgramResult {
        let mut x = Box::new(EULER_INITIAL_STATE);
        let elapsed = time_loop(|| integrate_allocating(&mut x, params.iterations));

        ProgramResult {
            label: self.label(),
            loop_durations: vec![elapsed],
            outcome: Outcome::State(*x),
        }
    }
}

pub struct EulerPreallocator;

impl BenchProgram for EulerPreallocator {
    fn label(&self) -> &'static str {
        "euler preallocator"
    }

    fn run(&self, params: &BenchParams) -> ProgramResult {
        let mut x = Box::new(EULER_INITIAL_STATE);
        let elapsed = time_loop(|| integrate_in_place(&mut x, params.iterations));

        ProgramResult {
            label: self.label(),
            loop_durations: vec![elapsed],
            outcome: Outcome::State(*x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step_from_initial_state() {
        let x = step(&EULER_INITIAL_STATE);
        assert_eq!(x[0], 0.1);
        assert_eq!(x[1], EPSILON * 0.1f64.sin());
    }

    #[test]
    fn test_in_place_uses_previous_x0() {
        let mut x = [1.0, 2.0];
        step_in_place(&mut x);
        assert_eq!(x[0], 1.0 + EPSILON * 2.0);
        assert_eq!(x[1], 2.0 + EPSILON * 1.0f64.sin());
    }

    #[test]
    fn test_variants_bit_identical() {
        let mut allocated = Box::new(EULER_INITIAL_STATE);
        let mut in_place = EULER_INITIAL_STATE;
        for _ in 0..10_000 {
            allocated = step(&allocated);
            step_in_place(&mut in_place);
            assert_eq!(allocated[0].to_bits(), in_place[0].to_bits());
            assert_eq!(allocated[1].to_bits(), in_place[1].to_bits());
        }
    }

    #[test]
    fn test_programs_agree() {
        let params = BenchParams {
            iterations: 5_000,
            seed: 1,
        };
        let allocator = EulerAllocator.run(&params);
        let preallocator = EulerPreallocator.run(&params);

        assert_eq!(allocator.loop_durations.len(), 1);
        assert_eq!(preallocator.loop_durations.len(), 1);

        let (Outcome::State(a), Outcome::State(b)) = (allocator.outcome, preallocator.outcome)
        else {
            panic!("euler programs must report their final state");
        };
        assert_eq!(a.map(f64::to_bits), b.map(f64::to_bits));
    }

    #[test]
    fn test_zero_iterations_keeps_initial_state() {
        let params = BenchParams {
            iterations: 0,
            seed: 1,
        };
        assert_eq!(
            EulerAllocator.run(&params).outcome,
            Outcome::State(EULER_INITIAL_STATE)
        );
    }
}
