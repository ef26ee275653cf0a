//! "std::vectors": heap vectors through the shared slice kernels.

use bench_core::constants::SIZE;
use loop_bench::programs::std_vectors::StdVectors;
use loop_bench::runner::run_standalone;
use std::process;

fn main() {
    if let Err(e) = run_standalone(&StdVectors::new(SIZE)) {
        eprintln!("std_vectors failed: {e:#}");
        process::exit(1);
    }
}
