//! "std::arrays": stack arrays through the shared slice kernels.

use bench_core::constants::SIZE;
use loop_bench::programs::std_arrays::StdArrays;
use loop_bench::runner::run_standalone;
use std::process;

fn main() {
    if let Err(e) = run_standalone(&StdArrays::<SIZE>) {
        eprintln!("std_arrays failed: {e:#}");
        process::exit(1);
    }
}
