//! "euler preallocator": the state is allocated once and stepped in place.

use loop_bench::programs::euler::EulerPreallocator;
use loop_bench::runner::run_standalone;
use std::process;

fn main() {
    if let Err(e) = run_standalone(&EulerPreallocator) {
        eprintln!("euler_preallocator failed: {e:#}");
        process::exit(1);
    }
}
