//! "euler allocator": every step returns a freshly allocated state.

use loop_bench::programs::euler::EulerAllocator;
use loop_bench::runner::run_standalone;
use std::process;

fn main() {
    if let Err(e) = run_standalone(&EulerAllocator) {
        eprintln!("euler_allocator failed: {e:#}");
        process::exit(1);
    }
}
