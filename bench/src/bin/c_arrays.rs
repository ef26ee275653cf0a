//! "c arrays result": stack arrays, offset chain, checksum dropped.

use bench_core::constants::SIZE;
use loop_bench::programs::c_arrays::CArrays;
use loop_bench::runner::run_standalone;
use std::process;

fn main() {
    if let Err(e) = run_standalone(&CArrays::<SIZE>) {
        eprintln!("c_arrays failed: {e:#}");
        process::exit(1);
    }
}
