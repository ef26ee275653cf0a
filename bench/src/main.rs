//! Runs all five benchmark programs in sequence and prints a comparison
//! summary after their individual output blocks.
//!
//! Usage:
//!   cargo run --release
//!   LOOP_BENCH_LOG=debug cargo run --release      # more detail on stderr

use loop_bench::programs::{default_programs, BenchParams};
use loop_bench::report::print_report;
use loop_bench::runner::{init_logging, run_all};
use std::io;
use std::process;

fn run() -> anyhow::Result<()> {
    init_logging()?;

    let params = BenchParams::default();
    let programs = default_programs();
    log::info!(
        "Running {} loop benchmarks ({} iterations each)",
        programs.len(),
        params.iterations
    );

    let mut stdout = io::stdout().lock();
    let results = run_all(&programs, &params, &mut stdout)?;
    print_report(&results, &params, &mut stdout)?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("loop-bench failed: {e:#}");
        process::exit(1);
    }
}
