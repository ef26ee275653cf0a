//! Running programs and writing their output blocks.

use crate::programs::{BenchParams, BenchProgram, ProgramResult};
use crate::report::render_program;
use crate::timing::reported_seconds;
use anyhow::{Context, Result};
use bench_core::config::LogConfig;
use std::io::{self, Write};

/// Install the logger as configured by the environment.
pub fn init_logging() -> Result<LogConfig> {
    let config = LogConfig::from_env();
    bench_core::initialize_logger(config.level, config.file.as_deref())?;
    Ok(config)
}

/// Run one program and write its block to `out`.
pub fn run_program<W: Write>(
    program: &dyn BenchProgram,
    params: &BenchParams,
    out: &mut W,
) -> Result<ProgramResult> {
    log::info!("Benchmarking {}...", program.label());
    log::debug!(
        "iterations={} seed={}",
        params.iterations,
        params.seed
    );

    let result = program.run(params);
    log::info!(
        "{} done ({:.6}s over {} loop(s))",
        result.label,
        reported_seconds(result.total()),
        result.loop_durations.len()
    );

    out.write_all(render_program(&result).as_bytes())
        .with_context(|| format!("failed to write output of {}", result.label))?;
    out.flush().context("failed to flush benchmark output")?;

    Ok(result)
}

/// Run every program in order, writing each block as soon as it completes.
pub fn run_all<W: Write>(
    programs: &[Box<dyn BenchProgram>],
    params: &BenchParams,
    out: &mut W,
) -> Result<Vec<ProgramResult>> {
    let mut results = Vec::with_capacity(programs.len());
    for program in programs {
        results.push(run_program(program.as_ref(), params, out)?);
    }
    Ok(results)
}

/// Entry point of the single-program binaries.
pub fn run_standalone(program: &dyn BenchProgram) -> Result<()> {
    let config = init_logging()?;
    log::debug!("log config: {config:?}");

    let mut stdout = io::stdout().lock();
    run_program(program, &BenchParams::default(), &mut stdout)?;
    Ok(())
}
