//! Report module: renders each program's output block and the comparison summary.

use crate::programs::{BenchParams, Outcome, ProgramResult};
use crate::timing::reported_seconds;
use anyhow::{Context, Result};
use std::io::Write;

/// Significant digits of a default-configured C++ output stream.
const PRECISION: usize = 6;

/// Format `value` like `%g` with six significant digits.
///
/// Scientific notation is used when the decimal exponent is below -4 or at
/// least the precision; trailing zeros (and a bare trailing point) are removed.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:.*e}", PRECISION - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (PRECISION as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// The exact stdout block of one program.
pub fn render_program(result: &ProgramResult) -> String {
    let mut lines = vec![result.label.to_string()];

    match result.loop_durations.as_slice() {
        [single] => lines.push(format!(
            "{} seconds",
            format_general(reported_seconds(*single))
        )),
        loops => {
            for (i, elapsed) in loops.iter().enumerate() {
                lines.push(format!(
                    "{}. {} seconds",
                    i + 1,
                    format_general(reported_seconds(*elapsed))
                ));
            }
        }
    }

    match result.outcome {
        Outcome::Checksum(r) => lines.push(format_general(r)),
        Outcome::State([x0, x1]) => {
            lines.push(format!("{},{}", format_general(x0), format_general(x1)))
        }
        Outcome::DroppedChecksum(_) => {}
    }

    // Every block ends with an empty line.
    lines.push(String::new());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Comparison table across programs, relative to the fastest total.
pub fn render_report(results: &[ProgramResult], params: &BenchParams) -> String {
    let mut lines = Vec::new();
    lines.push("=".repeat(80));
    lines.push("  Loop Benchmark Summary".to_string());
    lines.push(format!(
        "  Iterations: {} | Size: {} | Seed: {}",
        params.iterations,
        bench_core::constants::SIZE,
        params.seed
    ));
    lines.push("=".repeat(80));

    let fastest = results
        .iter()
        .map(|r| reported_seconds(r.total()))
        .filter(|&secs| secs > 0.0)
        .fold(f64::INFINITY, f64::min);

    lines.push(format!(
        "  {:20} {:>12} {:>12} {:>12} {:>10}",
        "Program", "Loop 1 (s)", "Loop 2 (s)", "Total (s)", "Relative"
    ));
    lines.push(format!("  {}", "-".repeat(70)));

    for r in results {
        let loop_secs = |i: usize| {
            r.loop_durations
                .get(i)
                .map(|d| format!("{:.6}", reported_seconds(*d)))
                .unwrap_or_else(|| "-".to_string())
        };
        let total = reported_seconds(r.total());
        let relative = if fastest.is_finite() && total > 0.0 {
            format!("{:.2}x", total / fastest)
        } else {
            "-".to_string()
        };
        lines.push(format!(
            "  {:20} {:>12} {:>12} {:>12.6} {:>10}",
            r.label,
            loop_secs(0),
            loop_secs(1),
            total,
            relative
        ));
    }

    lines.push(String::new());
    lines.join("\n")
}

/// Write the comparison summary to `out`.
pub fn print_report<W: Write>(
    results: &[ProgramResult],
    params: &BenchParams,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", render_report(results, params))
        .context("failed to write summary report")?;
    out.flush().context("failed to flush summary report")?;
    Ok(())
}
