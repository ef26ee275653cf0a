//! Wall-clock timing of a single loop.

use std::time::{Duration, Instant};

/// Run `body` once and return how long it took.
pub fn time_loop<F: FnOnce()>(body: F) -> Duration {
    let start = Instant::now();
    body();
    start.elapsed()
}

/// Seconds as the programs report them: truncated to whole microseconds first.
pub fn reported_seconds(elapsed: Duration) -> f64 {
    elapsed.as_micros() as f64 * 1.0e-6
}
