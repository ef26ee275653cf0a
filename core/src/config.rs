//! Logging configuration read from the environment.
//!
//! Neither variable changes what the benchmarks compute or print on stdout.

use log::LevelFilter;
use std::env;

/// Log level: `off`, `error`, `warn`, `info`, `debug` or `trace`.
pub const LOG_LEVEL_VAR: &str = "LOOP_BENCH_LOG";

/// Optional path log records are appended to.
pub const LOG_FILE_VAR: &str = "LOOP_BENCH_LOG_FILE";

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
            file: None,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            env::var(LOG_LEVEL_VAR).ok().as_deref(),
            env::var(LOG_FILE_VAR).ok().as_deref(),
        )
    }

    /// Build a config from raw variable values. Unparsable levels fall back
    /// to [`DEFAULT_LOG_LEVEL`]; an empty file path counts as unset.
    pub fn from_values(level: Option<&str>, file: Option<&str>) -> Self {
        let level = level
            .and_then(|raw| raw.trim().parse::<LevelFilter>().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        let file = file
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(str::to_string);

        Self { level, file }
    }
}
