#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `BATTLESHIP_LOG`, or `fallback` if unset or invalid.
pub fn level_from_env(fallback: LevelFilter) -> LevelFilter {
    env::var("BATTLESHIP_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(fallback)
}

/// Initialize logging to stderr with a level taken from the `BATTLESHIP_LOG`
/// environment variable. Defaults to `fallback` if the variable is not set
/// or invalid. Calling it twice keeps the first logger.
pub fn init_logging(fallback: LevelFilter) {
    let level = level_from_env(fallback);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
