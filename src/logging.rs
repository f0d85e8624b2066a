#![cfg(feature = "std")]

use std::env;
use std::str::FromStr;

use log::{LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`off`, `error` .. `trace`).
pub const LOG_ENV: &str = "BROADSIDE_LOG";

struct SimpleLogger;

impl log::Log for SimpleLogger {
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

static LOGGER: SimpleLogger = SimpleLogger;

/// Parse a level name, falling back to `default` for missing or bad values.
pub fn level_from(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value
        .and_then(|lvl| LevelFilter::from_str(lvl.trim()).ok())
        .unwrap_or(default)
}

/// Initialize logging with a level taken from [`LOG_ENV`].
/// Uses `default` if the variable is not set or invalid. Log lines go to
/// stderr so they do not interleave with the board on stdout.
pub fn init_logging(default: LevelFilter) {
    let value = env::var(LOG_ENV).ok();
    let level = level_from(value.as_deref(), default);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
