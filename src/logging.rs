//! Logging support built on the `log` facade
//!
//! Library code reports through the `log_*` helpers below. Applications that
//! do not bring their own logger can call [`init_default_logger`] to get
//! plain stderr output.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::Once;

/// Verbosity levels understood by [`set_log_level`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Minimal logger that writes `[LEVEL] target: message` lines to stderr
pub struct Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let stderr = std::io::stderr();
        let mut handle = stderr.lock();
        // Nothing sensible to do if stderr is gone.
        let _ = writeln!(handle, "[{}] {}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: Logger = Logger;
static INIT: Once = Once::new();

/// Install [`Logger`] as the global logger at `Warn` level.
///
/// Later calls are no-ops, as is the first call when another logger has
/// already been installed by the application.
pub fn init_default_logger() {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Warn);
        }
    });
}

/// Set the maximum level that will be emitted
pub fn set_log_level(level: LogLevel) {
    log::set_max_level(level.into());
}

pub fn log_error(message: &str) {
    log::log!(target: "sql_like", Level::Error, "{}", message);
}

pub fn log_warn(message: &str) {
    log::log!(target: "sql_like", Level::Warn, "{}", message);
}

pub fn log_info(message: &str) {
    log::log!(target: "sql_like", Level::Info, "{}", message);
}

pub fn log_debug(message: &str) {
    log::log!(target: "sql_like", Level::Debug, "{}", message);
}

pub fn log_trace(message: &str) {
    log::log!(target: "sql_like", Level::Trace, "{}", message);
}
