//! Console Logger
//!
//! `log` backend that writes to the browser console (stderr off-wasm)
//! and keeps the most recent entries in a circular buffer.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// A captured log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Logger with a bounded history of recent entries
pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    history: Mutex<VecDeque<LogEntry>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            history: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Snapshot of buffered entries, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        match self.history.lock() {
            Ok(history) => history.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    /// Number of buffered entries at exactly `level`
    pub fn count(&self, level: Level) -> usize {
        self.entries().iter().filter(|e| e.level == level).count()
    }

    pub fn clear(&self) {
        if let Ok(mut history) = self.history.lock() {
            history.clear();
        }
    }

    fn remember(&self, entry: LogEntry) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut history) = self.history.lock() {
            while history.len() >= self.capacity {
                history.pop_front();
            }
            history.push_back(entry);
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        write_console(&entry);
        self.remember(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(entry: &LogEntry) {
    use web_sys::console;

    let line = wasm_bindgen::JsValue::from_str(&entry.message);
    match entry.level {
        Level::Error => console::error_1(&line),
        Level::Warn => console::warn_1(&line),
        Level::Info => console::info_1(&line),
        Level::Debug | Level::Trace => console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(entry: &LogEntry) {
    eprintln!("{:<5} {}: {}", entry.level, entry.target, entry.message);
}

/// Install a `ConsoleLogger` as the global logger.
///
/// The logger is leaked so callers can keep inspecting its history.
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static ConsoleLogger, SetLoggerError> {
    let logger: &'static ConsoleLogger = Box::leak(Box::new(ConsoleLogger::new(level, capacity)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

/// Log through a specific logger instead of the global one
pub fn emit(logger: &dyn Log, level: Level, target: &str, args: fmt::Arguments) {
    logger.log(
        &Record::builder()
            .level(level)
            .target(target)
            .args(args)
            .build(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_bounded() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 3);
        for i in 0..5 {
            emit(&logger, Level::Info, "test", format_args!("line {}", i));
        }

        let entries = logger.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].message, "line 2");
        assert_eq!(entries[2].message, "line 4");
    }

    #[test]
    fn test_level_filter_drops_verbose_entries() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 10);
        emit(&logger, Level::Debug, "test", format_args!("hidden"));
        emit(&logger, Level::Warn, "test", format_args!("shown"));

        assert_eq!(logger.entries().len(), 1);
        assert_eq!(logger.count(Level::Warn), 1);
        assert_eq!(logger.count(Level::Debug), 0);
    }

    #[test]
    fn test_count_and_clear() {
        let logger = ConsoleLogger::new(LevelFilter::Debug, 10);
        emit(&logger, Level::Error, "form", format_args!("first"));
        emit(&logger, Level::Error, "form", format_args!("second"));
        emit(&logger, Level::Info, "form", format_args!("ok"));

        assert_eq!(logger.count(Level::Error), 2);
        assert_eq!(logger.entries()[0].target, "form");

        logger.clear();
        assert!(logger.entries().is_empty());
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 0);
        emit(&logger, Level::Error, "test", format_args!("gone"));
        assert!(logger.entries().is_empty());
    }
}
