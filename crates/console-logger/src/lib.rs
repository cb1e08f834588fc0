//! Console Logger
//!
//! `log` backend for browser apps:
//! - writes timestamped lines to the browser console (stderr off wasm32)
//! - keeps the most recent lines in a circular buffer so the UI can show
//!   them after the fact

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept in the circular buffer
pub const BUFFER_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Fixed-size buffer that drops the oldest line when full
#[derive(Debug)]
pub struct LineBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LineBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

pub struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
    buffer: Mutex<LineBuffer>,
}

impl ConsoleLogger {
    pub fn new(app_name: &str, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            buffer: Mutex::new(LineBuffer::new(BUFFER_CAPACITY)),
        }
    }

    fn format_line(&self, record: &Record) -> String {
        format!(
            "[{}] [{}] {} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            self.app_name,
            record.level(),
            record.target(),
            record.args()
        )
    }

    pub fn recent_lines(&self) -> Vec<String> {
        self.buffer
            .lock()
            .map(|buffer| buffer.lines())
            .unwrap_or_default()
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
        let line = self.format_line(record);
        write_line(record.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the logger for the whole app.
///
/// Fails if a logger (this one or any other) is already installed.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(app_name, level));
    log::set_logger(logger)?;
    log::set_max_level(logger.level);
    Ok(())
}

/// Parse a level name such as `debug`, falling back to `Info`.
pub fn level_from_name(name: Option<&str>) -> LevelFilter {
    name.and_then(|n| n.parse().ok()).unwrap_or(LevelFilter::Info)
}

/// Lines recorded by the installed logger, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent_lines).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_drops_oldest() {
        let mut buffer = LineBuffer::new(2);
        buffer.push("a".into());
        buffer.push("b".into());
        buffer.push("c".into());
        assert_eq!(buffer.lines(), vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut buffer = LineBuffer::new(0);
        buffer.push("a".into());
        assert!(buffer.lines().is_empty());
    }

    #[test]
    fn test_logger_filters_and_records() {
        let logger = ConsoleLogger::new("Test", LevelFilter::Info);
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("burndown")
                .args(format_args!("hidden"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .target("burndown")
                .args(format_args!("token rejected"))
                .build(),
        );

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[Test] WARN burndown: token rejected"));
    }

    #[test]
    fn test_level_from_name() {
        assert_eq!(level_from_name(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from_name(Some("WARN")), LevelFilter::Warn);
        assert_eq!(level_from_name(Some("loud")), LevelFilter::Info);
        assert_eq!(level_from_name(None), LevelFilter::Info);
    }
}
