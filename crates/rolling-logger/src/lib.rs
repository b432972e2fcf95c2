//! Rolling Logger
//!
//! `log` backend that keeps the most recent records in a circular buffer
//! and forwards each record to an optional sink (e.g. the browser console).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Callback receiving every accepted record
pub type Sink = Box<dyn Fn(&LogLine) + Send + Sync>;

/// One captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<LogLine>>,
    sink: Option<Sink>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
            sink: None,
        }
    }

    pub fn with_sink(mut self, sink: impl Fn(&LogLine) + Send + Sync + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Copy of the buffered lines, oldest first
    pub fn snapshot(&self) -> Vec<LogLine> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    /// Buffered lines rendered as text, oldest first
    pub fn dump(&self) -> String {
        self.snapshot()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push(&self, line: LogLine) {
        if self.capacity == 0 {
            return;
        }
        let mut buffer = match self.buffer.lock() {
            Ok(buffer) => buffer,
            Err(poisoned) => poisoned.into_inner(),
        };
        if buffer.len() == self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(line);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        if let Some(sink) = &self.sink {
            sink(&line);
        }
        self.push(line);
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<&'static RollingLogger> = OnceLock::new();

/// Install `logger` as the global `log` backend.
///
/// Fails if any `log` backend is already installed; in that case
/// [`global`] keeps returning `None` for a logger that never became active.
pub fn init(logger: RollingLogger) -> Result<&'static RollingLogger, SetLoggerError> {
    let level = logger.level();
    let installed: &'static RollingLogger = Box::leak(Box::new(logger));
    log::set_logger(installed)?;
    log::set_max_level(level);
    let _ = LOGGER.set(installed);
    Ok(installed)
}

/// The active logger, if `init` succeeded
pub fn global() -> Option<&'static RollingLogger> {
    LOGGER.get().copied()
}
