//! Diagnostic journal.
//!
//! The journal is a plain line-oriented log of load/save outcomes and runtime
//! errors. It is owned by the [`Inventory`](crate::inventory::Inventory), opened
//! once at startup and closed when the API is closed; there is no global logger.
//!
//! Line format:
//!
//! ```text
//! 2026-10-17 09:41:07,312 - INFO - Catalog saved.
//! ```
//!
//! Failing to write a journal line never fails the operation being logged.

use crate::error::{Result, ShelfError};
use chrono::Local;
use log::{Level, LevelFilter};
use std::fmt::Display;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

pub struct Journal {
    sink: Box<dyn Write>,
    level: LevelFilter,
}

impl Journal {
    /// Opens `path` for appending, creating it (and its parent dirs) if needed.
    pub fn open<P: AsRef<Path>>(path: P, level: LevelFilter) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfError::Io)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(ShelfError::Io)?;
        Ok(Self::from_writer(file, level))
    }

    /// A journal that drops every record.
    pub fn disabled() -> Self {
        Self {
            sink: Box::new(io::sink()),
            level: LevelFilter::Off,
        }
    }

    pub fn from_writer<W: Write + 'static>(writer: W, level: LevelFilter) -> Self {
        Self {
            sink: Box::new(writer),
            level,
        }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level <= self.level
    }

    pub fn record(&mut self, level: Level, message: impl Display) {
        if !self.enabled(level) {
            return;
        }
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let _ = writeln!(self.sink, "{} - {} - {}", timestamp, level, message)
            .and_then(|_| self.sink.flush());
    }

    pub fn info(&mut self, message: impl Display) {
        self.record(Level::Info, message);
    }

    pub fn warn(&mut self, message: impl Display) {
        self.record(Level::Warn, message);
    }

    pub fn error(&mut self, message: impl Display) {
        self.record(Level::Error, message);
    }

    /// Flushes and releases the sink.
    pub fn close(mut self) -> Result<()> {
        self.sink.flush().map_err(ShelfError::Io)
    }
}
