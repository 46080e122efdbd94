//! Terminal logger for the `log` crate.
//!
//! The library only emits records through `log`; binaries decide where they
//! go. [`MixLogger`] writes one line per record to stderr (or any writer),
//! with an optional timestamp and a level label that is colored when the
//! output is a terminal.

use std::io::{self, IsTerminal, Write};
use std::sync::{Mutex, PoisonError};

use crossterm::style::Stylize;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::{OffsetDateTime, format_description::OwnedFormatItem};

/// Line-oriented logger for the solver binaries.
///
/// # Thread Safety
///
/// The writer sits behind a mutex; a poisoned lock is recovered rather than
/// dropping log lines.
pub struct MixLogger {
    level: LevelFilter,
    show_time: bool,
    show_level: bool,
    show_target: bool,
    color: bool,
    time_format: OwnedFormatItem,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl MixLogger {
    /// Logger writing to stderr at `Info` level.
    ///
    /// Level labels are colored only when stderr is a terminal and
    /// `NO_COLOR` is unset.
    #[must_use]
    pub fn new() -> Self {
        let color = io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self {
            level: LevelFilter::Info,
            show_time: true,
            show_level: true,
            show_target: true,
            color,
            time_format: default_time_format(),
            writer: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Send output to `writer` instead of stderr. Disables color.
    #[must_use]
    pub fn with_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Mutex::new(Box::new(writer));
        self.color = false;
        self
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Enable or disable log levels.
    #[must_use]
    pub fn show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    /// Enable or disable the module path of each record.
    #[must_use]
    pub fn show_target(mut self, show: bool) -> Self {
        self.show_target = show;
        self
    }

    /// Override time format (`time` format description syntax).
    /// An unparsable format keeps the current one.
    #[must_use]
    pub fn time_format(mut self, format: &str) -> Self {
        if let Ok(parsed) = time::format_description::parse_owned::<2>(format) {
            self.time_format = parsed;
        }
        self
    }

    /// Install as the global logger.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn format_time(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(&self.time_format)
            .unwrap_or_else(|_| now.to_string())
    }

    fn level_label(&self, level: Level) -> String {
        let padded = format!("{:<5}", level.as_str());
        if !self.color {
            return padded;
        }
        match level {
            Level::Trace => padded.dim().to_string(),
            Level::Debug => padded.blue().to_string(),
            Level::Info => padded.green().to_string(),
            Level::Warn => padded.yellow().to_string(),
            Level::Error => padded.red().bold().to_string(),
        }
    }

    fn format_record(&self, record: &Record<'_>) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(4);
        if self.show_time {
            parts.push(format!("[{}]", self.format_time()));
        }
        if self.show_level {
            parts.push(self.level_label(record.level()));
        }
        if self.show_target {
            parts.push(record.target().to_string());
        }
        parts.push(record.args().to_string());
        parts.join(" ")
    }
}

impl Default for MixLogger {
    fn default() -> Self {
        Self::new()
    }
}

fn default_time_format() -> OwnedFormatItem {
    time::format_description::parse_owned::<2>("[hour]:[minute]:[second]")
        .unwrap_or_else(|_| OwnedFormatItem::Literal(Vec::<u8>::new().into_boxed_slice()))
}

impl Log for MixLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_record(record);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(writer, "{line}");
    }

    fn flush(&self) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.flush();
    }
}
