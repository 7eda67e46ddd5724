//! Logging configuration and utilities for rangeq.
//!
//! Answers go to stdout, so diagnostics must never share it. [`Logger`]
//! renders [`LogEntry`] values to stderr (or any writer, or an in-memory
//! [`LogCollector`] in tests).

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Log level for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Warn
    }
}

impl LogLevel {
    fn rank(self) -> u8 {
        match self {
            LogLevel::Error => 0,
            LogLevel::Warn => 1,
            LogLevel::Info => 2,
            LogLevel::Debug => 3,
            LogLevel::Trace => 4,
        }
    }

    /// Check if this level should log messages at the given level
    pub fn should_log(&self, level: LogLevel) -> bool {
        self.rank() >= level.rank()
    }

    fn label(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    fn color(self) -> &'static str {
        match self {
            LogLevel::Error => "\x1b[31m",
            LogLevel::Warn => "\x1b[33m",
            LogLevel::Info => "\x1b[32m",
            LogLevel::Debug => "\x1b[34m",
            LogLevel::Trace => "\x1b[90m",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!(
                "unknown log level `{other}` (expected error, warn, info, debug or trace)"
            )),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Plain,
    Json,
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        LogFormat::Plain
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" => Ok(LogFormat::Plain),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            other => Err(format!(
                "unknown log format `{other}` (expected plain, json or compact)"
            )),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level to output
    #[serde(default)]
    pub level: LogLevel,
    /// Output format
    #[serde(default)]
    pub format: LogFormat,
    /// Enable timestamps
    #[serde(default = "default_true")]
    pub timestamps: bool,
    /// Enable colors (for terminal output)
    #[serde(default)]
    pub colors: bool,
    /// Component-specific log levels
    #[serde(default)]
    pub component_levels: HashMap<String, LogLevel>,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::Plain,
            timestamps: true,
            colors: false,
            component_levels: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Create a new logging config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the log format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Set a component-specific log level
    pub fn with_component_level(mut self, component: impl Into<String>, level: LogLevel) -> Self {
        self.component_levels.insert(component.into(), level);
        self
    }

    /// Get the effective log level for a component
    pub fn effective_level(&self, component: Option<&str>) -> LogLevel {
        component
            .and_then(|comp| self.component_levels.get(comp).copied())
            .unwrap_or(self.level)
    }

    /// Check if a message at the given level should be logged
    pub fn should_log(&self, level: LogLevel, component: Option<&str>) -> bool {
        self.effective_level(component).should_log(level)
    }
}

/// A log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    pub message: String,
}

impl LogEntry {
    /// Create a new log entry
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            level,
            component: None,
            message: message.into(),
        }
    }

    /// Create a log entry with a component
    pub fn with_component(
        level: LogLevel,
        component: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            component: Some(component.into()),
            ..Self::new(level, message)
        }
    }

    /// Render a single line (no trailing newline) for the given config.
    pub fn render(&self, config: &LoggingConfig) -> String {
        match config.format {
            LogFormat::Json => serde_json::to_string(self)
                .unwrap_or_else(|_| format!("{{\"message\":{:?}}}", self.message)),
            LogFormat::Compact => {
                let initial = &self.level.label()[..1];
                match &self.component {
                    Some(c) => format!("{initial} {c}: {}", self.message),
                    None => format!("{initial} {}", self.message),
                }
            }
            LogFormat::Plain => {
                let mut line = String::new();
                if config.timestamps {
                    line.push_str(&self.timestamp);
                    line.push(' ');
                }
                if config.colors {
                    line.push_str(&format!("{}{:<5}\x1b[0m", self.level.color(), self.level.label()));
                } else {
                    line.push_str(&format!("{:<5}", self.level.label()));
                }
                if let Some(c) = &self.component {
                    line.push_str(&format!(" [{c}]"));
                }
                line.push(' ');
                line.push_str(&self.message);
                line
            }
        }
    }
}

/// Log collector for capturing log entries
#[derive(Debug, Default)]
pub struct LogCollector {
    entries: Vec<LogEntry>,
}

impl LogCollector {
    /// Create a new log collector
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Add a log entry
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Get all collected entries
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

}

enum Sink {
    Writer(Box<dyn Write>),
    Collector(LogCollector),
}

/// Leveled logger writing rendered entries to a sink.
///
/// Write failures are dropped: a broken stderr must not abort a run whose
/// answers are still being written to stdout.
pub struct Logger {
    config: LoggingConfig,
    sink: RefCell<Sink>,
}

impl Logger {
    /// Logger writing to stderr.
    pub fn stderr(config: LoggingConfig) -> Self {
        Self::to_writer(config, Box::new(std::io::stderr()))
    }

    pub fn to_writer(config: LoggingConfig, writer: Box<dyn Write>) -> Self {
        Self {
            config,
            sink: RefCell::new(Sink::Writer(writer)),
        }
    }

    /// Logger keeping entries in memory; read them back with [`Logger::collected`].
    pub fn collecting(config: LoggingConfig) -> Self {
        Self {
            config,
            sink: RefCell::new(Sink::Collector(LogCollector::new())),
        }
    }

    /// Logger that only lets errors through to stderr.
    pub fn quiet() -> Self {
        Self::stderr(LoggingConfig::new().with_level(LogLevel::Error))
    }

    pub fn enabled(&self, level: LogLevel, component: &str) -> bool {
        self.config.should_log(level, Some(component))
    }

    pub fn log(&self, level: LogLevel, component: &str, message: impl Into<String>) {
        if !self.enabled(level, component) {
            return;
        }
        let entry = LogEntry::with_component(level, component, message);
        match &mut *self.sink.borrow_mut() {
            Sink::Writer(w) => {
                let _ = writeln!(w, "{}", entry.render(&self.config));
            }
            Sink::Collector(c) => c.push(entry),
        }
    }

    pub fn error(&self, component: &str, message: impl Into<String>) {
        self.log(LogLevel::Error, component, message);
    }

    pub fn warn(&self, component: &str, message: impl Into<String>) {
        self.log(LogLevel::Warn, component, message);
    }

    pub fn info(&self, component: &str, message: impl Into<String>) {
        self.log(LogLevel::Info, component, message);
    }

    pub fn debug(&self, component: &str, message: impl Into<String>) {
        self.log(LogLevel::Debug, component, message);
    }

    pub fn trace(&self, component: &str, message: impl Into<String>) {
        self.log(LogLevel::Trace, component, message);
    }

    /// Entries captured by a collecting logger; empty for writer sinks.
    pub fn collected(&self) -> Vec<LogEntry> {
        match &*self.sink.borrow() {
            Sink::Collector(c) => c.entries().to_vec(),
            Sink::Writer(_) => Vec::new(),
        }
    }
}
