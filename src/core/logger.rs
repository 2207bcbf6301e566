//! A small leveled logger whose output can be read back.
//!
//! ```
//! use primext::logger::{LogDevice, Logger};
//!
//! let mut logger = Logger::new(LogDevice::buffer());
//! logger.info("Hello").unwrap();
//!
//! assert!(logger.reread().unwrap().ends_with("INFO -- : Hello\n"));
//! ```

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::fs::{File, OpenOptions};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::stream::RereadExt;
use crate::utils::io::{map_io_error, read_file};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Any,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::Any => "ANY",
        }
    }

    fn initial(&self) -> char {
        match self {
            Severity::Any => 'A',
            other => other.label().chars().next().unwrap_or('?'),
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where log lines go.
pub enum LogDevice {
    File { path: PathBuf, file: File },
    Buffer(Cursor<Vec<u8>>),
    Stream(Box<dyn Write + Send>),
}

impl LogDevice {
    /// Append to the file at `path`, creating it when missing.
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| map_io_error(e, &path, "open log"))?;

        Ok(LogDevice::File { path, file })
    }

    pub fn buffer() -> Self {
        LogDevice::Buffer(Cursor::new(Vec::new()))
    }

    pub fn stream(writer: impl Write + Send + 'static) -> Self {
        LogDevice::Stream(Box::new(writer))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        let result = match self {
            LogDevice::File { file, .. } => file.write_all(line.as_bytes()),
            LogDevice::Buffer(cursor) => cursor.write_all(line.as_bytes()),
            LogDevice::Stream(writer) => writer.write_all(line.as_bytes()).and_then(|_| writer.flush()),
        };

        result.map_err(|e| Error::internal_io(e.to_string(), Some("write log".to_string())))
    }

    /// Everything logged so far.
    ///
    /// Files are read fresh from disk. Streams cannot be read back and yield an
    /// empty string.
    pub fn reread(&mut self) -> Result<String> {
        match self {
            LogDevice::File { path, .. } => read_file(path, "reread log"),
            LogDevice::Buffer(cursor) => cursor.reread_string(),
            LogDevice::Stream(_) => Ok(String::new()),
        }
    }
}

impl fmt::Debug for LogDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogDevice::File { path, .. } => f.debug_tuple("File").field(path).finish(),
            LogDevice::Buffer(cursor) => f.debug_tuple("Buffer").field(&cursor.get_ref().len()).finish(),
            LogDevice::Stream(_) => f.write_str("Stream"),
        }
    }
}

#[derive(Debug)]
pub struct Logger {
    device: LogDevice,
    level: Severity,
    progname: Option<String>,
}

impl Logger {
    pub fn new(device: LogDevice) -> Self {
        Self {
            device,
            level: Severity::Debug,
            progname: None,
        }
    }

    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    pub fn with_progname(mut self, progname: impl Into<String>) -> Self {
        self.progname = Some(progname.into());
        self
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn set_level(&mut self, level: Severity) {
        self.level = level;
    }

    pub fn device(&self) -> &LogDevice {
        &self.device
    }

    /// Write `message` when `severity` reaches the logger level.
    pub fn log(&mut self, severity: Severity, message: impl Display) -> Result<()> {
        if severity < self.level {
            return Ok(());
        }

        let line = format!(
            "{}, [{} #{}] {:>5} -- {}: {}\n",
            severity.initial(),
            Local::now().format(TIMESTAMP_FORMAT),
            std::process::id(),
            severity.label(),
            self.progname.as_deref().unwrap_or_default(),
            message
        );

        self.device.write_line(&line)
    }

    pub fn debug(&mut self, message: impl Display) -> Result<()> {
        self.log(Severity::Debug, message)
    }

    pub fn info(&mut self, message: impl Display) -> Result<()> {
        self.log(Severity::Info, message)
    }

    pub fn warn(&mut self, message: impl Display) -> Result<()> {
        self.log(Severity::Warn, message)
    }

    pub fn error(&mut self, message: impl Display) -> Result<()> {
        self.log(Severity::Error, message)
    }

    pub fn fatal(&mut self, message: impl Display) -> Result<()> {
        self.log(Severity::Fatal, message)
    }

    /// Log regardless of level.
    pub fn any(&mut self, message: impl Display) -> Result<()> {
        self.log(Severity::Any, message)
    }

    pub fn reread(&mut self) -> Result<String> {
        self.device.reread()
    }
}
