use super::LogLevel;
use crate::settings::Log;
use chrono::{Local, NaiveDateTime};
use std::fmt::{self, Write as _};
use std::fs::{File, OpenOptions};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, error};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, thiserror::Error)]
enum OpenError {
    #[error("cannot open log file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Appends level-filtered, timestamped lines to a single file.
///
/// Nothing on the logging path reports an error to the caller. If the file
/// cannot be opened at construction, every later call is a no-op; use
/// [`FileLogger::is_ready`] to detect that case. The open failure itself is
/// reported only through `tracing`, so it stays invisible unless the host has
/// installed a subscriber such as [`Diagnostics`](super::Diagnostics).
#[derive(Debug)]
pub struct FileLogger {
    level: AtomicU8,
    path: PathBuf,
    file: Option<Mutex<File>>,
}

impl FileLogger {
    pub fn new(path: impl AsRef<Path>, level: LogLevel) -> Self {
        let path = path.as_ref().to_path_buf();
        let file = match open_append(&path) {
            Ok(file) => Some(Mutex::new(file)),
            Err(e) => {
                error!("{}", e);
                None
            }
        };

        Self {
            level: AtomicU8::new(level.as_u8()),
            path,
            file,
        }
    }

    /// Opens `path` with the default threshold of [`LogLevel::Info`].
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::new(path, LogLevel::default())
    }

    pub fn from_settings(settings: &Log) -> Self {
        Self::new(&settings.path, settings.level)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_ready(&self) -> bool {
        self.file.is_some()
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    // Relaxed: calls already past the filter may still emit under the old threshold.
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level.as_u8(), Ordering::Relaxed);
    }

    pub fn debug(&self, file: &str, line: u32, parts: &[&dyn fmt::Display]) {
        self.log(LogLevel::Debug, file, line, parts);
    }

    pub fn info(&self, file: &str, line: u32, parts: &[&dyn fmt::Display]) {
        self.log(LogLevel::Info, file, line, parts);
    }

    pub fn warning(&self, file: &str, line: u32, parts: &[&dyn fmt::Display]) {
        self.log(LogLevel::Warning, file, line, parts);
    }

    pub fn error(&self, file: &str, line: u32, parts: &[&dyn fmt::Display]) {
        self.log(LogLevel::Error, file, line, parts);
    }

    pub fn log(&self, level: LogLevel, file: &str, line: u32, parts: &[&dyn fmt::Display]) {
        if level < self.level() {
            return;
        }

        let text = format_line(&Local::now().naive_local(), level, file, line, parts);

        let Some(handle) = &self.file else {
            return;
        };
        let mut handle = handle.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = handle.write_all(text.as_bytes()) {
            debug!("dropped log line for {:?}: {}", self.path, e);
        }
    }
}

fn open_append(path: &Path) -> Result<File, OpenError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| OpenError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Renders one complete record, terminator included.
pub fn format_line(
    timestamp: &NaiveDateTime,
    level: LogLevel,
    file: &str,
    line: u32,
    parts: &[&dyn fmt::Display],
) -> String {
    let mut text = String::with_capacity(64);
    // Writing into a String cannot fail.
    let _ = write!(
        text,
        "{} [{}] {}:{} - ",
        timestamp.format(TIMESTAMP_FORMAT),
        level,
        file,
        line
    );
    for part in parts {
        let _ = write!(text, "{}", part);
    }
    text.push('\n');
    text
}
