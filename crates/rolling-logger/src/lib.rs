//! Rolling Logger
//!
//! File logger for Tauri applications. Lines go to `<app>.log` in the log
//! directory; when the file would exceed its size limit it is shifted to
//! `<app>.1.log`, `<app>.2.log`, ... and the oldest file is dropped.
//! The most recent lines are also kept in memory for in-app diagnostics.
//!
//! `log` records are bridged into the same subscriber, filtered at the same
//! level as tracing events.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use thiserror::Error;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to open log file: {0}")]
    Io(#[from] io::Error),

    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),

    #[error("logger not initialized")]
    NotInitialized,
}

/// Rotation and buffer limits
#[derive(Debug, Clone, Copy)]
pub struct RollingConfig {
    /// Size at which the active file is rotated
    pub max_file_bytes: u64,
    /// Files kept on disk, the active one included
    pub max_files: usize,
    /// Lines kept in memory
    pub buffer_lines: usize,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 1024 * 1024,
            max_files: 3,
            buffer_lines: 200,
        }
    }
}

// ========================
// Rolling File
// ========================

/// Size-rotated log file
pub struct RollingFile {
    dir: PathBuf,
    stem: String,
    max_file_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    pub fn open(dir: &Path, stem: &str, config: &RollingConfig) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{stem}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            dir: dir.to_path_buf(),
            stem: stem.to_string(),
            max_file_bytes: config.max_file_bytes,
            max_files: config.max_files.max(1),
            file,
            written,
        })
    }

    /// Path of the file at `index` (0 is the active file)
    pub fn path(&self, index: usize) -> PathBuf {
        if index == 0 {
            self.dir.join(format!("{}.log", self.stem))
        } else {
            self.dir.join(format!("{}.{}.log", self.stem, index))
        }
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        let last = self.max_files - 1;
        if last == 0 {
            self.file = File::create(self.path(0))?;
            self.written = 0;
            return Ok(());
        }

        let oldest = self.path(last);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (0..last).rev() {
            let from = self.path(index);
            if from.exists() {
                fs::rename(&from, self.path(index + 1))?;
            }
        }

        self.file = OpenOptions::new().create(true).append(true).open(self.path(0))?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_file_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.written += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

// ========================
// Recent Lines
// ========================

/// Fixed-capacity ring of the latest log lines
pub struct RecentLines {
    lines: Mutex<VecDeque<String>>,
    capacity: usize,
}

impl RecentLines {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn push(&self, line: &str) {
        if self.capacity == 0 {
            return;
        }
        let Ok(mut lines) = self.lines.lock() else { return };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line.to_string());
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }
}

// ========================
// Subscriber Wiring
// ========================

/// Cloneable writer handed to the fmt layer
#[derive(Clone)]
struct LogSink {
    file: Arc<Mutex<RollingFile>>,
    recent: Arc<RecentLines>,
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for line in String::from_utf8_lossy(buf).lines() {
            if !line.is_empty() {
                self.recent.push(line);
            }
        }
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.lock() {
            Ok(mut file) => file.flush(),
            Err(_) => Ok(()),
        }
    }
}

/// Local wall-clock timestamps
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Level written to the file
const MAX_LEVEL: tracing::Level = tracing::Level::INFO;

/// `log` filter matching a tracing level
pub fn log_filter_for(level: tracing::Level) -> log::LevelFilter {
    match level {
        tracing::Level::ERROR => log::LevelFilter::Error,
        tracing::Level::WARN => log::LevelFilter::Warn,
        tracing::Level::INFO => log::LevelFilter::Info,
        tracing::Level::DEBUG => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

struct LoggerState {
    recent: Arc<RecentLines>,
    path: PathBuf,
}

static STATE: OnceLock<LoggerState> = OnceLock::new();

/// Install the global subscriber with default limits
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(log_dir, app_name, RollingConfig::default())
}

pub fn init_logger_with(log_dir: PathBuf, app_name: &str, config: RollingConfig) -> Result<(), LoggerError> {
    if STATE.get().is_some() {
        return Err(LoggerError::AlreadyInitialized("rolling logger".to_string()));
    }

    let file = RollingFile::open(&log_dir, app_name, &config)?;
    let path = file.path(0);
    let sink = LogSink {
        file: Arc::new(Mutex::new(file)),
        recent: Arc::new(RecentLines::new(config.buffer_lines)),
    };
    let recent = sink.recent.clone();

    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_target(false)
        .with_max_level(MAX_LEVEL)
        .with_writer(move || sink.clone())
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;
    log::set_max_level(log_filter_for(MAX_LEVEL));

    let _ = STATE.set(LoggerState { recent, path });
    tracing::info!("{} logger ready", app_name);
    Ok(())
}

fn ensure_initialized() -> Result<(), LoggerError> {
    STATE.get().map(|_| ()).ok_or(LoggerError::NotInitialized)
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::info!("{}", message);
    Ok(())
}

pub fn warn(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::warn!("{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::error!("{}", message);
    Ok(())
}

/// Latest buffered lines, oldest first. Empty before initialization.
pub fn recent_lines() -> Vec<String> {
    STATE.get().map(|s| s.recent.snapshot()).unwrap_or_default()
}

/// Active log file, once initialized
pub fn log_file_path() -> Option<PathBuf> {
    STATE.get().map(|s| s.path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> RollingConfig {
        RollingConfig { max_file_bytes: 32, max_files: 3, buffer_lines: 2 }
    }

    #[test]
    fn test_rotates_when_full() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "App", &small_config()).unwrap();

        file.write_all(b"first line that is 24 b\n").unwrap();
        file.write_all(b"second line\n").unwrap();
        file.flush().unwrap();

        let active = fs::read_to_string(dir.path().join("App.log")).unwrap();
        let rotated = fs::read_to_string(dir.path().join("App.1.log")).unwrap();
        assert_eq!(active, "second line\n");
        assert_eq!(rotated, "first line that is 24 b\n");
    }

    #[test]
    fn test_keeps_at_most_max_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "App", &small_config()).unwrap();

        for i in 0..6 {
            file.write_all(format!("{i}: padding padding padding\n").as_bytes()).unwrap();
        }
        file.flush().unwrap();

        assert!(dir.path().join("App.log").exists());
        assert!(dir.path().join("App.1.log").exists());
        assert!(dir.path().join("App.2.log").exists());
        assert!(!dir.path().join("App.3.log").exists());
        assert!(fs::read_to_string(dir.path().join("App.log")).unwrap().starts_with("5:"));
    }

    #[test]
    fn test_reopen_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut file = RollingFile::open(dir.path(), "App", &RollingConfig::default()).unwrap();
            file.write_all(b"one\n").unwrap();
        }
        let mut file = RollingFile::open(dir.path(), "App", &RollingConfig::default()).unwrap();
        file.write_all(b"two\n").unwrap();
        file.flush().unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("App.log")).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_recent_lines_drop_oldest() {
        let recent = RecentLines::new(2);
        recent.push("a");
        recent.push("b");
        recent.push("c");
        assert_eq!(recent.snapshot(), vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_sink_feeds_recent_lines() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config();
        let mut sink = LogSink {
            file: Arc::new(Mutex::new(RollingFile::open(dir.path(), "App", &config).unwrap())),
            recent: Arc::new(RecentLines::new(config.buffer_lines)),
        };

        sink.write_all(b"hello\nworld\n").unwrap();
        assert_eq!(sink.recent.snapshot(), vec!["hello".to_string(), "world".to_string()]);
    }

    #[test]
    fn test_log_filter_follows_tracing_level() {
        assert_eq!(log_filter_for(tracing::Level::INFO), log::LevelFilter::Info);
        assert_eq!(log_filter_for(tracing::Level::TRACE), log::LevelFilter::Trace);
        assert!(log_filter_for(MAX_LEVEL) < log::LevelFilter::Debug);
    }

    #[test]
    fn test_helpers_fail_before_init() {
        if STATE.get().is_none() {
            assert!(matches!(info("x"), Err(LoggerError::NotInitialized)));
            assert!(recent_lines().is_empty());
        }
    }
}
