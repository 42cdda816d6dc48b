//! Rolling Logger
//!
//! Daily log files under the app log directory plus an in-memory ring of the
//! most recent lines. Installs a global `tracing` subscriber; `log` records are
//! forwarded through `tracing-log`, so `log::info!` from any crate lands here.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use chrono::{Local, NaiveDate};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Daily files kept on disk
pub const MAX_FILES: usize = 7;
/// Lines kept in memory for `recent_lines`
pub const RING_CAPACITY: usize = 500;

static WRITER: OnceLock<RollingWriter> = OnceLock::new();

struct RollingState {
    dir: PathBuf,
    app_name: String,
    day: Option<NaiveDate>,
    file: Option<File>,
    recent: VecDeque<String>,
    capacity: usize,
    partial: String,
}

impl RollingState {
    fn file_name(&self, day: NaiveDate) -> String {
        format!("{}.{}.log", self.app_name, day.format("%Y-%m-%d"))
    }

    fn rotate(&mut self, day: NaiveDate) -> io::Result<()> {
        if self.day == Some(day) && self.file.is_some() {
            return Ok(());
        }
        let path = self.dir.join(self.file_name(day));
        self.file = Some(OpenOptions::new().create(true).append(true).open(path)?);
        self.day = Some(day);
        prune(&self.dir, &self.app_name, MAX_FILES)?;
        Ok(())
    }

    fn remember(&mut self, text: &str) {
        self.partial.push_str(text);
        while let Some(end) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=end).collect();
            if self.recent.len() == self.capacity {
                self.recent.pop_front();
            }
            self.recent.push_back(line.trim_end().to_string());
        }
    }

    fn write_on(&mut self, day: NaiveDate, buf: &[u8]) -> io::Result<usize> {
        self.rotate(day)?;
        if let Some(file) = self.file.as_mut() {
            file.write_all(buf)?;
        }
        self.remember(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }
}

/// Delete the oldest `{app_name}.*.log` files beyond `keep`.
/// Dated names sort chronologically.
fn prune(dir: &Path, app_name: &str, keep: usize) -> io::Result<()> {
    let prefix = format!("{}.", app_name);
    let mut logs: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with(&prefix) && n.ends_with(".log"))
                .unwrap_or(false)
        })
        .collect();
    if logs.len() <= keep {
        return Ok(());
    }
    logs.sort();
    let excess = logs.len() - keep;
    for path in logs.into_iter().take(excess) {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// `MakeWriter` over the shared rolling state
#[derive(Clone)]
pub struct RollingWriter {
    state: Arc<Mutex<RollingState>>,
}

impl RollingWriter {
    pub fn new(dir: impl Into<PathBuf>, app_name: &str) -> io::Result<Self> {
        Self::with_capacity(dir, app_name, RING_CAPACITY)
    }

    pub fn with_capacity(dir: impl Into<PathBuf>, app_name: &str, capacity: usize) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            state: Arc::new(Mutex::new(RollingState {
                dir,
                app_name: app_name.to_string(),
                day: None,
                file: None,
                recent: VecDeque::with_capacity(capacity),
                capacity: capacity.max(1),
                partial: String::new(),
            })),
        })
    }

    /// Most recent complete lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.state.lock() {
            Ok(state) => state.recent.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn write_on(&self, day: NaiveDate, buf: &[u8]) -> io::Result<usize> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "logger poisoned"))?;
        state.write_on(day, buf)
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_on(Local::now().date_naive(), buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "logger poisoned"))?;
        match state.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    let writer = RollingWriter::new(&log_dir, app_name).map_err(|e| e.to_string())?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer.clone())
        .finish()
        .try_init()
        .map_err(|e| e.to_string())?;

    WRITER
        .set(writer)
        .map_err(|_| "logger already initialized".to_string())?;
    tracing::info!("{} logging to {}", app_name, log_dir.display());
    Ok(())
}

/// Recent lines from the installed logger; empty before `init_logger`
pub fn recent_lines() -> Vec<String> {
    WRITER.get().map(RollingWriter::recent_lines).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn test_writes_to_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RollingWriter::new(dir.path(), "Erp").unwrap();

        writer.write_on(day(1), b"first line\n").unwrap();

        let content = fs::read_to_string(dir.path().join("Erp.2026-03-01.log")).unwrap();
        assert_eq!(content, "first line\n");
    }

    #[test]
    fn test_rotates_on_new_day() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RollingWriter::new(dir.path(), "Erp").unwrap();

        writer.write_on(day(1), b"monday\n").unwrap();
        writer.write_on(day(2), b"tuesday\n").unwrap();

        assert!(dir.path().join("Erp.2026-03-01.log").exists());
        let content = fs::read_to_string(dir.path().join("Erp.2026-03-02.log")).unwrap();
        assert_eq!(content, "tuesday\n");
    }

    #[test]
    fn test_keeps_newest_files_only() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RollingWriter::new(dir.path(), "Erp").unwrap();

        for d in 1..=10 {
            writer.write_on(day(d), b"entry\n").unwrap();
        }

        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names.len(), MAX_FILES);
        assert_eq!(names[0], "Erp.2026-03-04.log");
    }

    #[test]
    fn test_ring_keeps_last_lines() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RollingWriter::with_capacity(dir.path(), "Erp", 2).unwrap();

        writer.write_on(day(1), b"one\ntwo\nthr").unwrap();
        writer.write_on(day(1), b"ee\n").unwrap();

        assert_eq!(writer.recent_lines(), vec!["two", "three"]);
    }

    #[test]
    fn test_no_recent_lines_before_init() {
        if WRITER.get().is_none() {
            assert!(recent_lines().is_empty());
        }
    }
}
