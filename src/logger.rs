// src/logger.rs
//
// File sink for the `log` facade. Lines look like
//   [00:00:01.234][WARN] Unrecognized event: 선수A 이상한이벤트 - S45G01N13 Q1 (home)
// Optionally echoes warnings and errors to stderr.
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

pub struct FileLogger {
    file: Option<Mutex<File>>,
    level: LevelFilter,
    echo_stderr: bool,
}

impl FileLogger {
    /// `path = None` logs to stderr only.
    pub fn new(path: Option<&Path>, level: LevelFilter, echo_stderr: bool) -> std::io::Result<Self> {
        let file = match path {
            Some(p) => Some(Mutex::new(
                OpenOptions::new().create(true).append(true).open(p)?,
            )),
            None => None,
        };
        Ok(Self { file, level, echo_stderr })
    }

    /// Install as the global logger. Only the first call wins.
    pub fn install(self) -> Result<(), SetLoggerError> {
        start();
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        let line = format!("[{elapsed}][{}] {}\n", record.level(), record.args());

        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = f.write_all(line.as_bytes());
            }
        }
        if (self.echo_stderr || self.file.is_none()) && record.level() <= Level::Warn {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = f.flush();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_format() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }

    #[test]
    fn writes_enabled_levels_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("decode.log");
        let logger = FileLogger::new(Some(&path), LevelFilter::Info, false).unwrap();

        logger.log(&Record::builder().level(Level::Warn).args(format_args!("kept")).build());
        logger.log(&Record::builder().level(Level::Debug).args(format_args!("dropped")).build());
        logger.flush();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("][WARN] kept"));
        assert!(!text.contains("dropped"));
    }

    #[test]
    fn only_first_install_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("install.log");
        FileLogger::new(Some(&path), LevelFilter::Info, false).unwrap().install().unwrap();
        assert!(FileLogger::new(None, LevelFilter::Info, false).unwrap().install().is_err());

        log::warn!("installed");
        log::logger().flush();
        assert!(std::fs::read_to_string(&path).unwrap().contains("][WARN] installed"));
    }
}
