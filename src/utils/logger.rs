// src/utils/logger.rs
//! Dual-sink logger behind the `log` facade
//!
//! Every record goes to `filetrap.log` and to standard output. The stdout
//! sink keeps writing to whatever descriptor slot 1 currently holds, so
//! once the standard handles have been closed and reused, log lines land
//! in the file that inherited slot 1.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};

/// Fixed log file name, created fresh on every run.
pub const LOG_FILE: &str = "filetrap.log";

struct DualLogger {
    file: Mutex<Option<File>>,
}

static LOGGER: DualLogger = DualLogger {
    file: Mutex::new(None),
};

impl Log for DualLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "{} {:<5} {}",
            Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
            record.level(),
            record.args()
        );
        if let Some(file) = self.file.lock().unwrap().as_mut() {
            let _ = writeln!(file, "{}", line);
        }
        // Slot 1 may be closed by now; a failed write is dropped, not fatal.
        let _ = writeln!(io::stdout(), "{}", line);
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().unwrap().as_mut() {
            let _ = file.flush();
        }
        let _ = io::stdout().flush();
    }
}

/// Installs the logger and opens the log file, truncating prior contents.
///
/// Idempotent: a second call leaves the already-open file alone. A log
/// file that cannot be opened degrades logging to stdout-only.
pub fn init() {
    if log::set_logger(&LOGGER).is_err() {
        return;
    }
    log::set_max_level(LevelFilter::Trace);
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(LOG_FILE);
    *LOGGER.file.lock().unwrap() = file.ok();
}

/// Applies the command-line verbosity threshold to the facade.
pub fn apply_threshold(threshold: i32) {
    log::set_max_level(threshold_filter(threshold));
}

/// Maps the numeric threshold onto a [`LevelFilter`].
///
/// Records carry an importance of Error=4, Warn=3, Info=2, Debug=1,
/// Trace=0 and pass when importance >= threshold. Threshold 0 keeps
/// everything; 5 and above silences both sinks.
pub fn threshold_filter(threshold: i32) -> LevelFilter {
    match 5_i32.saturating_sub(threshold) {
        i32::MIN..=0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Flushes and closes the log file if it is open.
///
/// Records emitted afterwards still reach stdout.
pub fn shutdown() {
    if let Some(mut file) = LOGGER.file.lock().unwrap().take() {
        let _ = file.flush();
    }
}
