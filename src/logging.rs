// Logging setup and conditional logging macros - macros only active in debug builds

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "four-letter-wordle";
const LOG_FILE: &str = "game.log";
const DEFAULT_FILTER: &str = "warn";

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

/// Where log records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    Stderr,
    /// Append to the log file; used while the terminal UI owns the screen.
    File,
}

#[must_use]
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE))
}

fn open_log_file() -> io::Result<(fs::File, PathBuf)> {
    let path = log_file_path()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no local data directory"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Line shown once the terminal is restored, telling the player where the log went.
#[must_use]
pub fn log_location_notice(path: &Path) -> String {
    format!("Game log written to {}", path.display())
}

/// Install the global logger. The filter comes from `RUST_LOG`.
///
/// Returns the log file path when logging to a file.
pub fn init_logging(destination: LogDestination) -> Option<PathBuf> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    let mut log_path = None;
    if destination == LogDestination::File {
        match open_log_file() {
            Ok((file, path)) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
                log_path = Some(path);
            }
            // Never fall back to stderr here: it would draw over the UI.
            Err(_) => {
                builder.target(env_logger::Target::Pipe(Box::new(io::sink())));
            }
        }
    }

    // A logger may already be installed (e.g. by tests); keep it.
    let _ = builder.try_init();
    log_path
}
