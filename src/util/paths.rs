//! Locations of the config file and logs.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Set once from `--data-dir`
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Fix the data directory for the process. Later calls are ignored.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(default_data_dir);
    if let Err(ignored) = DATA_DIR.set(path) {
        tracing::debug!(path = %ignored.display(), "Data directory already set");
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".button-group"))
        .unwrap_or_else(|| PathBuf::from(".button-group"))
}

/// `--data-dir` when given, else `~/.button-group`.
pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// `<data-dir>/config.toml`
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}

pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// `<data-dir>/logs/button-group.log`
pub fn log_file_path() -> PathBuf {
    logs_dir().join("button-group.log")
}
