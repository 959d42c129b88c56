use std::path::{Path, PathBuf};

use directories::BaseDirs;

/// SQLite file opened in the current working directory.
const DB_FILE_NAME: &str = "ebookstore.db";
/// Folder beneath the user's home directory that holds rolling log files.
const DATA_DIR_NAME: &str = ".ebookstore";
const LOG_DIR_NAME: &str = "logs";

/// Where the program keeps its state. There are no flags or environment
/// overrides; the defaults are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    /// `None` when no home directory could be located; file logging is then
    /// skipped.
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Default configuration for an interactive run.
    pub fn resolve() -> Self {
        Self {
            db_path: PathBuf::from(DB_FILE_NAME),
            log_dir: default_log_dir(),
        }
    }

    /// Configuration pointing at an explicit database file, without logging.
    pub fn with_db_path(path: impl AsRef<Path>) -> Self {
        Self {
            db_path: path.as_ref().to_path_buf(),
            log_dir: None,
        }
    }
}

fn default_log_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(DATA_DIR_NAME).join(LOG_DIR_NAME))
}
