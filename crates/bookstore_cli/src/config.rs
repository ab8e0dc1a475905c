//! Runtime configuration for the interactive shell.
//!
//! The shell takes no flags and reads no environment variables; everything
//! is derived from the working directory and the build mode.

use bookstore_core::default_log_level;
use std::io;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "ebookstore.db";
pub const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    /// Absolute; required by the logging backend.
    pub log_dir: PathBuf,
    pub log_level: &'static str,
}

impl AppConfig {
    /// Resolves paths against `base_dir`.
    pub fn in_dir(base_dir: &Path) -> Self {
        Self {
            db_path: base_dir.join(DB_FILE_NAME),
            log_dir: base_dir.join(LOG_DIR_NAME),
            log_level: default_log_level(),
        }
    }

    /// Resolves paths against the current working directory.
    pub fn from_current_dir() -> io::Result<Self> {
        Ok(Self::in_dir(&std::env::current_dir()?))
    }
}
