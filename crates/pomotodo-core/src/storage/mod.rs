mod config;
pub mod database;
mod task_store;

pub use config::{Config, ImportConfig, NotificationsConfig, TimerConfig};
pub use database::Database;
pub use task_store::{TaskStore, LOCALE_KEY, TASKS_KEY};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the data directory, creating it if needed.
///
/// `POMOTODO_DATA_DIR` wins when set. Otherwise `~/.config/pomotodo`, or
/// `~/.config/pomotodo-dev` with `POMOTODO_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("POMOTODO_DATA_DIR") {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("POMOTODO_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("pomotodo-dev")
            } else {
                base_dir.join("pomotodo")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
