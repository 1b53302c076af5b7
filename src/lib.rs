pub mod clock;
pub mod commands;
pub mod constants;
pub mod db;
pub mod error;
pub mod mastery;
pub mod models;
pub mod progress;
pub mod reward;
#[cfg(test)]
mod test_utils;
pub mod validation;

use crate::constants::DB_FILE_NAME;
use crate::db::{migrations, Database};
use crate::progress::ProgressManager;
use directories::ProjectDirs;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Failures while bringing up the store.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("Could not determine project directories")]
    NoProjectDirs,
    #[error("Could not create data directory: {0}")]
    DataDirCreation(#[source] std::io::Error),
    #[error("Failed to open database: {0}")]
    DatabaseOpen(#[source] rusqlite::Error),
    #[error("Failed to run database migrations: {0}")]
    Migration(#[source] rusqlite::Error),
}

/// Platform data directory location of the database, created if missing.
pub fn default_db_path() -> Result<PathBuf, InitError> {
    let proj_dirs = ProjectDirs::from("com", "mastery", "Mastery").ok_or(InitError::NoProjectDirs)?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir).map_err(InitError::DataDirCreation)?;
    Ok(data_dir.join(DB_FILE_NAME))
}

/// Open the database at `path` and bring its schema up to date.
pub fn open_database(path: &Path) -> Result<Database, InitError> {
    let db = Database::open(path).map_err(|e| {
        error!("Failed to open database at {}: {e}", path.display());
        InitError::DatabaseOpen(e)
    })?;

    migrations::run(db.connection()).map_err(|e| {
        error!("Failed to run migrations: {e}");
        InitError::Migration(e)
    })?;

    Ok(db)
}

/// Open the database in the default location and wrap it in a
/// [`ProgressManager`] on the system clock.
pub fn init() -> Result<ProgressManager, InitError> {
    let path = default_db_path()?;
    let db = open_database(&path)?;
    info!("Opened mastery database at {}", path.display());
    Ok(ProgressManager::new(Arc::new(Mutex::new(db))))
}
