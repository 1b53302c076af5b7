// src/db/helpers.rs

use crate::db::Database;
use crate::error::AppError;
use rusqlite::Connection;
use std::sync::{Mutex, MutexGuard};

/// Lock the database, recovering from poisoning if necessary.
///
/// A panic in another holder leaves the connection itself usable.
pub fn lock_database<'a>(db: &'a Mutex<Database>, context: &str) -> MutexGuard<'a, Database> {
    match db.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            log::warn!("{context}: database mutex was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

/// Execute a database operation with lock handling and error logging.
///
/// # Example
/// ```ignore
/// with_connection(&db, "load mentors", |conn| {
///     Ok(Mentor::find_for_life_task(conn, life_task_id)?)
/// })
/// ```
pub fn with_connection<F, T>(db: &Mutex<Database>, operation: &str, f: F) -> Result<T, AppError>
where
    F: FnOnce(&Connection) -> Result<T, AppError>,
{
    let db = lock_database(db, operation);

    f(db.connection()).map_err(|e| {
        log::error!("Failed to {operation}: {e}");
        e
    })
}
