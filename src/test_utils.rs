//! Shared test utilities.
//!
//! This module provides common setup functions used across test modules.

#![cfg(test)]

use crate::clock::FixedClock;
use crate::db::{migrations, Database};
use crate::models::{Domain, LifeTask, User};
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use tempfile::{tempdir, TempDir};

/// Create a temporary test database with migrations applied.
///
/// Returns a tuple of (Database, TempDir). The TempDir must be kept alive
/// for the duration of the test to prevent the database file from being deleted.
pub fn setup_test_db() -> (Database, TempDir) {
    let dir = tempdir().expect("Failed to create temp directory for test DB");
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).expect("Failed to open test database");
    migrations::run(db.connection()).expect("Failed to run migrations on test DB");
    (db, dir)
}

/// Clock pinned to 2024-06-15 12:00 UTC.
pub fn fixed_clock() -> FixedClock {
    FixedClock::on(2024, 6, 15).expect("valid fixed date")
}

pub fn fixed_now() -> DateTime<Utc> {
    fixed_clock().0
}

/// Insert a user with a single life task and return the life task.
pub fn seed_life_task(conn: &Connection) -> LifeTask {
    let user = User::create(conn, "Test User", fixed_now()).expect("Failed to create test user");
    LifeTask::create(conn, user.id, Domain::Music, "Guitar", fixed_now())
        .expect("Failed to create test life task")
}
