use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub onboarding_complete: bool,
}

impl User {
    fn from_row(row: &Row<'_>) -> Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            created_at: row.get(2)?,
            onboarding_complete: row.get(3)?,
        })
    }

    pub fn create(conn: &Connection, name: &str, created_at: DateTime<Utc>) -> Result<Self> {
        conn.execute(
            "INSERT INTO users (name, created_at, onboarding_complete) VALUES (?1, ?2, 0)",
            params![name, created_at],
        )?;
        Ok(Self {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
            created_at,
            onboarding_complete: false,
        })
    }

    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        conn.query_row(
            "SELECT id, name, created_at, onboarding_complete FROM users WHERE id = ?1",
            params![id],
            Self::from_row,
        )
        .optional()
    }

    /// The app tracks a single local user; this returns the oldest one.
    pub fn find_first(conn: &Connection) -> Result<Option<Self>> {
        conn.query_row(
            "SELECT id, name, created_at, onboarding_complete FROM users ORDER BY id LIMIT 1",
            [],
            Self::from_row,
        )
        .optional()
    }

    /// Returns false if no such user exists.
    pub fn complete_onboarding(conn: &Connection, id: i64) -> Result<bool> {
        let changed = conn.execute(
            "UPDATE users SET onboarding_complete = 1 WHERE id = ?1",
            params![id],
        )?;
        Ok(changed > 0)
    }
}
