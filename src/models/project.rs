use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

/// A real-world goal tied to a life task.
///
/// `completed_at` is set exactly once, on the transition to completed, and
/// `xp_reward` never changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i64,
    pub life_task_id: i64,
    pub title: String,
    pub description: String,
    pub deadline: Option<NaiveDate>,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub xp_reward: i64,
    pub created_at: DateTime<Utc>,
}

const COLUMNS: &str =
    "id, life_task_id, title, description, deadline, is_completed, completed_at, xp_reward, created_at";

/// Fields supplied when creating a project.
#[derive(Debug, Clone)]
pub struct NewProject<'a> {
    pub life_task_id: i64,
    pub title: &'a str,
    pub description: &'a str,
    pub deadline: Option<NaiveDate>,
    pub xp_reward: i64,
}

impl Project {
    fn from_row(row: &Row<'_>) -> Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            life_task_id: row.get(1)?,
            title: row.get(2)?,
            description: row.get(3)?,
            deadline: row.get(4)?,
            is_completed: row.get(5)?,
            completed_at: row.get(6)?,
            xp_reward: row.get(7)?,
            created_at: row.get(8)?,
        })
    }

    pub fn create(conn: &Connection, new: &NewProject<'_>, created_at: DateTime<Utc>) -> Result<Self> {
        conn.execute(
            "INSERT INTO projects (life_task_id, title, description, deadline, is_completed, completed_at, xp_reward, created_at)
             VALUES (?1, ?2, ?3, ?4, 0, NULL, ?5, ?6)",
            params![
                new.life_task_id,
                new.title,
                new.description,
                new.deadline,
                new.xp_reward,
                created_at,
            ],
        )?;
        Ok(Self {
            id: conn.last_insert_rowid(),
            life_task_id: new.life_task_id,
            title: new.title.to_string(),
            description: new.description.to_string(),
            deadline: new.deadline,
            is_completed: false,
            completed_at: None,
            xp_reward: new.xp_reward,
            created_at,
        })
    }

    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM projects WHERE id = ?1"),
            params![id],
            Self::from_row,
        )
        .optional()
    }

    /// Newest first.
    pub fn find_for_life_task(conn: &Connection, life_task_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM projects WHERE life_task_id = ?1 ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt.query_map(params![life_task_id], Self::from_row)?;
        rows.collect()
    }

    /// Mark the project completed. Returns true only on the false->true
    /// transition; completing twice leaves the first timestamp in place.
    pub fn complete(conn: &Connection, id: i64, completed_at: DateTime<Utc>) -> Result<bool> {
        let changed = conn.execute(
            "UPDATE projects SET is_completed = 1, completed_at = ?1 WHERE id = ?2 AND is_completed = 0",
            params![completed_at, id],
        )?;
        Ok(changed > 0)
    }

    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let changed = conn.execute("DELETE FROM projects WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}
