use crate::mastery::Phase;
use crate::models::MasteryProgress;
use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};
use serde::{Deserialize, Serialize};

/// Broad field the life task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Music,
    Coding,
    Writing,
    Chess,
    MartialArts,
    Art,
    Science,
    Business,
    Language,
    Other,
}

impl Domain {
    pub const ALL: [Domain; 10] = [
        Domain::Music,
        Domain::Coding,
        Domain::Writing,
        Domain::Chess,
        Domain::MartialArts,
        Domain::Art,
        Domain::Science,
        Domain::Business,
        Domain::Language,
        Domain::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Music => "music",
            Domain::Coding => "coding",
            Domain::Writing => "writing",
            Domain::Chess => "chess",
            Domain::MartialArts => "martial_arts",
            Domain::Art => "art",
            Domain::Science => "science",
            Domain::Business => "business",
            Domain::Language => "language",
            Domain::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }

    pub fn label(self) -> &'static str {
        match self {
            Domain::Music => "Music",
            Domain::Coding => "Coding",
            Domain::Writing => "Writing",
            Domain::Chess => "Chess",
            Domain::MartialArts => "Martial Arts",
            Domain::Art => "Visual Art",
            Domain::Science => "Science",
            Domain::Business => "Business",
            Domain::Language => "Language",
            Domain::Other => "Other",
        }
    }
}

impl ToSql for Domain {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Domain {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        Domain::parse(s).ok_or_else(|| FromSqlError::Other(format!("unknown domain '{s}'").into()))
    }
}

/// The craft a user is working towards mastering.
///
/// `phase` is cached: it is always `Phase::for_minutes(total_minutes)` and
/// only [`LifeTask::add_minutes`] writes either column.
#[derive(Debug, Clone, PartialEq)]
pub struct LifeTask {
    pub id: i64,
    pub user_id: i64,
    pub domain: Domain,
    pub custom_name: String,
    pub total_minutes: i64,
    pub phase: Phase,
    pub started_at: DateTime<Utc>,
}

const COLUMNS: &str = "id, user_id, domain, custom_name, total_minutes, phase, started_at";

impl LifeTask {
    fn from_row(row: &Row<'_>) -> Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            user_id: row.get(1)?,
            domain: row.get(2)?,
            custom_name: row.get(3)?,
            total_minutes: row.get(4)?,
            phase: row.get(5)?,
            started_at: row.get(6)?,
        })
    }

    /// Insert the life task together with its zeroed progress record.
    pub fn create(
        conn: &Connection,
        user_id: i64,
        domain: Domain,
        custom_name: &str,
        started_at: DateTime<Utc>,
    ) -> Result<Self> {
        let tx = conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO life_tasks (user_id, domain, custom_name, total_minutes, phase, started_at)
             VALUES (?1, ?2, ?3, 0, ?4, ?5)",
            params![user_id, domain, custom_name, Phase::Apprentice, started_at],
        )?;
        let id = tx.last_insert_rowid();
        MasteryProgress::ensure(&tx, id)?;
        tx.commit()?;

        Ok(Self {
            id,
            user_id,
            domain,
            custom_name: custom_name.to_string(),
            total_minutes: 0,
            phase: Phase::Apprentice,
            started_at,
        })
    }

    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM life_tasks WHERE id = ?1"),
            params![id],
            Self::from_row,
        )
        .optional()
    }

    /// The user's first life task, if they have set one.
    pub fn find_for_user(conn: &Connection, user_id: i64) -> Result<Option<Self>> {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM life_tasks WHERE user_id = ?1 ORDER BY id LIMIT 1"),
            params![user_id],
            Self::from_row,
        )
        .optional()
    }

    /// Add practice minutes and re-derive the phase. Returns the updated
    /// record, or `None` if the life task does not exist.
    pub fn add_minutes(conn: &Connection, id: i64, minutes: i64) -> Result<Option<Self>> {
        let Some(mut task) = Self::find_by_id(conn, id)? else {
            return Ok(None);
        };

        task.total_minutes = task.total_minutes.saturating_add(minutes.max(0));
        task.phase = Phase::for_minutes(task.total_minutes);

        conn.execute(
            "UPDATE life_tasks SET total_minutes = ?1, phase = ?2 WHERE id = ?3",
            params![task.total_minutes, task.phase, id],
        )?;

        Ok(Some(task))
    }

    /// Deletes the life task; sessions, projects, mentors and progress cascade.
    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let changed = conn.execute("DELETE FROM life_tasks WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}
