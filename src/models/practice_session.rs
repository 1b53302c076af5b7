use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    /// Focused, intentional practice at your edge
    Deliberate,
    /// Studying masters, watching, analyzing
    Observational,
    /// General exposure, casual engagement
    Passive,
}

impl SessionType {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionType::Deliberate => "deliberate",
            SessionType::Observational => "observational",
            SessionType::Passive => "passive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "deliberate" => Some(SessionType::Deliberate),
            "observational" => Some(SessionType::Observational),
            "passive" => Some(SessionType::Passive),
            _ => None,
        }
    }
}

impl ToSql for SessionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for SessionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        SessionType::parse(s)
            .ok_or_else(|| FromSqlError::Other(format!("unknown session type '{s}'").into()))
    }
}

/// One logged practice event. Never edited once saved.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeSession {
    pub id: Option<i64>,
    pub life_task_id: i64,
    /// Calendar day the session counts towards.
    pub date: NaiveDate,
    pub duration_minutes: i64,
    /// 1-5
    pub quality: u8,
    pub session_type: SessionType,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

const COLUMNS: &str =
    "id, life_task_id, date, duration_minutes, quality, session_type, notes, created_at";

impl PracticeSession {
    pub fn new(
        life_task_id: i64,
        duration_minutes: i64,
        quality: u8,
        session_type: SessionType,
        notes: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            life_task_id,
            date: created_at.date_naive(),
            duration_minutes,
            quality,
            session_type,
            notes: notes.to_string(),
            created_at,
        }
    }

    fn from_row(row: &Row<'_>) -> Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            life_task_id: row.get(1)?,
            date: row.get(2)?,
            duration_minutes: row.get(3)?,
            quality: row.get(4)?,
            session_type: row.get(5)?,
            notes: row.get(6)?,
            created_at: row.get(7)?,
        })
    }

    pub fn save(&mut self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT INTO practice_sessions (life_task_id, date, duration_minutes, quality, session_type, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                self.life_task_id,
                self.date,
                self.duration_minutes,
                self.quality,
                self.session_type,
                self.notes,
                self.created_at,
            ],
        )?;
        self.id = Some(conn.last_insert_rowid());
        Ok(())
    }

    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM practice_sessions WHERE id = ?1"),
            params![id],
            Self::from_row,
        )
        .optional()
    }

    /// All sessions for a life task, newest first.
    pub fn find_for_life_task(conn: &Connection, life_task_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM practice_sessions
             WHERE life_task_id = ?1 ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt.query_map(params![life_task_id], Self::from_row)?;
        rows.collect()
    }

    pub fn find_on_date(conn: &Connection, life_task_id: i64, date: NaiveDate) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM practice_sessions
             WHERE life_task_id = ?1 AND date = ?2 ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt.query_map(params![life_task_id, date], Self::from_row)?;
        rows.collect()
    }

    /// Most recent practice day, if any.
    pub fn last_practiced(conn: &Connection, life_task_id: i64) -> Result<Option<NaiveDate>> {
        conn.query_row(
            "SELECT MAX(date) FROM practice_sessions WHERE life_task_id = ?1",
            params![life_task_id],
            |row| row.get(0),
        )
    }

    /// Removes a session. Cumulative minutes on the life task are not refunded.
    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let changed = conn.execute("DELETE FROM practice_sessions WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fixed_now, seed_life_task, setup_test_db};
    use chrono::Duration;

    #[test]
    fn test_new_stamps_date_from_created_at() {
        let session = PracticeSession::new(1, 45, 4, SessionType::Deliberate, "scales", fixed_now());
        assert!(session.id.is_none());
        assert_eq!(session.date, fixed_now().date_naive());
    }

    #[test]
    fn test_save_assigns_id() {
        let (db, _dir) = setup_test_db();
        let task = seed_life_task(db.connection());

        let mut session = PracticeSession::new(task.id, 30, 3, SessionType::Passive, "", fixed_now());
        session.save(db.connection()).unwrap();
        assert!(session.id.is_some());
    }

    #[test]
    fn test_find_for_life_task_newest_first() {
        let (db, _dir) = setup_test_db();
        let conn = db.connection();
        let task = seed_life_task(conn);

        let mut older = PracticeSession::new(task.id, 30, 3, SessionType::Passive, "older", fixed_now() - Duration::days(1));
        older.save(conn).unwrap();
        let mut newer = PracticeSession::new(task.id, 60, 5, SessionType::Observational, "newer", fixed_now());
        newer.save(conn).unwrap();

        let found = PracticeSession::find_for_life_task(conn, task.id).unwrap();
        assert_eq!(found, vec![newer, older]);
    }

    #[test]
    fn test_find_on_date() {
        let (db, _dir) = setup_test_db();
        let conn = db.connection();
        let task = seed_life_task(conn);

        let mut yesterday = PracticeSession::new(task.id, 30, 3, SessionType::Passive, "", fixed_now() - Duration::days(1));
        yesterday.save(conn).unwrap();
        let mut today = PracticeSession::new(task.id, 20, 3, SessionType::Deliberate, "", fixed_now());
        today.save(conn).unwrap();

        let found = PracticeSession::find_on_date(conn, task.id, fixed_now().date_naive()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].duration_minutes, 20);
    }

    #[test]
    fn test_last_practiced() {
        let (db, _dir) = setup_test_db();
        let conn = db.connection();
        let task = seed_life_task(conn);
        assert_eq!(PracticeSession::last_practiced(conn, task.id).unwrap(), None);

        let mut today = PracticeSession::new(task.id, 20, 3, SessionType::Deliberate, "", fixed_now());
        today.save(conn).unwrap();
        let mut earlier = PracticeSession::new(task.id, 30, 3, SessionType::Passive, "", fixed_now() - Duration::days(4));
        earlier.save(conn).unwrap();

        assert_eq!(
            PracticeSession::last_practiced(conn, task.id).unwrap(),
            Some(fixed_now().date_naive())
        );
    }

    #[test]
    fn test_save_rejects_out_of_range_quality() {
        let (db, _dir) = setup_test_db();
        let task = seed_life_task(db.connection());

        let mut session = PracticeSession::new(task.id, 30, 9, SessionType::Passive, "", fixed_now());
        assert!(session.save(db.connection()).is_err());
    }

    #[test]
    fn test_save_for_unknown_life_task_fails() {
        let (db, _dir) = setup_test_db();
        let mut session = PracticeSession::new(404, 30, 3, SessionType::Passive, "", fixed_now());
        let err = session.save(db.connection()).unwrap_err();
        assert!(crate::error::is_fk_violation(&err));
    }

    #[test]
    fn test_delete() {
        let (db, _dir) = setup_test_db();
        let conn = db.connection();
        let task = seed_life_task(conn);

        let mut session = PracticeSession::new(task.id, 30, 3, SessionType::Passive, "", fixed_now());
        session.save(conn).unwrap();

        let found = PracticeSession::find_by_id(conn, session.id.unwrap()).unwrap();
        assert_eq!(found, Some(session.clone()));

        assert!(PracticeSession::delete(conn, session.id.unwrap()).unwrap());
        assert!(!PracticeSession::delete(conn, session.id.unwrap()).unwrap());
        assert!(PracticeSession::find_for_life_task(conn, task.id).unwrap().is_empty());
    }

    #[test]
    fn test_session_type_parse() {
        assert_eq!(SessionType::parse("observational"), Some(SessionType::Observational));
        assert_eq!(SessionType::parse("lazy"), None);
    }
}
