use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result, Row};
use serde::Serialize;

/// A curated historical figure the user can adopt as a mentor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoricalMentor {
    pub name: &'static str,
    pub domain: &'static str,
}

pub const HISTORICAL_MENTORS: &[HistoricalMentor] = &[
    HistoricalMentor { name: "Leonardo da Vinci", domain: "Art & Science" },
    HistoricalMentor { name: "Benjamin Franklin", domain: "Science & Diplomacy" },
    HistoricalMentor { name: "Charles Darwin", domain: "Natural Science" },
    HistoricalMentor { name: "John Coltrane", domain: "Music" },
    HistoricalMentor { name: "Bobby Fischer", domain: "Chess" },
    HistoricalMentor { name: "Temple Grandin", domain: "Animal Science" },
    HistoricalMentor { name: "Freddie Roach", domain: "Boxing" },
    HistoricalMentor { name: "Martha Graham", domain: "Dance" },
];

pub fn find_historical(name: &str) -> Option<&'static HistoricalMentor> {
    HISTORICAL_MENTORS.iter().find(|m| m.name == name)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mentor {
    pub id: i64,
    pub life_task_id: i64,
    pub name: String,
    pub domain: String,
    pub is_historical: bool,
    pub notes: String,
    /// 1-5, freely adjustable
    pub relationship_level: u8,
    pub created_at: DateTime<Utc>,
}

const COLUMNS: &str =
    "id, life_task_id, name, domain, is_historical, notes, relationship_level, created_at";

/// Relationship level every new mentor starts at.
pub const INITIAL_RELATIONSHIP_LEVEL: u8 = 1;

/// Fields supplied when adding a mentor.
#[derive(Debug, Clone)]
pub struct NewMentor<'a> {
    pub life_task_id: i64,
    pub name: &'a str,
    pub domain: &'a str,
    pub is_historical: bool,
    pub notes: &'a str,
}

impl Mentor {
    fn from_row(row: &Row<'_>) -> Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            life_task_id: row.get(1)?,
            name: row.get(2)?,
            domain: row.get(3)?,
            is_historical: row.get(4)?,
            notes: row.get(5)?,
            relationship_level: row.get(6)?,
            created_at: row.get(7)?,
        })
    }

    pub fn create(conn: &Connection, new: &NewMentor<'_>, created_at: DateTime<Utc>) -> Result<Self> {
        conn.execute(
            "INSERT INTO mentors (life_task_id, name, domain, is_historical, notes, relationship_level, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                new.life_task_id,
                new.name,
                new.domain,
                new.is_historical,
                new.notes,
                INITIAL_RELATIONSHIP_LEVEL,
                created_at,
            ],
        )?;
        Ok(Self {
            id: conn.last_insert_rowid(),
            life_task_id: new.life_task_id,
            name: new.name.to_string(),
            domain: new.domain.to_string(),
            is_historical: new.is_historical,
            notes: new.notes.to_string(),
            relationship_level: INITIAL_RELATIONSHIP_LEVEL,
            created_at,
        })
    }

    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM mentors WHERE id = ?1"),
            params![id],
            Self::from_row,
        )
        .optional()
    }

    /// Newest first.
    pub fn find_for_life_task(conn: &Connection, life_task_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM mentors WHERE life_task_id = ?1 ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt.query_map(params![life_task_id], Self::from_row)?;
        rows.collect()
    }

    pub fn update_relationship(conn: &Connection, id: i64, level: u8) -> Result<bool> {
        let changed = conn.execute(
            "UPDATE mentors SET relationship_level = ?1 WHERE id = ?2",
            params![level, id],
        )?;
        Ok(changed > 0)
    }

    pub fn update_notes(conn: &Connection, id: i64, notes: &str) -> Result<bool> {
        let changed = conn.execute(
            "UPDATE mentors SET notes = ?1 WHERE id = ?2",
            params![notes, id],
        )?;
        Ok(changed > 0)
    }

    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let changed = conn.execute("DELETE FROM mentors WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}
