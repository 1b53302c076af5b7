use crate::mastery::{AttributeScores, Streak};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

/// Derived state for one life task. Created alongside the life task and only
/// written by the progress manager.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MasteryProgress {
    pub life_task_id: i64,
    pub scores: AttributeScores,
    pub streak: Streak,
    /// Never decreases.
    pub total_xp: i64,
    /// Grows only; insertion order is unlock order.
    pub unlocked_key_ids: Vec<String>,
}

const COLUMNS: &str = "life_task_id, focus, discipline, creativity, intuition, social_intelligence,
     current_streak, longest_streak, total_xp, unlocked_key_ids";

impl MasteryProgress {
    fn from_row(row: &Row<'_>) -> Result<Self> {
        let unlocked: String = row.get(9)?;
        let unlocked_key_ids = serde_json::from_str(&unlocked)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(9, Type::Text, Box::new(e)))?;

        Ok(Self {
            life_task_id: row.get(0)?,
            scores: AttributeScores {
                focus: row.get(1)?,
                discipline: row.get(2)?,
                creativity: row.get(3)?,
                intuition: row.get(4)?,
                social_intelligence: row.get(5)?,
            },
            streak: Streak {
                current: row.get(6)?,
                longest: row.get(7)?,
            },
            total_xp: row.get(8)?,
            unlocked_key_ids,
        })
    }

    /// Insert a zeroed record if none exists yet.
    pub fn ensure(conn: &Connection, life_task_id: i64) -> Result<()> {
        conn.execute(
            "INSERT OR IGNORE INTO mastery_progress (life_task_id) VALUES (?1)",
            params![life_task_id],
        )?;
        Ok(())
    }

    pub fn find_for_life_task(conn: &Connection, life_task_id: i64) -> Result<Option<Self>> {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM mastery_progress WHERE life_task_id = ?1"),
            params![life_task_id],
            Self::from_row,
        )
        .optional()
    }

    /// Overwrite the attribute scores and streaks.
    pub fn save_derived(
        conn: &Connection,
        life_task_id: i64,
        scores: &AttributeScores,
        streak: &Streak,
    ) -> Result<bool> {
        let changed = conn.execute(
            "UPDATE mastery_progress SET
                focus = ?1, discipline = ?2, creativity = ?3,
                intuition = ?4, social_intelligence = ?5,
                current_streak = ?6, longest_streak = ?7
             WHERE life_task_id = ?8",
            params![
                scores.focus,
                scores.discipline,
                scores.creativity,
                scores.intuition,
                scores.social_intelligence,
                streak.current,
                streak.longest.max(streak.current),
                life_task_id,
            ],
        )?;
        Ok(changed > 0)
    }

    /// Add to total XP. Negative amounts are ignored.
    pub fn add_xp(conn: &Connection, life_task_id: i64, amount: i64) -> Result<bool> {
        let changed = conn.execute(
            "UPDATE mastery_progress SET total_xp = total_xp + ?1 WHERE life_task_id = ?2",
            params![amount.max(0), life_task_id],
        )?;
        Ok(changed > 0)
    }

    /// Persist the full unlocked set. Callers pass the union of the stored
    /// ids and the newly unlocked ones.
    pub fn save_unlocked_keys(conn: &Connection, life_task_id: i64, key_ids: &[String]) -> Result<bool> {
        let json = serde_json::to_string(key_ids)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
        let changed = conn.execute(
            "UPDATE mastery_progress SET unlocked_key_ids = ?1 WHERE life_task_id = ?2",
            params![json, life_task_id],
        )?;
        Ok(changed > 0)
    }
}
