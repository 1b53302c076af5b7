use crate::mastery::keys::{self, MASTERY_KEYS};
use crate::mastery::{MasteryKey, PhaseProgress};
use crate::models::{LifeTask, MasteryProgress, PracticeSession};
use chrono::NaiveDate;

/// Snapshot of a life task for the home screen.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub life_task: LifeTask,
    pub progress: MasteryProgress,
    pub phase_progress: PhaseProgress,
    pub today_sessions: Vec<PracticeSession>,
    pub today_minutes: i64,
    /// Stored current streak, or 0 if the last practice day was before yesterday.
    pub active_streak: u32,
    /// `None` once every key is unlocked.
    pub next_key: Option<&'static MasteryKey>,
    pub next_key_percent: u8,
    /// In unlock order.
    pub unlocked_keys: Vec<&'static MasteryKey>,
    pub locked_keys: Vec<&'static MasteryKey>,
}

impl Dashboard {
    pub(super) fn build(
        life_task: LifeTask,
        progress: MasteryProgress,
        today_sessions: Vec<PracticeSession>,
        last_practiced: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        let today_minutes = today_sessions.iter().map(|s| s.duration_minutes).sum();
        let unlocked = &progress.unlocked_key_ids;
        let next_key = keys::next_locked(MASTERY_KEYS, unlocked);

        let unlocked_keys = unlocked.iter().filter_map(|id| keys::find_key(id)).collect();
        let locked_keys = MASTERY_KEYS
            .iter()
            .filter(|k| !unlocked.iter().any(|id| id == k.id))
            .collect();

        Self {
            active_streak: progress.streak.current_as_of(last_practiced, today),
            phase_progress: PhaseProgress::for_minutes(life_task.total_minutes),
            next_key_percent: keys::progress_towards(next_key, life_task.total_minutes),
            life_task,
            progress,
            today_sessions,
            today_minutes,
            next_key,
            unlocked_keys,
            locked_keys,
        }
    }
}
