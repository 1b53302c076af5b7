//! The progress manager: every workflow that writes to the store goes
//! through here, and it is the only writer of `MasteryProgress`.

mod dashboard;

pub use dashboard::Dashboard;

use crate::clock::{Clock, SystemClock};
use crate::constants::{PROJECT_XP_MAX, PROJECT_XP_MIN};
use crate::db::{lock_database, with_connection, Database};
use crate::error::AppError;
use crate::mastery::keys::{self, MASTERY_KEYS};
use crate::mastery::{session_xp, AttributeScores, MasteryKey, MentorSummary, Phase, Streak};
use crate::models::mentor::find_historical;
use crate::models::{
    Domain, LifeTask, MasteryProgress, Mentor, NewMentor, NewProject, PracticeSession, Project,
    SessionType, User,
};
use crate::reward::{RandomReward, RewardSource};
use crate::validation::{validate_duration_minutes, validate_name, validate_notes, validate_rating};
use chrono::NaiveDate;
use log::info;
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

/// What the user entered when logging a session.
#[derive(Debug, Clone)]
pub struct SessionInput {
    pub duration_minutes: i64,
    pub quality: u8,
    pub session_type: SessionType,
    pub notes: String,
}

/// Result of logging a session.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub session: PracticeSession,
    pub life_task: LifeTask,
    pub progress: MasteryProgress,
    /// Keys crossed by this session, in catalogue order. Empty most of the time.
    pub newly_unlocked: Vec<&'static MasteryKey>,
    pub xp_awarded: i64,
    pub previous_phase: Phase,
}

impl SessionOutcome {
    pub fn phase_changed(&self) -> bool {
        self.previous_phase != self.life_task.phase
    }
}

#[derive(Debug, Clone)]
pub struct ProjectCompletion {
    pub project: Project,
    /// 0 when the project was already completed.
    pub xp_awarded: i64,
}

pub struct ProgressManager {
    db: Arc<Mutex<Database>>,
    clock: Arc<dyn Clock>,
    rewards: Arc<dyn RewardSource>,
}

impl ProgressManager {
    pub fn new(db: Arc<Mutex<Database>>) -> Self {
        Self::with_capabilities(db, Arc::new(SystemClock), Arc::new(RandomReward))
    }

    pub fn with_capabilities(
        db: Arc<Mutex<Database>>,
        clock: Arc<dyn Clock>,
        rewards: Arc<dyn RewardSource>,
    ) -> Self {
        Self { db, clock, rewards }
    }

    fn lock_db(&self, operation: &str) -> MutexGuard<'_, Database> {
        lock_database(&self.db, operation)
    }

    // ── Onboarding ──────────────────────────────────────────────────

    pub fn create_user(&self, name: &str) -> Result<User, AppError> {
        let name = validate_name("name", name)?;
        let db = self.lock_db("create user");
        let user = User::create(db.connection(), name, self.clock.now())?;
        info!("Created user {}", user.id);
        Ok(user)
    }

    pub fn current_user(&self) -> Result<Option<User>, AppError> {
        with_connection(&self.db, "load user", |conn| Ok(User::find_first(conn)?))
    }

    /// Create the user's life task along with its zeroed progress record.
    pub fn set_life_task(&self, user_id: i64, domain: Domain, custom_name: &str) -> Result<LifeTask, AppError> {
        let custom_name = validate_name("custom_name", custom_name)?;
        let db = self.lock_db("set life task");
        let conn = db.connection();

        if User::find_by_id(conn, user_id)?.is_none() {
            return Err(AppError::not_found("User"));
        }

        let task = LifeTask::create(conn, user_id, domain, custom_name, self.clock.now())?;
        info!("Created life task {} ({}) for user {user_id}", task.id, domain.as_str());
        Ok(task)
    }

    pub fn complete_onboarding(&self, user_id: i64) -> Result<(), AppError> {
        let db = self.lock_db("complete onboarding");
        if !User::complete_onboarding(db.connection(), user_id)? {
            return Err(AppError::not_found("User"));
        }
        Ok(())
    }

    pub fn life_task_for_user(&self, user_id: i64) -> Result<Option<LifeTask>, AppError> {
        with_connection(&self.db, "load life task", |conn| {
            Ok(LifeTask::find_for_user(conn, user_id)?)
        })
    }

    pub fn life_task(&self, life_task_id: i64) -> Result<LifeTask, AppError> {
        with_connection(&self.db, "load life task", |conn| find_life_task(conn, life_task_id))
    }

    // ── Practice sessions ───────────────────────────────────────────

    /// Log a practice session and apply its side effects in order:
    ///
    /// 1. persist the session
    /// 2. add its minutes to the life task and re-derive the phase
    /// 3. recompute streaks and attributes from the full history
    /// 4. unlock any keys the new total reaches
    /// 5. award session XP
    ///
    /// Each step is its own write. A failure part way through is returned
    /// as-is and earlier steps stay applied.
    pub fn log_session(&self, life_task_id: i64, input: &SessionInput) -> Result<SessionOutcome, AppError> {
        let duration = validate_duration_minutes(input.duration_minutes)?;
        let quality = validate_rating("quality", input.quality)?;
        let notes = validate_notes("notes", &input.notes)?;

        let db = self.lock_db("log session");
        let conn = db.connection();

        let task = find_life_task(conn, life_task_id)?;
        let previous_phase = task.phase;

        let mut session =
            PracticeSession::new(task.id, duration, quality, input.session_type, notes, self.clock.now());
        session.save(conn)?;

        let task = LifeTask::add_minutes(conn, task.id, duration)?
            .ok_or(AppError::not_found("Life task"))?;
        if task.phase != previous_phase {
            info!("Life task {} advanced from {previous_phase} to {}", task.id, task.phase);
        }

        recompute_progress(conn, &task, self.clock.today())?;

        let newly_unlocked = unlock_keys(conn, task.id, task.total_minutes)?;

        let xp_awarded = session_xp(duration, quality);
        MasteryProgress::add_xp(conn, task.id, xp_awarded)?;

        let progress = find_progress(conn, task.id)?;
        info!(
            "Logged {duration} min {} session for life task {} (+{xp_awarded} XP, {} key(s) unlocked)",
            input.session_type.as_str(),
            task.id,
            newly_unlocked.len()
        );

        Ok(SessionOutcome {
            session,
            life_task: task,
            progress,
            newly_unlocked,
            xp_awarded,
            previous_phase,
        })
    }

    pub fn sessions(&self, life_task_id: i64) -> Result<Vec<PracticeSession>, AppError> {
        with_connection(&self.db, "load sessions", |conn| {
            Ok(PracticeSession::find_for_life_task(conn, life_task_id)?)
        })
    }

    /// Delete a session and recompute attributes. Minutes stay on the life task.
    pub fn delete_session(&self, session_id: i64) -> Result<MasteryProgress, AppError> {
        let db = self.lock_db("delete session");
        let conn = db.connection();

        let session = PracticeSession::find_by_id(conn, session_id)?
            .ok_or(AppError::not_found("Session"))?;
        PracticeSession::delete(conn, session_id)?;

        let task = find_life_task(conn, session.life_task_id)?;
        recompute_progress(conn, &task, self.clock.today())
    }

    /// Recompute streaks and attributes without logging anything.
    pub fn recalculate(&self, life_task_id: i64) -> Result<MasteryProgress, AppError> {
        let db = self.lock_db("recalculate progress");
        let conn = db.connection();
        let task = find_life_task(conn, life_task_id)?;
        recompute_progress(conn, &task, self.clock.today())
    }

    pub fn progress(&self, life_task_id: i64) -> Result<MasteryProgress, AppError> {
        with_connection(&self.db, "load progress", |conn| find_progress(conn, life_task_id))
    }

    // ── Projects ────────────────────────────────────────────────────

    pub fn add_project(
        &self,
        life_task_id: i64,
        title: &str,
        description: &str,
        deadline: Option<NaiveDate>,
    ) -> Result<Project, AppError> {
        let title = validate_name("title", title)?;
        let description = validate_notes("description", description)?;

        let db = self.lock_db("add project");
        let conn = db.connection();
        find_life_task(conn, life_task_id)?;

        let new = NewProject {
            life_task_id,
            title,
            description,
            deadline,
            xp_reward: self.rewards.roll(PROJECT_XP_MIN..PROJECT_XP_MAX),
        };
        Ok(Project::create(conn, &new, self.clock.now())?)
    }

    pub fn projects(&self, life_task_id: i64) -> Result<Vec<Project>, AppError> {
        with_connection(&self.db, "load projects", |conn| {
            Ok(Project::find_for_life_task(conn, life_task_id)?)
        })
    }

    /// Complete a project and award its XP. Completing twice awards nothing.
    pub fn complete_project(&self, project_id: i64) -> Result<ProjectCompletion, AppError> {
        let db = self.lock_db("complete project");
        let conn = db.connection();

        let project = Project::find_by_id(conn, project_id)?.ok_or(AppError::not_found("Project"))?;
        let xp_awarded = if Project::complete(conn, project_id, self.clock.now())? {
            MasteryProgress::add_xp(conn, project.life_task_id, project.xp_reward)?;
            info!("Completed project {project_id} (+{} XP)", project.xp_reward);
            project.xp_reward
        } else {
            0
        };

        let project = Project::find_by_id(conn, project_id)?.ok_or(AppError::not_found("Project"))?;
        Ok(ProjectCompletion { project, xp_awarded })
    }

    pub fn delete_project(&self, project_id: i64) -> Result<(), AppError> {
        let db = self.lock_db("delete project");
        if !Project::delete(db.connection(), project_id)? {
            return Err(AppError::not_found("Project"));
        }
        Ok(())
    }

    // ── Mentors ─────────────────────────────────────────────────────

    pub fn add_mentor(
        &self,
        life_task_id: i64,
        name: &str,
        domain: &str,
        notes: &str,
    ) -> Result<Mentor, AppError> {
        let name = validate_name("name", name)?;
        let domain = validate_notes("domain", domain)?;
        let notes = validate_notes("notes", notes)?;
        self.insert_mentor(&NewMentor { life_task_id, name, domain, is_historical: false, notes })
    }

    /// Adopt a figure from the curated historical list.
    pub fn add_historical_mentor(&self, life_task_id: i64, name: &str, notes: &str) -> Result<Mentor, AppError> {
        let figure = find_historical(name.trim()).ok_or(AppError::not_found("Historical mentor"))?;
        let notes = validate_notes("notes", notes)?;
        self.insert_mentor(&NewMentor {
            life_task_id,
            name: figure.name,
            domain: figure.domain,
            is_historical: true,
            notes,
        })
    }

    fn insert_mentor(&self, new: &NewMentor<'_>) -> Result<Mentor, AppError> {
        let db = self.lock_db("add mentor");
        let conn = db.connection();
        let task = find_life_task(conn, new.life_task_id)?;

        let mentor = Mentor::create(conn, new, self.clock.now())?;
        recompute_progress(conn, &task, self.clock.today())?;
        Ok(mentor)
    }

    pub fn mentors(&self, life_task_id: i64) -> Result<Vec<Mentor>, AppError> {
        with_connection(&self.db, "load mentors", |conn| {
            Ok(Mentor::find_for_life_task(conn, life_task_id)?)
        })
    }

    pub fn update_mentor_relationship(&self, mentor_id: i64, level: u8) -> Result<Mentor, AppError> {
        let level = validate_rating("relationship_level", level)?;
        let db = self.lock_db("update mentor relationship");
        let conn = db.connection();

        let mut mentor = Mentor::find_by_id(conn, mentor_id)?.ok_or(AppError::not_found("Mentor"))?;
        Mentor::update_relationship(conn, mentor_id, level)?;
        mentor.relationship_level = level;

        let task = find_life_task(conn, mentor.life_task_id)?;
        recompute_progress(conn, &task, self.clock.today())?;
        Ok(mentor)
    }

    pub fn update_mentor_notes(&self, mentor_id: i64, notes: &str) -> Result<(), AppError> {
        let notes = validate_notes("notes", notes)?;
        let db = self.lock_db("update mentor notes");
        if !Mentor::update_notes(db.connection(), mentor_id, notes)? {
            return Err(AppError::not_found("Mentor"));
        }
        Ok(())
    }

    pub fn delete_mentor(&self, mentor_id: i64) -> Result<MasteryProgress, AppError> {
        let db = self.lock_db("delete mentor");
        let conn = db.connection();

        let mentor = Mentor::find_by_id(conn, mentor_id)?.ok_or(AppError::not_found("Mentor"))?;
        Mentor::delete(conn, mentor_id)?;

        let task = find_life_task(conn, mentor.life_task_id)?;
        recompute_progress(conn, &task, self.clock.today())
    }

    // ── Dashboard ───────────────────────────────────────────────────

    pub fn dashboard(&self, life_task_id: i64) -> Result<Dashboard, AppError> {
        let db = self.lock_db("load dashboard");
        let conn = db.connection();

        let task = find_life_task(conn, life_task_id)?;
        let progress = find_progress(conn, life_task_id)?;
        let today = self.clock.today();
        let today_sessions = PracticeSession::find_on_date(conn, life_task_id, today)?;
        let last_practiced = PracticeSession::last_practiced(conn, life_task_id)?;
        Ok(Dashboard::build(task, progress, today_sessions, last_practiced, today))
    }
}

fn find_life_task(conn: &Connection, life_task_id: i64) -> Result<LifeTask, AppError> {
    LifeTask::find_by_id(conn, life_task_id)?.ok_or(AppError::not_found("Life task"))
}

fn find_progress(conn: &Connection, life_task_id: i64) -> Result<MasteryProgress, AppError> {
    MasteryProgress::find_for_life_task(conn, life_task_id)?
        .ok_or(AppError::not_found("Mastery progress"))
}

/// Re-derive streaks and the five attributes from stored sessions and mentors.
fn recompute_progress(conn: &Connection, task: &LifeTask, today: NaiveDate) -> Result<MasteryProgress, AppError> {
    let sessions = PracticeSession::find_for_life_task(conn, task.id)?;
    let mentors = Mentor::find_for_life_task(conn, task.id)?;

    let streak = Streak::from_dates(sessions.iter().map(|s| s.date), today);
    let scores = AttributeScores::compute(
        &sessions,
        streak.current,
        task.total_minutes,
        MentorSummary::from_mentors(&mentors),
    );

    if !MasteryProgress::save_derived(conn, task.id, &scores, &streak)? {
        return Err(AppError::not_found("Mastery progress"));
    }
    find_progress(conn, task.id)
}

/// Persist the union of stored and newly reached keys; return the new ones.
fn unlock_keys(conn: &Connection, life_task_id: i64, total_minutes: i64) -> Result<Vec<&'static MasteryKey>, AppError> {
    let progress = find_progress(conn, life_task_id)?;
    let new_keys = keys::newly_unlocked(MASTERY_KEYS, &progress.unlocked_key_ids, total_minutes);

    if !new_keys.is_empty() {
        let merged = keys::merge_unlocked(&progress.unlocked_key_ids, &new_keys);
        MasteryProgress::save_unlocked_keys(conn, life_task_id, &merged)?;
        for key in &new_keys {
            info!("Life task {life_task_id} unlocked mastery key {} ({})", key.id, key.title);
        }
    }

    Ok(new_keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::reward::FixedReward;
    use crate::test_utils::{fixed_clock, seed_life_task, setup_test_db};
    use tempfile::TempDir;

    fn setup() -> (Arc<Mutex<Database>>, LifeTask, TempDir) {
        let (db, dir) = setup_test_db();
        let task = seed_life_task(db.connection());
        (Arc::new(Mutex::new(db)), task, dir)
    }

    fn manager_with_clock(db: &Arc<Mutex<Database>>, clock: FixedClock) -> ProgressManager {
        ProgressManager::with_capabilities(Arc::clone(db), Arc::new(clock), Arc::new(FixedReward(180)))
    }

    fn manager(db: &Arc<Mutex<Database>>) -> ProgressManager {
        manager_with_clock(db, fixed_clock())
    }

    fn input(duration_minutes: i64, quality: u8, session_type: SessionType) -> SessionInput {
        SessionInput {
            duration_minutes,
            quality,
            session_type,
            notes: String::new(),
        }
    }

    #[test]
    fn test_log_first_session() {
        let (db, task, _dir) = setup();
        let manager = manager(&db);

        let outcome = manager
            .log_session(task.id, &input(45, 4, SessionType::Deliberate))
            .unwrap();

        assert!(outcome.session.id.is_some());
        assert_eq!(outcome.session.date, fixed_clock().today());
        assert_eq!(outcome.life_task.total_minutes, 45);
        assert_eq!(outcome.xp_awarded, 72);
        assert_eq!(outcome.progress.total_xp, 72);
        assert_eq!(outcome.progress.scores.focus, 80);
        assert_eq!(outcome.progress.scores.discipline, 3);
        assert_eq!(outcome.progress.streak, Streak { current: 1, longest: 1 });
        assert!(outcome.newly_unlocked.is_empty());
        assert!(!outcome.phase_changed());
    }

    #[test]
    fn test_second_session_unlocks_first_key() {
        let (db, task, _dir) = setup();
        let manager = manager(&db);

        manager.log_session(task.id, &input(45, 4, SessionType::Deliberate)).unwrap();
        let outcome = manager
            .log_session(task.id, &input(30, 3, SessionType::Observational))
            .unwrap();

        assert_eq!(outcome.life_task.total_minutes, 75);
        assert_eq!(outcome.newly_unlocked.iter().map(|k| k.id).collect::<Vec<_>>(), vec!["mk_1"]);
        assert_eq!(outcome.progress.unlocked_key_ids, vec!["mk_1".to_string()]);
        assert_eq!(outcome.progress.scores.creativity, 100);
        assert_eq!(outcome.progress.scores.focus, 80);
        assert_eq!(outcome.progress.total_xp, 72 + 36);
    }

    #[test]
    fn test_keys_unlock_once() {
        let (db, task, _dir) = setup();
        let manager = manager(&db);

        let first = manager.log_session(task.id, &input(90, 3, SessionType::Passive)).unwrap();
        assert_eq!(first.newly_unlocked.len(), 1);

        let second = manager.log_session(task.id, &input(10, 3, SessionType::Passive)).unwrap();
        assert!(second.newly_unlocked.is_empty());
        assert_eq!(second.progress.unlocked_key_ids, vec!["mk_1".to_string()]);
    }

    #[test]
    fn test_one_session_can_unlock_several_keys() {
        let (db, task, _dir) = setup();
        let manager = manager(&db);

        let outcome = manager.log_session(task.id, &input(700, 3, SessionType::Deliberate)).unwrap();
        assert_eq!(
            outcome.newly_unlocked.iter().map(|k| k.id).collect::<Vec<_>>(),
            vec!["mk_1", "mk_2", "mk_3"]
        );
    }

    #[test]
    fn test_log_session_unknown_life_task() {
        let (db, _task, _dir) = setup();
        let err = manager(&db)
            .log_session(999, &input(30, 3, SessionType::Deliberate))
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity: "Life task" }));
    }

    #[test]
    fn test_log_session_rejects_invalid_input_without_writing() {
        let (db, task, _dir) = setup();
        let manager = manager(&db);

        let err = manager.log_session(task.id, &input(30, 0, SessionType::Deliberate)).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput { field: "quality", .. }));

        let err = manager.log_session(task.id, &input(0, 3, SessionType::Deliberate)).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput { field: "duration_minutes", .. }));

        assert!(manager.sessions(task.id).unwrap().is_empty());
        assert_eq!(manager.life_task(task.id).unwrap().total_minutes, 0);
    }

    #[test]
    fn test_streak_across_days() {
        let (db, task, _dir) = setup();
        let yesterday = manager_with_clock(&db, FixedClock::on(2024, 6, 14).unwrap());
        let today = manager_with_clock(&db, FixedClock::on(2024, 6, 15).unwrap());

        yesterday.log_session(task.id, &input(30, 3, SessionType::Deliberate)).unwrap();
        let outcome = today.log_session(task.id, &input(30, 3, SessionType::Deliberate)).unwrap();

        assert_eq!(outcome.progress.streak, Streak { current: 2, longest: 2 });
        assert_eq!(outcome.progress.scores.discipline, 7);
    }

    #[test]
    fn test_phase_advances_to_creative() {
        let (db, task, _dir) = setup();
        let manager = manager(&db);

        for _ in 0..20 {
            let outcome = manager.log_session(task.id, &input(1440, 3, SessionType::Deliberate)).unwrap();
            assert!(!outcome.phase_changed());
        }
        let outcome = manager.log_session(task.id, &input(1440, 3, SessionType::Deliberate)).unwrap();

        assert_eq!(outcome.life_task.total_minutes, 30_240);
        assert_eq!(outcome.previous_phase, Phase::Apprentice);
        assert_eq!(outcome.life_task.phase, Phase::Creative);
        assert!(outcome.phase_changed());
        assert_eq!(outcome.progress.unlocked_key_ids.len(), 8);
        assert_eq!(outcome.progress.scores.intuition, 0);
    }

    #[test]
    fn test_recalculate_without_sessions() {
        let (db, task, _dir) = setup();
        let progress = manager(&db).recalculate(task.id).unwrap();
        assert_eq!(progress.scores, AttributeScores::default());
        assert_eq!(progress.streak, Streak::default());
    }

    #[test]
    fn test_delete_session_recalculates_but_keeps_minutes() {
        let (db, task, _dir) = setup();
        let manager = manager(&db);

        let deliberate = manager.log_session(task.id, &input(40, 4, SessionType::Deliberate)).unwrap();
        manager.log_session(task.id, &input(20, 2, SessionType::Passive)).unwrap();

        let session_id = deliberate.session.id.unwrap();
        let progress = manager.delete_session(session_id).unwrap();

        assert_eq!(progress.scores.focus, 0);
        assert_eq!(progress.streak.current, 1);
        assert_eq!(manager.life_task(task.id).unwrap().total_minutes, 60);
        assert_eq!(manager.sessions(task.id).unwrap().len(), 1);

        let err = manager.delete_session(session_id).unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity: "Session" }));
    }

    #[test]
    fn test_mentor_changes_update_social_intelligence() {
        let (db, task, _dir) = setup();
        let manager = manager(&db);

        let mentor = manager.add_mentor(task.id, "Mrs. Lee", "Guitar", "").unwrap();
        assert_eq!(manager.progress(task.id).unwrap().scores.social_intelligence, 20);

        let mentor = manager.update_mentor_relationship(mentor.id, 5).unwrap();
        assert_eq!(mentor.relationship_level, 5);
        assert_eq!(manager.progress(task.id).unwrap().scores.social_intelligence, 60);

        let progress = manager.delete_mentor(mentor.id).unwrap();
        assert_eq!(progress.scores.social_intelligence, 0);
    }

    #[test]
    fn test_update_relationship_validates_level() {
        let (db, task, _dir) = setup();
        let manager = manager(&db);
        let mentor = manager.add_mentor(task.id, "Mrs. Lee", "", "").unwrap();

        let err = manager.update_mentor_relationship(mentor.id, 6).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput { field: "relationship_level", .. }));

        let err = manager.update_mentor_relationship(999, 3).unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity: "Mentor" }));
    }

    #[test]
    fn test_add_historical_mentor() {
        let (db, task, _dir) = setup();
        let manager = manager(&db);

        let mentor = manager.add_historical_mentor(task.id, "John Coltrane", "Giant Steps").unwrap();
        assert!(mentor.is_historical);
        assert_eq!(mentor.domain, "Music");
        assert_eq!(mentor.relationship_level, 1);

        let err = manager.add_historical_mentor(task.id, "Nobody", "").unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity: "Historical mentor" }));
    }

    #[test]
    fn test_update_mentor_notes() {
        let (db, task, _dir) = setup();
        let manager = manager(&db);
        let mentor = manager.add_mentor(task.id, "Mrs. Lee", "", "").unwrap();

        manager.update_mentor_notes(mentor.id, "Weekly lessons").unwrap();
        assert_eq!(manager.mentors(task.id).unwrap()[0].notes, "Weekly lessons");
        assert!(manager.update_mentor_notes(999, "x").is_err());
    }

    #[test]
    fn test_project_reward_awarded_once() {
        let (db, task, _dir) = setup();
        let manager = manager(&db);

        let project = manager.add_project(task.id, "Record an EP", "", None).unwrap();
        assert_eq!(project.xp_reward, 180);
        assert!(!project.is_completed);

        let first = manager.complete_project(project.id).unwrap();
        assert_eq!(first.xp_awarded, 180);
        assert!(first.project.is_completed);
        assert!(first.project.completed_at.is_some());

        let second = manager.complete_project(project.id).unwrap();
        assert_eq!(second.xp_awarded, 0);
        assert_eq!(second.project.completed_at, first.project.completed_at);
        assert_eq!(manager.progress(task.id).unwrap().total_xp, 180);
    }

    #[test]
    fn test_project_reward_is_within_range() {
        let (db, task, _dir) = setup();
        let manager = ProgressManager::new(Arc::clone(&db));

        for _ in 0..20 {
            let project = manager.add_project(task.id, "Etude", "", None).unwrap();
            assert!((PROJECT_XP_MIN..PROJECT_XP_MAX).contains(&project.xp_reward));
        }
    }

    #[test]
    fn test_delete_project() {
        let (db, task, _dir) = setup();
        let manager = manager(&db);
        let project = manager.add_project(task.id, "Record an EP", "", None).unwrap();

        manager.delete_project(project.id).unwrap();
        assert!(manager.projects(task.id).unwrap().is_empty());
        assert!(matches!(
            manager.delete_project(project.id).unwrap_err(),
            AppError::NotFound { entity: "Project" }
        ));
    }

    #[test]
    fn test_onboarding_flow() {
        let (db, _dir) = setup_test_db();
        let manager = manager(&Arc::new(Mutex::new(db)));

        assert!(manager.current_user().unwrap().is_none());
        let user = manager.create_user("  Ada  ").unwrap();
        assert_eq!(user.name, "Ada");

        let task = manager.set_life_task(user.id, Domain::Music, "Piano").unwrap();
        assert_eq!(task.phase, Phase::Apprentice);
        assert_eq!(task.total_minutes, 0);

        let progress = manager.progress(task.id).unwrap();
        assert_eq!(progress.total_xp, 0);
        assert!(progress.unlocked_key_ids.is_empty());

        manager.complete_onboarding(user.id).unwrap();
        assert!(manager.current_user().unwrap().unwrap().onboarding_complete);
        assert_eq!(manager.life_task_for_user(user.id).unwrap(), Some(task));
    }

    #[test]
    fn test_set_life_task_requires_user() {
        let (db, _dir) = setup_test_db();
        let manager = manager(&Arc::new(Mutex::new(db)));

        let err = manager.set_life_task(42, Domain::Chess, "Openings").unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity: "User" }));
        assert!(manager.complete_onboarding(42).is_err());
    }

    #[test]
    fn test_dashboard_counts_only_today() {
        let (db, task, _dir) = setup();
        let yesterday = manager_with_clock(&db, FixedClock::on(2024, 6, 14).unwrap());
        let today = manager(&db);

        yesterday.log_session(task.id, &input(50, 3, SessionType::Deliberate)).unwrap();
        today.log_session(task.id, &input(25, 3, SessionType::Deliberate)).unwrap();

        let dash = today.dashboard(task.id).unwrap();
        assert_eq!(dash.today_sessions.len(), 1);
        assert_eq!(dash.today_minutes, 25);
        assert_eq!(dash.life_task.total_minutes, 75);
        assert_eq!(dash.unlocked_keys.len(), 1);
        assert_eq!(dash.next_key.map(|k| k.id), Some("mk_2"));
        assert_eq!(dash.active_streak, 2);
    }
}
