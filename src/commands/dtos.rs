use crate::mastery::{MasteryKey, Phase, PhaseProgress};
use crate::models::{
    Domain, LifeTask, MasteryProgress, Mentor, PracticeSession, Project, SessionType, User,
};
use crate::progress::{Dashboard, ProjectCompletion, SessionOutcome};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ── Requests ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SetLifeTaskRequest {
    pub user_id: i64,
    pub domain: Domain,
    pub custom_name: String,
}

#[derive(Debug, Deserialize)]
pub struct LogSessionRequest {
    pub life_task_id: i64,
    pub duration_minutes: i64,
    pub quality: u8,
    pub session_type: SessionType,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub life_task_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub deadline: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct AddMentorRequest {
    pub life_task_id: i64,
    pub name: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub notes: String,
}

// ── Responses ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub onboarding_complete: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            created_at: user.created_at,
            onboarding_complete: user.onboarding_complete,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DomainOption {
    pub id: Domain,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LifeTaskResponse {
    pub id: i64,
    pub domain: Domain,
    pub domain_label: &'static str,
    pub custom_name: String,
    pub total_minutes: i64,
    pub phase: Phase,
    pub phase_label: &'static str,
    pub started_at: DateTime<Utc>,
}

impl From<LifeTask> for LifeTaskResponse {
    fn from(task: LifeTask) -> Self {
        Self {
            id: task.id,
            domain: task.domain,
            domain_label: task.domain.label(),
            custom_name: task.custom_name,
            total_minutes: task.total_minutes,
            phase: task.phase,
            phase_label: task.phase.label(),
            started_at: task.started_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: i64,
    pub life_task_id: i64,
    pub date: NaiveDate,
    pub duration_minutes: i64,
    pub quality: u8,
    pub session_type: SessionType,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl From<PracticeSession> for SessionResponse {
    fn from(session: PracticeSession) -> Self {
        Self {
            id: session.id.unwrap_or(0),
            life_task_id: session.life_task_id,
            date: session.date,
            duration_minutes: session.duration_minutes,
            quality: session.quality,
            session_type: session.session_type,
            notes: session.notes,
            created_at: session.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub focus: u8,
    pub discipline: u8,
    pub creativity: u8,
    pub intuition: u8,
    pub social_intelligence: u8,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_xp: i64,
    pub unlocked_key_ids: Vec<String>,
}

impl From<MasteryProgress> for ProgressResponse {
    fn from(progress: MasteryProgress) -> Self {
        Self {
            focus: progress.scores.focus,
            discipline: progress.scores.discipline,
            creativity: progress.scores.creativity,
            intuition: progress.scores.intuition,
            social_intelligence: progress.scores.social_intelligence,
            current_streak: progress.streak.current,
            longest_streak: progress.streak.longest,
            total_xp: progress.total_xp,
            unlocked_key_ids: progress.unlocked_key_ids,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogSessionResponse {
    pub session: SessionResponse,
    pub life_task: LifeTaskResponse,
    pub progress: ProgressResponse,
    pub xp_awarded: i64,
    pub phase_changed: bool,
    /// Ids of keys this session unlocked, for the reveal animation.
    pub newly_unlocked_key_ids: Vec<&'static str>,
}

impl From<SessionOutcome> for LogSessionResponse {
    fn from(outcome: SessionOutcome) -> Self {
        let phase_changed = outcome.phase_changed();
        Self {
            session: outcome.session.into(),
            life_task: outcome.life_task.into(),
            progress: outcome.progress.into(),
            xp_awarded: outcome.xp_awarded,
            phase_changed,
            newly_unlocked_key_ids: outcome.newly_unlocked.iter().map(|k| k.id).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
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

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            life_task_id: project.life_task_id,
            title: project.title,
            description: project.description,
            deadline: project.deadline,
            is_completed: project.is_completed,
            completed_at: project.completed_at,
            xp_reward: project.xp_reward,
            created_at: project.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompleteProjectResponse {
    pub project: ProjectResponse,
    pub xp_awarded: i64,
}

impl From<ProjectCompletion> for CompleteProjectResponse {
    fn from(completion: ProjectCompletion) -> Self {
        Self {
            project: completion.project.into(),
            xp_awarded: completion.xp_awarded,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MentorResponse {
    pub id: i64,
    pub life_task_id: i64,
    pub name: String,
    pub domain: String,
    pub is_historical: bool,
    pub notes: String,
    pub relationship_level: u8,
    pub created_at: DateTime<Utc>,
}

impl From<Mentor> for MentorResponse {
    fn from(mentor: Mentor) -> Self {
        Self {
            id: mentor.id,
            life_task_id: mentor.life_task_id,
            name: mentor.name,
            domain: mentor.domain,
            is_historical: mentor.is_historical,
            notes: mentor.notes,
            relationship_level: mentor.relationship_level,
            created_at: mentor.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PhaseProgressResponse {
    pub phase: Phase,
    pub phase_label: &'static str,
    pub next_threshold_minutes: Option<i64>,
    pub minutes_remaining: Option<i64>,
    pub percent: u8,
}

impl From<PhaseProgress> for PhaseProgressResponse {
    fn from(progress: PhaseProgress) -> Self {
        Self {
            phase: progress.phase,
            phase_label: progress.phase.label(),
            next_threshold_minutes: progress.next_threshold,
            minutes_remaining: progress.minutes_remaining,
            percent: progress.percent,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub life_task: LifeTaskResponse,
    pub progress: ProgressResponse,
    pub phase_progress: PhaseProgressResponse,
    pub today_sessions: Vec<SessionResponse>,
    pub today_minutes: i64,
    pub next_key: Option<&'static MasteryKey>,
    pub next_key_percent: u8,
    pub unlocked_keys: Vec<&'static MasteryKey>,
    pub locked_keys: Vec<&'static MasteryKey>,
}

impl From<Dashboard> for DashboardResponse {
    fn from(dash: Dashboard) -> Self {
        Self {
            life_task: dash.life_task.into(),
            progress: dash.progress.into(),
            phase_progress: dash.phase_progress.into(),
            today_sessions: dash.today_sessions.into_iter().map(SessionResponse::from).collect(),
            today_minutes: dash.today_minutes,
            next_key: dash.next_key,
            next_key_percent: dash.next_key_percent,
            unlocked_keys: dash.unlocked_keys,
            locked_keys: dash.locked_keys,
        }
    }
}
