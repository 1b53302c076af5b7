pub mod user;
pub mod life_task;
pub mod practice_session;
pub mod project;
pub mod mentor;
pub mod mastery_progress;

pub use user::User;
pub use life_task::{Domain, LifeTask};
pub use practice_session::{PracticeSession, SessionType};
pub use project::{NewProject, Project};
pub use mentor::{HistoricalMentor, Mentor, NewMentor, HISTORICAL_MENTORS};
pub use mastery_progress::MasteryProgress;
