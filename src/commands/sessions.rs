use super::{fail, LogSessionRequest, LogSessionResponse, ProgressResponse, SessionResponse};
use crate::progress::{ProgressManager, SessionInput};

pub fn log_session(manager: &ProgressManager, request: LogSessionRequest) -> Result<LogSessionResponse, String> {
    let input = SessionInput {
        duration_minutes: request.duration_minutes,
        quality: request.quality,
        session_type: request.session_type,
        notes: request.notes,
    };
    let outcome = manager
        .log_session(request.life_task_id, &input)
        .map_err(fail("log session"))?;
    Ok(outcome.into())
}

pub fn get_sessions(manager: &ProgressManager, life_task_id: i64) -> Result<Vec<SessionResponse>, String> {
    let sessions = manager.sessions(life_task_id).map_err(fail("load sessions"))?;
    Ok(sessions.into_iter().map(SessionResponse::from).collect())
}

pub fn delete_session(manager: &ProgressManager, session_id: i64) -> Result<ProgressResponse, String> {
    let progress = manager.delete_session(session_id).map_err(fail("delete session"))?;
    Ok(progress.into())
}

pub fn get_progress(manager: &ProgressManager, life_task_id: i64) -> Result<ProgressResponse, String> {
    let progress = manager.progress(life_task_id).map_err(fail("load progress"))?;
    Ok(progress.into())
}

pub fn recalculate_progress(manager: &ProgressManager, life_task_id: i64) -> Result<ProgressResponse, String> {
    let progress = manager.recalculate(life_task_id).map_err(fail("recalculate progress"))?;
    Ok(progress.into())
}
