use super::{fail, AddMentorRequest, MentorResponse, ProgressResponse};
use crate::models::{HistoricalMentor, HISTORICAL_MENTORS};
use crate::progress::ProgressManager;

pub fn get_historical_mentors() -> &'static [HistoricalMentor] {
    HISTORICAL_MENTORS
}

pub fn add_mentor(manager: &ProgressManager, request: &AddMentorRequest) -> Result<MentorResponse, String> {
    let mentor = manager
        .add_mentor(request.life_task_id, &request.name, &request.domain, &request.notes)
        .map_err(fail("add mentor"))?;
    Ok(mentor.into())
}

pub fn add_historical_mentor(
    manager: &ProgressManager,
    life_task_id: i64,
    name: &str,
) -> Result<MentorResponse, String> {
    let mentor = manager
        .add_historical_mentor(life_task_id, name, "")
        .map_err(fail("add historical mentor"))?;
    Ok(mentor.into())
}

pub fn get_mentors(manager: &ProgressManager, life_task_id: i64) -> Result<Vec<MentorResponse>, String> {
    let mentors = manager.mentors(life_task_id).map_err(fail("load mentors"))?;
    Ok(mentors.into_iter().map(MentorResponse::from).collect())
}

pub fn update_mentor_relationship(
    manager: &ProgressManager,
    mentor_id: i64,
    relationship_level: u8,
) -> Result<MentorResponse, String> {
    let mentor = manager
        .update_mentor_relationship(mentor_id, relationship_level)
        .map_err(fail("update mentor relationship"))?;
    Ok(mentor.into())
}

pub fn update_mentor_notes(manager: &ProgressManager, mentor_id: i64, notes: &str) -> Result<(), String> {
    manager.update_mentor_notes(mentor_id, notes).map_err(fail("update mentor notes"))
}

pub fn delete_mentor(manager: &ProgressManager, mentor_id: i64) -> Result<ProgressResponse, String> {
    let progress = manager.delete_mentor(mentor_id).map_err(fail("delete mentor"))?;
    Ok(progress.into())
}
