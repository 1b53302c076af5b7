use super::{fail, CompleteProjectResponse, CreateProjectRequest, ProjectResponse};
use crate::progress::ProgressManager;

pub fn create_project(manager: &ProgressManager, request: &CreateProjectRequest) -> Result<ProjectResponse, String> {
    let project = manager
        .add_project(request.life_task_id, &request.title, &request.description, request.deadline)
        .map_err(fail("create project"))?;
    Ok(project.into())
}

pub fn get_projects(manager: &ProgressManager, life_task_id: i64) -> Result<Vec<ProjectResponse>, String> {
    let projects = manager.projects(life_task_id).map_err(fail("load projects"))?;
    Ok(projects.into_iter().map(ProjectResponse::from).collect())
}

pub fn complete_project(manager: &ProgressManager, project_id: i64) -> Result<CompleteProjectResponse, String> {
    let completion = manager.complete_project(project_id).map_err(fail("complete project"))?;
    Ok(completion.into())
}

pub fn delete_project(manager: &ProgressManager, project_id: i64) -> Result<(), String> {
    manager.delete_project(project_id).map_err(fail("delete project"))
}
