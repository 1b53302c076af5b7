use super::{fail, DashboardResponse, DomainOption, LifeTaskResponse, SetLifeTaskRequest, UserResponse};
use crate::models::Domain;
use crate::progress::ProgressManager;

pub fn create_user(manager: &ProgressManager, name: &str) -> Result<UserResponse, String> {
    let user = manager.create_user(name).map_err(fail("create user"))?;
    Ok(user.into())
}

pub fn get_current_user(manager: &ProgressManager) -> Result<Option<UserResponse>, String> {
    let user = manager.current_user().map_err(fail("load user"))?;
    Ok(user.map(UserResponse::from))
}

pub fn get_domains() -> Vec<DomainOption> {
    Domain::ALL
        .iter()
        .map(|&d| DomainOption { id: d, label: d.label() })
        .collect()
}

pub fn set_life_task(manager: &ProgressManager, request: &SetLifeTaskRequest) -> Result<LifeTaskResponse, String> {
    let task = manager
        .set_life_task(request.user_id, request.domain, &request.custom_name)
        .map_err(fail("set life task"))?;
    Ok(task.into())
}

pub fn get_life_task(manager: &ProgressManager, user_id: i64) -> Result<Option<LifeTaskResponse>, String> {
    let task = manager.life_task_for_user(user_id).map_err(fail("load life task"))?;
    Ok(task.map(LifeTaskResponse::from))
}

pub fn complete_onboarding(manager: &ProgressManager, user_id: i64) -> Result<(), String> {
    manager.complete_onboarding(user_id).map_err(fail("complete onboarding"))
}

pub fn get_dashboard(manager: &ProgressManager, life_task_id: i64) -> Result<DashboardResponse, String> {
    let dashboard = manager.dashboard(life_task_id).map_err(fail("load dashboard"))?;
    Ok(dashboard.into())
}
