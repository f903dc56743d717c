use super::{ApiResult, AppState};
use crate::database::models::GroupRecord;
use crate::database::repositories::GroupRepository;
use axum::extract::State;
use axum::Json;

pub(crate) async fn list_groups(State(state): State<AppState>) -> ApiResult<Vec<GroupRecord>> {
    let groups = state
        .database
        .with_repositories(|repos| repos.groups().list())?;
    Ok(Json(groups))
}
