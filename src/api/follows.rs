use super::{ApiError, ApiResult, AppState};
use crate::follows::FollowService;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct FollowRequest {
    pub follower_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FollowingStatusParams {
    follower: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct FollowingStatusResponse {
    following: bool,
}

pub(crate) async fn follow_user(
    State(state): State<AppState>,
    Path(followee_id): Path<String>,
    Json(payload): Json<FollowRequest>,
) -> Result<StatusCode, ApiError> {
    FollowService::new(state.database.clone()).follow(&payload.follower_id, &followee_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn unfollow_user(
    State(state): State<AppState>,
    Path(followee_id): Path<String>,
    Json(payload): Json<FollowRequest>,
) -> Result<StatusCode, ApiError> {
    FollowService::new(state.database.clone()).unfollow(&payload.follower_id, &followee_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn following_status(
    State(state): State<AppState>,
    Path(followee_id): Path<String>,
    Query(params): Query<FollowingStatusParams>,
) -> ApiResult<FollowingStatusResponse> {
    let following =
        FollowService::new(state.database.clone()).is_following(&params.follower, &followee_id)?;
    Ok(Json(FollowingStatusResponse { following }))
}

pub(crate) async fn list_followers(
    State(state): State<AppState>,
    Path(followee_id): Path<String>,
) -> ApiResult<Vec<String>> {
    let followers = FollowService::new(state.database.clone()).followers(&followee_id)?;
    Ok(Json(followers))
}
