use super::{ApiError, ApiResult, AppState};
use crate::database::models::{CommentRecord, PostRecord};
use crate::posting::{CreatePostInput, PostService, UpdatePostInput};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct AddCommentRequest {
    pub author_id: String,
    pub text: String,
}

fn post_service(state: &AppState) -> PostService {
    PostService::with_invalidator(state.database.clone(), state.invalidator.clone())
}

pub(crate) async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostInput>,
) -> Result<(StatusCode, Json<PostRecord>), ApiError> {
    let post = post_service(&state).create_post(payload)?;
    Ok((StatusCode::CREATED, Json(post)))
}

pub(crate) async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<PostRecord> {
    match post_service(&state).get_post(id)? {
        Some(post) => Ok(Json(post)),
        None => Err(ApiError::NotFound(format!("post {id} not found"))),
    }
}

pub(crate) async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostInput>,
) -> ApiResult<PostRecord> {
    let post = post_service(&state).update_post(id, payload)?;
    Ok(Json(post))
}

pub(crate) async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Vec<CommentRecord>> {
    let comments = post_service(&state).list_comments(id)?;
    Ok(Json(comments))
}

pub(crate) async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<AddCommentRequest>,
) -> Result<(StatusCode, Json<CommentRecord>), ApiError> {
    let comment = post_service(&state).add_comment(id, &payload.author_id, &payload.text)?;
    Ok((StatusCode::CREATED, Json(comment)))
}
