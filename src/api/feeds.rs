use super::{ApiResult, AppState};
use crate::database::models::PostRecord;
use crate::feed::{FeedKind, FeedService};
use crate::pagination::Page;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct PageParams {
    #[serde(default)]
    page: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FollowingFeedParams {
    viewer: String,
    #[serde(default)]
    page: Option<usize>,
}

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
    version: &'static str,
    api_port: u16,
    page_size: usize,
}

pub(crate) async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        api_port: state.config.api_port,
        page_size: state.config.page_size,
    })
}

fn feed_service(state: &AppState) -> FeedService {
    FeedService::new(state.database.clone(), state.config.page_size)
}

pub(crate) async fn global_feed(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> ApiResult<Page<PostRecord>> {
    let page = feed_service(&state).get_feed(&FeedKind::Global, params.page.unwrap_or(1))?;
    Ok(Json(page))
}

pub(crate) async fn following_feed(
    State(state): State<AppState>,
    Query(params): Query<FollowingFeedParams>,
) -> ApiResult<Page<PostRecord>> {
    let kind = FeedKind::FollowedByViewer(params.viewer);
    let page = feed_service(&state).get_feed(&kind, params.page.unwrap_or(1))?;
    Ok(Json(page))
}

pub(crate) async fn group_feed(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<PageParams>,
) -> ApiResult<Page<PostRecord>> {
    let kind = FeedKind::ByGroup(slug);
    let page = feed_service(&state).get_feed(&kind, params.page.unwrap_or(1))?;
    Ok(Json(page))
}

pub(crate) async fn author_feed(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<PageParams>,
) -> ApiResult<Page<PostRecord>> {
    let kind = FeedKind::ByAuthor(user_id);
    let page = feed_service(&state).get_feed(&kind, params.page.unwrap_or(1))?;
    Ok(Json(page))
}
