mod feeds;
mod follows;
mod groups;
mod posts;

use crate::cache::CacheInvalidator;
use crate::config::InkwellConfig;
use crate::database::Database;
use crate::error::EngineError;
use anyhow::Result;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: InkwellConfig,
    pub database: Database,
    pub invalidator: Arc<dyn CacheInvalidator>,
}

pub(crate) type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Forbidden(String),
    NotFound(String),
    Internal(anyhow::Error),
}

impl ApiError {
    fn into_response_parts(self) -> (StatusCode, ErrorResponse) {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse { message: msg }),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, ErrorResponse { message: msg }),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse { message: msg }),
            ApiError::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: "internal server error".into(),
                    },
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.into_response_parts();
        (status, Json(body)).into_response()
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Validation(msg) => ApiError::BadRequest(msg),
            EngineError::NotFound(msg) => ApiError::NotFound(msg),
            EngineError::PermissionDenied(msg) => ApiError::Forbidden(msg),
            EngineError::Storage(err) => ApiError::Internal(err),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(feeds::health_handler))
        .route("/feed", get(feeds::global_feed))
        .route("/feed/following", get(feeds::following_feed))
        .route("/groups", get(groups::list_groups))
        .route("/groups/:slug/posts", get(feeds::group_feed))
        .route("/users/:id/posts", get(feeds::author_feed))
        .route("/users/:id/follow", post(follows::follow_user))
        .route("/users/:id/unfollow", post(follows::unfollow_user))
        .route("/users/:id/following", get(follows::following_status))
        .route("/users/:id/followers", get(follows::list_followers))
        .route("/posts", post(posts::create_post))
        .route("/posts/:id", get(posts::get_post).put(posts::update_post))
        .route(
            "/posts/:id/comments",
            get(posts::list_comments).post(posts::add_comment),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn serve_http(
    config: InkwellConfig,
    database: Database,
    invalidator: Arc<dyn CacheInvalidator>,
) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
    let state = AppState {
        config,
        database,
        invalidator,
    };
    let router = router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(?addr, "HTTP server listening");
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
