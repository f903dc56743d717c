use crate::cache::{self, CacheInvalidator};
use crate::database::models::{CommentRecord, PostRecord};
use crate::database::repositories::{
    CommentRepository, GroupRepository, NewPost, PostChanges, PostRepository,
};
use crate::database::Database;
use crate::error::{EngineError, EngineResult};
use crate::utils::now_utc_iso;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Write and point-read path over posts and their comments. The feed read
/// path lives in [`crate::feed`].
#[derive(Clone)]
pub struct PostService {
    database: Database,
    invalidator: Arc<dyn CacheInvalidator>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostInput {
    pub author_id: String,
    pub text: String,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostInput {
    pub editor_id: String,
    pub text: String,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
}

impl PostService {
    pub fn new(database: Database) -> Self {
        Self::with_invalidator(database, cache::log_only())
    }

    pub fn with_invalidator(database: Database, invalidator: Arc<dyn CacheInvalidator>) -> Self {
        Self {
            database,
            invalidator,
        }
    }

    pub fn create_post(&self, input: CreatePostInput) -> EngineResult<PostRecord> {
        let text = input.text.trim().to_string();
        if text.is_empty() {
            return Err(EngineError::validation("post text may not be empty"));
        }
        let created_at = now_utc_iso();
        let post = self.database.with_repositories(|repos| {
            ensure_group_exists(&repos.groups(), input.group_id)?;
            repos.posts().create(&NewPost {
                author_id: &input.author_id,
                group_id: input.group_id,
                text: &text,
                image: input.image.as_deref(),
                created_at: &created_at,
            })
        })?;
        self.invalidator.posts_changed();
        Ok(post)
    }

    pub fn update_post(&self, post_id: i64, input: UpdatePostInput) -> EngineResult<PostRecord> {
        let updated_at = now_utc_iso();
        let post = self.database.with_repositories(|repos| {
            let posts = repos.posts();
            let Some(existing) = posts.get(post_id)? else {
                return Err(EngineError::not_found(format!("post {post_id} not found")).into());
            };
            if existing.author_id != input.editor_id {
                return Err(EngineError::permission_denied(format!(
                    "user {} may not edit a post by {}",
                    input.editor_id, existing.author_id
                ))
                .into());
            }
            let text = input.text.trim();
            if text.is_empty() {
                return Err(EngineError::validation("post text may not be empty").into());
            }
            ensure_group_exists(&repos.groups(), input.group_id)?;
            posts.update(
                post_id,
                &PostChanges {
                    group_id: input.group_id,
                    text,
                    image: input.image.as_deref(),
                    updated_at: &updated_at,
                },
            )?;
            Ok(PostRecord {
                group_id: input.group_id,
                text: text.to_string(),
                image: input.image.clone(),
                updated_at: Some(updated_at.clone()),
                ..existing
            })
        })?;
        self.invalidator.posts_changed();
        Ok(post)
    }

    pub fn get_post(&self, post_id: i64) -> EngineResult<Option<PostRecord>> {
        Ok(self
            .database
            .with_repositories(|repos| repos.posts().get(post_id))?)
    }

    pub fn add_comment(
        &self,
        post_id: i64,
        author_id: &str,
        text: &str,
    ) -> EngineResult<CommentRecord> {
        let text = text.trim();
        if text.is_empty() {
            return Err(EngineError::validation("comment text may not be empty"));
        }
        let created_at = now_utc_iso();
        let comment = self.database.with_repositories(|repos| {
            if repos.posts().get(post_id)?.is_none() {
                return Err(EngineError::not_found(format!("post {post_id} not found")).into());
            }
            repos.comments().create(post_id, author_id, text, &created_at)
        })?;
        Ok(comment)
    }

    pub fn list_comments(&self, post_id: i64) -> EngineResult<Vec<CommentRecord>> {
        Ok(self
            .database
            .with_repositories(|repos| repos.comments().list_for_post(post_id))?)
    }
}

fn ensure_group_exists(
    groups: &impl GroupRepository,
    group_id: Option<i64>,
) -> anyhow::Result<()> {
    if let Some(group_id) = group_id {
        if groups.get(group_id)?.is_none() {
            return Err(EngineError::not_found(format!("group {group_id} not found")).into());
        }
    }
    Ok(())
}
