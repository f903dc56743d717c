use crate::database::models::PostRecord;
use crate::database::repositories::{FollowRepository, GroupRepository, PostRepository};
use crate::database::Database;
use crate::error::{EngineError, EngineResult};
use crate::pagination::{paginate, Page};
use serde::{Deserialize, Serialize};

/// Selection criterion for a feed. Every kind shares the Post Store's
/// newest-first order; the assembler never re-sorts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FeedKind {
    Global,
    ByGroup(String),
    ByAuthor(String),
    FollowedByViewer(String),
}

/// Pure read path: resolves a feed kind into an ordered post sequence and
/// slices out the requested page. Never mutates state.
#[derive(Clone)]
pub struct FeedService {
    database: Database,
    page_size: usize,
}

impl FeedService {
    pub fn new(database: Database, page_size: usize) -> Self {
        Self {
            database,
            page_size,
        }
    }

    pub fn get_feed(&self, kind: &FeedKind, page_index: usize) -> EngineResult<Page<PostRecord>> {
        let posts = self.database.with_repositories(|repos| {
            let posts = repos.posts();
            match kind {
                FeedKind::Global => posts.list_all(),
                FeedKind::ByGroup(slug) => {
                    let Some(group) = repos.groups().get_by_slug(slug)? else {
                        return Err(
                            EngineError::not_found(format!("group {slug} not found")).into()
                        );
                    };
                    posts.list_for_group(group.id)
                }
                FeedKind::ByAuthor(author_id) => posts.list_for_author(author_id),
                FeedKind::FollowedByViewer(viewer_id) => {
                    let followees = repos.follows().followees_of(viewer_id)?;
                    if followees.is_empty() {
                        return Ok(Vec::new());
                    }
                    posts.list_for_authors(&followees)
                }
            }
        })?;
        Ok(paginate(posts, self.page_size, page_index))
    }
}
