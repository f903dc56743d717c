mod comments;
mod follows;
mod groups;
mod posts;

use super::models::{CommentRecord, GroupRecord, PostRecord};
use anyhow::Result;
use rusqlite::Connection;

pub struct NewPost<'a> {
    pub author_id: &'a str,
    pub group_id: Option<i64>,
    pub text: &'a str,
    pub image: Option<&'a str>,
    pub created_at: &'a str,
}

pub struct PostChanges<'a> {
    pub group_id: Option<i64>,
    pub text: &'a str,
    pub image: Option<&'a str>,
    pub updated_at: &'a str,
}

pub trait PostRepository {
    fn create(&self, new: &NewPost<'_>) -> Result<PostRecord>;
    /// Rewrites the mutable columns only; `created_at` is never touched.
    fn update(&self, id: i64, changes: &PostChanges<'_>) -> Result<()>;
    fn get(&self, id: i64) -> Result<Option<PostRecord>>;
    fn list_all(&self) -> Result<Vec<PostRecord>>;
    fn list_for_group(&self, group_id: i64) -> Result<Vec<PostRecord>>;
    fn list_for_author(&self, author_id: &str) -> Result<Vec<PostRecord>>;
    fn list_for_authors(&self, author_ids: &[String]) -> Result<Vec<PostRecord>>;
}

pub trait GroupRepository {
    fn create(&self, slug: &str, title: &str, description: &str) -> Result<GroupRecord>;
    fn get(&self, id: i64) -> Result<Option<GroupRecord>>;
    fn get_by_slug(&self, slug: &str) -> Result<Option<GroupRecord>>;
    fn list(&self) -> Result<Vec<GroupRecord>>;
}

pub trait CommentRepository {
    fn create(
        &self,
        post_id: i64,
        author_id: &str,
        text: &str,
        created_at: &str,
    ) -> Result<CommentRecord>;
    fn list_for_post(&self, post_id: i64) -> Result<Vec<CommentRecord>>;
}

pub trait FollowRepository {
    /// Inserting an existing edge is a no-op; the composite primary key is
    /// the source of truth under concurrent inserts.
    fn add_edge(&self, follower_id: &str, followee_id: &str, created_at: &str) -> Result<()>;
    fn remove_edge(&self, follower_id: &str, followee_id: &str) -> Result<()>;
    fn exists(&self, follower_id: &str, followee_id: &str) -> Result<bool>;
    fn followees_of(&self, follower_id: &str) -> Result<Vec<String>>;
    fn followers_of(&self, followee_id: &str) -> Result<Vec<String>>;
}

pub struct SqliteRepositories<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRepositories<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    pub fn posts(&self) -> impl PostRepository + '_ {
        posts::SqlitePostRepository { conn: self.conn }
    }

    pub fn groups(&self) -> impl GroupRepository + '_ {
        groups::SqliteGroupRepository { conn: self.conn }
    }

    pub fn comments(&self) -> impl CommentRepository + '_ {
        comments::SqliteCommentRepository { conn: self.conn }
    }

    pub fn follows(&self) -> impl FollowRepository + '_ {
        follows::SqliteFollowRepository { conn: self.conn }
    }
}
