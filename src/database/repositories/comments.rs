use crate::database::models::CommentRecord;
use anyhow::Result;
use rusqlite::{params, Connection};

pub(super) struct SqliteCommentRepository<'conn> {
    pub(super) conn: &'conn Connection,
}

impl<'conn> super::CommentRepository for SqliteCommentRepository<'conn> {
    fn create(
        &self,
        post_id: i64,
        author_id: &str,
        text: &str,
        created_at: &str,
    ) -> Result<CommentRecord> {
        self.conn.execute(
            r#"
            INSERT INTO comments (post_id, author_id, text, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![post_id, author_id, text, created_at],
        )?;
        Ok(CommentRecord {
            id: self.conn.last_insert_rowid(),
            post_id,
            author_id: author_id.to_string(),
            text: text.to_string(),
            created_at: created_at.to_string(),
        })
    }

    fn list_for_post(&self, post_id: i64) -> Result<Vec<CommentRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, post_id, author_id, text, created_at
            FROM comments
            WHERE post_id = ?1
            ORDER BY datetime(created_at) DESC, id DESC
            "#,
        )?;
        let rows = stmt.query_map(params![post_id], |row| {
            Ok(CommentRecord {
                id: row.get(0)?,
                post_id: row.get(1)?,
                author_id: row.get(2)?,
                text: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;
        let mut comments = Vec::new();
        for row in rows {
            comments.push(row?);
        }
        Ok(comments)
    }
}
