use crate::database::models::PostRecord;
use anyhow::Result;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

pub(super) struct SqlitePostRepository<'conn> {
    pub(super) conn: &'conn Connection,
}

const POST_COLUMNS: &str = "id, author_id, group_id, text, image, created_at, updated_at";

fn map_post(row: &Row<'_>) -> rusqlite::Result<PostRecord> {
    Ok(PostRecord {
        id: row.get(0)?,
        author_id: row.get(1)?,
        group_id: row.get(2)?,
        text: row.get(3)?,
        image: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

impl<'conn> SqlitePostRepository<'conn> {
    fn collect(&self, sql: &str, bind: &[&dyn rusqlite::ToSql]) -> Result<Vec<PostRecord>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(bind, map_post)?;
        let mut posts = Vec::new();
        for row in rows {
            posts.push(row?);
        }
        Ok(posts)
    }
}

impl<'conn> super::PostRepository for SqlitePostRepository<'conn> {
    fn create(&self, new: &super::NewPost<'_>) -> Result<PostRecord> {
        self.conn.execute(
            r#"
            INSERT INTO posts (author_id, group_id, text, image, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                new.author_id,
                new.group_id,
                new.text,
                new.image,
                new.created_at
            ],
        )?;
        Ok(PostRecord {
            id: self.conn.last_insert_rowid(),
            author_id: new.author_id.to_string(),
            group_id: new.group_id,
            text: new.text.to_string(),
            image: new.image.map(str::to_string),
            created_at: new.created_at.to_string(),
            updated_at: None,
        })
    }

    fn update(&self, id: i64, changes: &super::PostChanges<'_>) -> Result<()> {
        self.conn.execute(
            r#"
            UPDATE posts
            SET group_id = ?2, text = ?3, image = ?4, updated_at = ?5
            WHERE id = ?1
            "#,
            params![
                id,
                changes.group_id,
                changes.text,
                changes.image,
                changes.updated_at
            ],
        )?;
        Ok(())
    }

    fn get(&self, id: i64) -> Result<Option<PostRecord>> {
        Ok(self
            .conn
            .query_row(
                &format!("SELECT {POST_COLUMNS} FROM posts WHERE id = ?1"),
                params![id],
                map_post,
            )
            .optional()?)
    }

    fn list_all(&self) -> Result<Vec<PostRecord>> {
        self.collect(
            &format!(
                "SELECT {POST_COLUMNS} FROM posts ORDER BY datetime(created_at) DESC, id DESC"
            ),
            &[],
        )
    }

    fn list_for_group(&self, group_id: i64) -> Result<Vec<PostRecord>> {
        self.collect(
            &format!(
                r#"
                SELECT {POST_COLUMNS} FROM posts
                WHERE group_id = ?1
                ORDER BY datetime(created_at) DESC, id DESC
                "#
            ),
            &[&group_id],
        )
    }

    fn list_for_author(&self, author_id: &str) -> Result<Vec<PostRecord>> {
        self.collect(
            &format!(
                r#"
                SELECT {POST_COLUMNS} FROM posts
                WHERE author_id = ?1
                ORDER BY datetime(created_at) DESC, id DESC
                "#
            ),
            &[&author_id],
        )
    }

    fn list_for_authors(&self, author_ids: &[String]) -> Result<Vec<PostRecord>> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }
        let placeholders = std::iter::repeat("?")
            .take(author_ids.len())
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            r#"
            SELECT {POST_COLUMNS} FROM posts
            WHERE author_id IN ({placeholders})
            ORDER BY datetime(created_at) DESC, id DESC
            "#
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(author_ids.iter()), map_post)?;
        let mut posts = Vec::new();
        for row in rows {
            posts.push(row?);
        }
        Ok(posts)
    }
}
