use anyhow::Result;
use rusqlite::{params, Connection};

pub(super) struct SqliteFollowRepository<'conn> {
    pub(super) conn: &'conn Connection,
}

impl<'conn> super::FollowRepository for SqliteFollowRepository<'conn> {
    fn add_edge(&self, follower_id: &str, followee_id: &str, created_at: &str) -> Result<()> {
        // The composite primary key resolves a duplicate-insert race to
        // "edge exists" without an application-level check.
        self.conn.execute(
            r#"
            INSERT OR IGNORE INTO follows (follower_id, followee_id, created_at)
            VALUES (?1, ?2, ?3)
            "#,
            params![follower_id, followee_id, created_at],
        )?;
        Ok(())
    }

    fn remove_edge(&self, follower_id: &str, followee_id: &str) -> Result<()> {
        self.conn.execute(
            "DELETE FROM follows WHERE follower_id = ?1 AND followee_id = ?2",
            params![follower_id, followee_id],
        )?;
        Ok(())
    }

    fn exists(&self, follower_id: &str, followee_id: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM follows WHERE follower_id = ?1 AND followee_id = ?2",
            params![follower_id, followee_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    fn followees_of(&self, follower_id: &str) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT followee_id FROM follows WHERE follower_id = ?1 ORDER BY followee_id ASC",
        )?;
        let followees = stmt
            .query_map(params![follower_id], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(followees)
    }

    fn followers_of(&self, followee_id: &str) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT follower_id FROM follows WHERE followee_id = ?1 ORDER BY follower_id ASC",
        )?;
        let followers = stmt
            .query_map(params![followee_id], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(followers)
    }
}
