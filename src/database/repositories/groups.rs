use crate::database::models::GroupRecord;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

pub(super) struct SqliteGroupRepository<'conn> {
    pub(super) conn: &'conn Connection,
}

fn map_group(row: &Row<'_>) -> rusqlite::Result<GroupRecord> {
    Ok(GroupRecord {
        id: row.get(0)?,
        slug: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
    })
}

impl<'conn> super::GroupRepository for SqliteGroupRepository<'conn> {
    fn create(&self, slug: &str, title: &str, description: &str) -> Result<GroupRecord> {
        self.conn.execute(
            "INSERT INTO groups (slug, title, description) VALUES (?1, ?2, ?3)",
            params![slug, title, description],
        )?;
        Ok(GroupRecord {
            id: self.conn.last_insert_rowid(),
            slug: slug.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        })
    }

    fn get(&self, id: i64) -> Result<Option<GroupRecord>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, slug, title, description FROM groups WHERE id = ?1",
                params![id],
                map_group,
            )
            .optional()?)
    }

    fn get_by_slug(&self, slug: &str) -> Result<Option<GroupRecord>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, slug, title, description FROM groups WHERE slug = ?1",
                params![slug],
                map_group,
            )
            .optional()?)
    }

    fn list(&self) -> Result<Vec<GroupRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, slug, title, description FROM groups ORDER BY slug ASC")?;
        let rows = stmt.query_map([], map_group)?;
        let mut groups = Vec::new();
        for row in rows {
            groups.push(row?);
        }
        Ok(groups)
    }
}
