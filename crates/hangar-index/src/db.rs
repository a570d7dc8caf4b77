use crate::records::{
    DirectoryProjectRecord, DirectoryRecord, ProjectUpsert, RecentProjectRecord, Upsert,
};
use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

// NOTE: Store Design Rationale
//
// Why full paths as primary keys?
// - A project's identity IS its location; moving it on disk makes it a
//   different record by definition, and the next scan reconciles that
// - No surrogate ids means upserts, lookups and deletes are single-key
//
// Why an epoch column instead of a "seen" flag?
// - The staleness sweep is one DELETE comparing against the pass epoch;
//   no second pass to reset flags, no drift when a pass aborts early
//
// Why ON DELETE CASCADE for directory_projects?
// - Removing a directory removes everything known under it in one
//   statement; recents deliberately do NOT cascade so open history
//   survives directory removal

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open database: {}", db_path.display()))?;

        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS project_directories (
                full_path TEXT PRIMARY KEY,
                record_updated_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS directory_projects (
                full_path TEXT PRIMARY KEY,
                directory_path TEXT NOT NULL
                    REFERENCES project_directories(full_path) ON DELETE CASCADE,
                evaluator_tag TEXT NOT NULL,
                framework TEXT NOT NULL,
                nickname TEXT,
                record_updated_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS recent_projects (
                full_path TEXT PRIMARY KEY,
                evaluator_tag TEXT NOT NULL,
                framework TEXT NOT NULL,
                nickname TEXT,
                opened_at TEXT NOT NULL,
                record_updated_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_projects_directory
                ON directory_projects(directory_path);
            CREATE INDEX IF NOT EXISTS idx_projects_nickname
                ON directory_projects(nickname);
            CREATE INDEX IF NOT EXISTS idx_recents_opened
                ON recent_projects(opened_at);
            "#,
        )?;

        Ok(())
    }

    // --- project_directories ---

    pub fn upsert_directory(&self, full_path: &str, now: &str) -> Result<Upsert> {
        let existing: Option<String> = self
            .conn
            .query_row(
                "SELECT full_path FROM project_directories WHERE full_path = ?1",
                [full_path],
                |row| row.get(0),
            )
            .optional()?;

        self.conn.execute(
            r#"
            INSERT INTO project_directories (full_path, record_updated_at)
            VALUES (?1, ?2)
            ON CONFLICT(full_path) DO UPDATE SET record_updated_at = ?2
            "#,
            params![full_path, now],
        )?;

        Ok(match existing {
            Some(_) => Upsert::Updated,
            None => Upsert::Created,
        })
    }

    pub fn find_directory(&self, full_path: &str) -> Result<Option<DirectoryRecord>> {
        self.conn
            .query_row(
                "SELECT full_path, record_updated_at FROM project_directories WHERE full_path = ?1",
                [full_path],
                |row| {
                    Ok(DirectoryRecord {
                        full_path: row.get(0)?,
                        record_updated_at: row.get(1)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    pub fn list_directories(&self) -> Result<Vec<DirectoryRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT full_path, record_updated_at FROM project_directories ORDER BY full_path",
        )?;
        let directories = stmt
            .query_map([], |row| {
                Ok(DirectoryRecord {
                    full_path: row.get(0)?,
                    record_updated_at: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(directories)
    }

    /// Remove a directory and, via cascade, every project known under it.
    pub fn remove_directory(&self, full_path: &str) -> Result<bool> {
        let removed = self.conn.execute(
            "DELETE FROM project_directories WHERE full_path = ?1",
            [full_path],
        )?;
        Ok(removed > 0)
    }

    pub fn clear_directories(&self) -> Result<usize> {
        let removed = self.conn.execute("DELETE FROM project_directories", [])?;
        Ok(removed)
    }

    pub fn count_projects_in(&self, directory_path: &str) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM directory_projects WHERE directory_path = ?1",
            [directory_path],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    // --- directory_projects ---

    /// Commit one reconciliation pass's upserts in a single transaction.
    ///
    /// Updates re-own the record (directory, tag, framework) and stamp the
    /// pass epoch; the user's nickname is preserved. Returns
    /// (created, updated) counts.
    pub fn apply_project_upserts(
        &mut self,
        directory_path: &str,
        upserts: &[ProjectUpsert],
        pass_epoch: &str,
    ) -> Result<(usize, usize)> {
        let tx = self.conn.transaction()?;
        let mut created = 0;
        let mut updated = 0;
        {
            let mut find = tx.prepare(
                "SELECT 1 FROM directory_projects WHERE full_path = ?1",
            )?;
            let mut write = tx.prepare(
                r#"
                INSERT INTO directory_projects
                    (full_path, directory_path, evaluator_tag, framework, record_updated_at)
                VALUES (?1, ?2, ?3, ?4, ?5)
                ON CONFLICT(full_path) DO UPDATE SET
                    directory_path = ?2,
                    evaluator_tag = ?3,
                    framework = ?4,
                    record_updated_at = ?5
                "#,
            )?;
            for upsert in upserts {
                let exists = find
                    .query_row([&upsert.full_path], |_| Ok(()))
                    .optional()?
                    .is_some();
                write.execute(params![
                    upsert.full_path,
                    directory_path,
                    upsert.evaluator_tag,
                    upsert.framework,
                    pass_epoch,
                ])?;
                if exists {
                    updated += 1;
                } else {
                    created += 1;
                }
            }
        }
        tx.commit()?;
        Ok((created, updated))
    }

    /// Delete every project of `directory_path` not touched by the pass
    /// identified by `pass_epoch`. Returns the number of rows removed.
    pub fn delete_stale_projects(
        &self,
        directory_path: &str,
        pass_epoch: &str,
    ) -> Result<usize> {
        let removed = self.conn.execute(
            r#"
            DELETE FROM directory_projects
            WHERE directory_path = ?1 AND record_updated_at != ?2
            "#,
            params![directory_path, pass_epoch],
        )?;
        Ok(removed)
    }

    pub fn find_project(&self, full_path: &str) -> Result<Option<DirectoryProjectRecord>> {
        self.conn
            .query_row(
                &format!("{} WHERE full_path = ?1", SELECT_PROJECT),
                [full_path],
                project_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    pub fn find_project_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<Option<DirectoryProjectRecord>> {
        self.conn
            .query_row(
                &format!("{} WHERE nickname = ?1 LIMIT 1", SELECT_PROJECT),
                [nickname],
                project_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    pub fn list_projects(&self) -> Result<Vec<DirectoryProjectRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY full_path", SELECT_PROJECT))?;
        let projects = stmt
            .query_map([], project_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(projects)
    }

    pub fn list_projects_in(&self, directory_path: &str) -> Result<Vec<DirectoryProjectRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{} WHERE directory_path = ?1 ORDER BY full_path",
            SELECT_PROJECT
        ))?;
        let projects = stmt
            .query_map([directory_path], project_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(projects)
    }

    /// Set or clear a project's nickname. Returns false when no record has
    /// that path.
    pub fn set_nickname(
        &self,
        full_path: &str,
        nickname: Option<&str>,
        now: &str,
    ) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE directory_projects SET nickname = ?2, record_updated_at = ?3 WHERE full_path = ?1",
            params![full_path, nickname, now],
        )?;
        Ok(changed > 0)
    }

    // --- recent_projects ---

    /// Upsert-by-path for the recents list: evaluator tag, framework and
    /// nickname follow the incoming values, and both times move to `now`.
    pub fn upsert_recent(
        &self,
        full_path: &str,
        evaluator_tag: &str,
        framework: &str,
        nickname: Option<&str>,
        now: &str,
    ) -> Result<Upsert> {
        let existing: Option<String> = self
            .conn
            .query_row(
                "SELECT full_path FROM recent_projects WHERE full_path = ?1",
                [full_path],
                |row| row.get(0),
            )
            .optional()?;

        self.conn.execute(
            r#"
            INSERT INTO recent_projects
                (full_path, evaluator_tag, framework, nickname, opened_at, record_updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            ON CONFLICT(full_path) DO UPDATE SET
                evaluator_tag = ?2,
                framework = ?3,
                nickname = ?4,
                opened_at = ?5,
                record_updated_at = ?5
            "#,
            params![full_path, evaluator_tag, framework, nickname, now],
        )?;

        Ok(match existing {
            Some(_) => Upsert::Updated,
            None => Upsert::Created,
        })
    }

    pub fn count_recents(&self) -> Result<i64> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM recent_projects", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Evict the oldest-by-opened-time rows past `max` (zero or negative
    /// retains nothing). Returns the number of rows removed.
    pub fn evict_recents(&self, max: i64) -> Result<usize> {
        let over = self.count_recents()? - max.max(0);
        if over <= 0 {
            return Ok(0);
        }
        let removed = self.conn.execute(
            r#"
            DELETE FROM recent_projects WHERE full_path IN (
                SELECT full_path FROM recent_projects
                ORDER BY opened_at ASC
                LIMIT ?1
            )
            "#,
            [over],
        )?;
        Ok(removed)
    }

    pub fn find_recent(&self, full_path: &str) -> Result<Option<RecentProjectRecord>> {
        self.conn
            .query_row(
                &format!("{} WHERE full_path = ?1", SELECT_RECENT),
                [full_path],
                recent_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Most recently opened first.
    pub fn list_recents(&self) -> Result<Vec<RecentProjectRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY opened_at DESC", SELECT_RECENT))?;
        let recents = stmt
            .query_map([], recent_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(recents)
    }
}

const SELECT_PROJECT: &str = "SELECT full_path, directory_path, evaluator_tag, framework, nickname, record_updated_at FROM directory_projects";

const SELECT_RECENT: &str = "SELECT full_path, evaluator_tag, framework, nickname, opened_at, record_updated_at FROM recent_projects";

fn project_from_row(row: &Row<'_>) -> rusqlite::Result<DirectoryProjectRecord> {
    Ok(DirectoryProjectRecord {
        full_path: row.get(0)?,
        directory_path: row.get(1)?,
        evaluator_tag: row.get(2)?,
        framework: row.get(3)?,
        nickname: row.get(4)?,
        record_updated_at: row.get(5)?,
    })
}

fn recent_from_row(row: &Row<'_>) -> rusqlite::Result<RecentProjectRecord> {
    Ok(RecentProjectRecord {
        full_path: row.get(0)?,
        evaluator_tag: row.get(1)?,
        framework: row.get(2)?,
        nickname: row.get(3)?,
        opened_at: row.get(4)?,
        record_updated_at: row.get(5)?,
    })
}
