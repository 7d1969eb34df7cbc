use crate::db::{lock, SharedConn};
use crate::error::AppError;
use crate::models::project::Project;
use rusqlite::{params, OptionalExtension, TransactionBehavior};

/// Project store: name uniqueness and cascade delete live here.
pub struct ProjectDb {
    conn: SharedConn,
}

impl ProjectDb {
    pub(crate) fn new(conn: SharedConn) -> Self {
        Self { conn }
    }

    /// List all projects in insertion order, optionally keeping only those
    /// whose name contains `name_filter` case-insensitively.
    ///
    /// # Errors
    /// Returns an error if the select fails.
    pub fn list(&self, name_filter: Option<&str>) -> Result<Vec<Project>, AppError> {
        let conn = lock(&self.conn);
        let mut stmt = conn.prepare("SELECT id, name FROM projects ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok(Project {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut projects = Vec::new();
        for project in rows {
            projects.push(project?);
        }

        if let Some(filter) = name_filter {
            let needle = filter.to_lowercase();
            projects.retain(|p| p.name.to_lowercase().contains(&needle));
        }

        Ok(projects)
    }

    /// Get one project by id.
    ///
    /// # Errors
    /// Returns an error if the select fails.
    pub fn get(&self, id: i64) -> Result<Option<Project>, AppError> {
        let conn = lock(&self.conn);
        let project = conn
            .query_row(
                "SELECT id, name FROM projects WHERE id = ?1",
                [id],
                |row| {
                    Ok(Project {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(project)
    }

    /// Insert a project, enforcing case-sensitive name uniqueness. The
    /// duplicate check and the insert run in one immediate transaction so a
    /// concurrent writer cannot slip a duplicate in between.
    ///
    /// # Errors
    /// Returns `Conflict` if the name is already taken, or a storage error.
    pub fn create(&self, name: &str) -> Result<Project, AppError> {
        let mut conn = lock(&self.conn);
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let exists: i64 = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM projects WHERE name = ?1)",
            [name],
            |row| row.get(0),
        )?;
        if exists == 1 {
            return Err(AppError::Conflict(format!(
                "Project name {name} already exists."
            )));
        }

        tx.execute("INSERT INTO projects (name) VALUES (?1)", [name])?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(Project {
            id,
            name: name.to_string(),
        })
    }

    /// Rename a project in place.
    ///
    /// # Returns
    /// `Ok(true)` if a row was updated, `Ok(false)` if no project has `id`.
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub fn rename(&self, id: i64, name: &str) -> Result<bool, AppError> {
        let conn = lock(&self.conn);
        let changed = conn.execute(
            "UPDATE projects SET name = ?2 WHERE id = ?1",
            params![id, name],
        )?;
        Ok(changed > 0)
    }

    /// Delete a project and all palettes it owns. Both deletes run in one
    /// immediate transaction: either the project and its palettes all go, or
    /// nothing does.
    ///
    /// # Returns
    /// `Ok(true)` if the project existed, `Ok(false)` otherwise (in which
    /// case nothing was mutated).
    ///
    /// # Errors
    /// Returns an error if either delete fails.
    pub fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut conn = lock(&self.conn);
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let exists: i64 = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)",
            [id],
            |row| row.get(0),
        )?;
        if exists == 0 {
            return Ok(false);
        }

        tx.execute("DELETE FROM palettes WHERE project_id = ?1", [id])?;
        tx.execute("DELETE FROM projects WHERE id = ?1", [id])?;
        tx.commit()?;
        Ok(true)
    }
}
