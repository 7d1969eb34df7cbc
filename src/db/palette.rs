use crate::db::{lock, SharedConn};
use crate::error::AppError;
use crate::models::palette::{NewPalette, Palette, PaletteFields};
use rusqlite::{params, OptionalExtension, Row, TransactionBehavior};

/// Palette store: per-project name uniqueness lives here.
pub struct PaletteDb {
    conn: SharedConn,
}

fn palette_from_row(row: &Row<'_>) -> Result<Palette, rusqlite::Error> {
    Ok(Palette {
        id: row.get(0)?,
        name: row.get(1)?,
        color1: row.get(2)?,
        color2: row.get(3)?,
        color3: row.get(4)?,
        color4: row.get(5)?,
        color5: row.get(6)?,
        project_id: row.get(7)?,
    })
}

const PALETTE_COLUMNS: &str = "id, name, color1, color2, color3, color4, color5, project_id";

impl PaletteDb {
    pub(crate) fn new(conn: SharedConn) -> Self {
        Self { conn }
    }

    /// Get one palette by id.
    ///
    /// # Errors
    /// Returns an error if the select fails.
    pub fn get(&self, id: i64) -> Result<Option<Palette>, AppError> {
        let conn = lock(&self.conn);
        let palette = conn
            .query_row(
                &format!("SELECT {PALETTE_COLUMNS} FROM palettes WHERE id = ?1"),
                [id],
                palette_from_row,
            )
            .optional()?;
        Ok(palette)
    }

    /// List all palettes owned by `project_id`, in insertion order. Callers
    /// are expected to have checked the project exists; an unknown id simply
    /// yields an empty list.
    ///
    /// # Errors
    /// Returns an error if the select fails.
    pub fn list_for_project(&self, project_id: i64) -> Result<Vec<Palette>, AppError> {
        let conn = lock(&self.conn);
        let mut stmt = conn.prepare(&format!(
            "SELECT {PALETTE_COLUMNS} FROM palettes WHERE project_id = ?1 ORDER BY id ASC"
        ))?;
        let rows = stmt.query_map([project_id], palette_from_row)?;

        let mut palettes = Vec::new();
        for palette in rows {
            palettes.push(palette?);
        }
        Ok(palettes)
    }

    /// Insert a palette, enforcing (name, project_id) uniqueness. The
    /// duplicate check and the insert run in one immediate transaction.
    ///
    /// The referenced project is NOT checked here; the foreign key constraint
    /// rejects an orphan insert and surfaces as a storage error.
    ///
    /// # Errors
    /// Returns `Conflict` if the name is already used within the project, or
    /// a storage error.
    pub fn create(&self, palette: &NewPalette) -> Result<Palette, AppError> {
        let mut conn = lock(&self.conn);
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let exists: i64 = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM palettes WHERE name = ?1 AND project_id = ?2)",
            params![palette.name, palette.project_id],
            |row| row.get(0),
        )?;
        if exists == 1 {
            return Err(AppError::Conflict(format!(
                "Conflict. palette name {} already exists in project id {}.",
                palette.name, palette.project_id
            )));
        }

        tx.execute(
            "INSERT INTO palettes (name, color1, color2, color3, color4, color5, project_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                palette.name,
                palette.color1,
                palette.color2,
                palette.color3,
                palette.color4,
                palette.color5,
                palette.project_id
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(Palette {
            id,
            name: palette.name.clone(),
            color1: palette.color1.clone(),
            color2: palette.color2.clone(),
            color3: palette.color3.clone(),
            color4: palette.color4.clone(),
            color5: palette.color5.clone(),
            project_id: palette.project_id,
        })
    }

    /// Replace a palette's name and all five colors in place. The owning
    /// project is never changed by an update.
    ///
    /// # Returns
    /// `Ok(true)` if a row was updated, `Ok(false)` if no palette has `id`.
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub fn update(&self, id: i64, fields: &PaletteFields) -> Result<bool, AppError> {
        let conn = lock(&self.conn);
        let changed = conn.execute(
            "UPDATE palettes
             SET name = ?2, color1 = ?3, color2 = ?4, color3 = ?5, color4 = ?6, color5 = ?7
             WHERE id = ?1",
            params![
                id,
                fields.name,
                fields.color1,
                fields.color2,
                fields.color3,
                fields.color4,
                fields.color5
            ],
        )?;
        Ok(changed > 0)
    }

    /// Delete one palette by id.
    ///
    /// # Returns
    /// `Ok(true)` if a row was deleted, `Ok(false)` if no palette has `id`.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub fn delete(&self, id: i64) -> Result<bool, AppError> {
        let conn = lock(&self.conn);
        let deleted = conn.execute("DELETE FROM palettes WHERE id = ?1", [id])?;
        Ok(deleted > 0)
    }
}
