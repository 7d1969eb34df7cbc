//! SQLite storage layer for projects and palettes.

/// Palette storage helpers.
pub mod palette;
/// Project storage helpers.
pub mod project;

#[cfg(test)]
mod tests;

use crate::error::AppError;
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

/// One shared connection guarded by a mutex. Each repository operation holds
/// the lock for its whole unit of work, so check-then-act sequences never
/// interleave with another writer.
pub(crate) type SharedConn = Arc<Mutex<Connection>>;

pub(crate) fn lock(conn: &SharedConn) -> MutexGuard<'_, Connection> {
    conn.lock().expect("database mutex poisoned")
}

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS projects (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS palettes (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT NOT NULL,
    color1     TEXT NOT NULL,
    color2     TEXT NOT NULL,
    color3     TEXT NOT NULL,
    color4     TEXT NOT NULL,
    color5     TEXT NOT NULL,
    project_id INTEGER NOT NULL REFERENCES projects(id)
);
";

/// Database handle with access to the project and palette stores.
pub struct Database {
    conn: SharedConn,
    pub projects: project::ProjectDb,
    pub palettes: palette::PaletteDb,
}

impl Database {
    /// Open (or create) the database at `path` and initialize the schema.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or the schema cannot be
    /// applied.
    pub fn new(path: &str) -> Result<Self, AppError> {
        // Ensure the data directory exists
        if let Some(parent) = std::path::Path::new(path).parent() {
            std::fs::create_dir_all(parent).ok();
        }

        let conn = Connection::open(path)?;
        // Referential integrity for palettes.project_id is delegated to
        // SQLite; a violating insert surfaces as a storage failure.
        conn.pragma_update(None, "foreign_keys", true)?;
        conn.execute_batch(SCHEMA)?;

        let conn = Arc::new(Mutex::new(conn));
        Ok(Self {
            projects: project::ProjectDb::new(conn.clone()),
            palettes: palette::PaletteDb::new(conn.clone()),
            conn,
        })
    }

    /// Replace all rows with the canonical sample fixture: "Project 1" and
    /// "Project 2" with two palettes each, plus an "Empty" project.
    ///
    /// # Errors
    /// Returns an error if any statement in the seed transaction fails.
    pub fn seed(&self) -> Result<(), AppError> {
        let mut conn = lock(&self.conn);
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM palettes", [])?;
        tx.execute("DELETE FROM projects", [])?;

        for (project_name, palettes) in SEED_PROJECTS {
            tx.execute("INSERT INTO projects (name) VALUES (?1)", [project_name])?;
            let project_id = tx.last_insert_rowid();
            for palette in *palettes {
                tx.execute(
                    "INSERT INTO palettes (name, color1, color2, color3, color4, color5, project_id)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                    rusqlite::params![
                        palette[0], palette[1], palette[2], palette[3], palette[4], palette[5],
                        project_id
                    ],
                )?;
            }
        }

        tx.commit()?;
        Ok(())
    }
}

type SeedPalette = [&'static str; 6];

const SEED_PROJECTS: &[(&str, &[SeedPalette])] = &[
    (
        "Project 1",
        &[
            ["Palette1", "#ff0000", "#ffff00", "#ffffff", "#808000", "#239b56"],
            ["Palette2", "#2980b9", "#85929e", "#dc7633", "#73c6b6", "#d6eaf8"],
        ],
    ),
    (
        "Project 2",
        &[
            ["Palette3", "#ff0000", "#ffff00", "#ffffff", "#808000", "#239b56"],
            ["Palette4", "#2980b9", "#85929e", "#dc7633", "#73c6b6", "#d6eaf8"],
        ],
    ),
    ("Empty", &[]),
];
