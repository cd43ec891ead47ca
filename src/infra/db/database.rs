//! SQLite schema provisioning and connection scoping.
//!
//! `Database` does not hold a connection. Every operation opens one,
//! runs, and closes it again before returning, whatever the outcome.

use crate::infra::app_config::AppConfig;
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Handle to the record store file.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Build a handle without touching the file system.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            path: config.db_path.clone(),
        }
    }

    /// Build a handle and provision the schema.
    pub fn open(config: &AppConfig) -> Result<Self> {
        let db = Self::new(config);
        db.init()?;
        Ok(db)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the record tables if they are missing.
    ///
    /// Safe to run on every start: existing tables and rows are left alone.
    pub fn init(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create store directory {}", parent.display())
            })?;
        }

        self.with_connection(Self::create_schema)
            .with_context(|| format!("Failed to provision schema at {}", self.path.display()))?;

        log::info!("Record store ready at {}", self.path.display());
        Ok(())
    }

    /// Run `f` against a connection that lives only for this call.
    pub fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = self.connect()?;
        let result = f(&conn);

        if let Err((_, err)) = conn.close() {
            log::warn!("Failed to close connection to {}: {}", self.path.display(), err);
        } else {
            log::debug!("Closed connection to {}", self.path.display());
        }

        result.map_err(Into::into)
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)
            .with_context(|| format!("Failed to open record store {}", self.path.display()))?;

        // court_record.criminal_id is declared as a foreign key but orphans
        // are accepted, so enforcement stays off.
        conn.execute_batch("PRAGMA foreign_keys = OFF;")?;

        log::debug!("Opened connection to {}", self.path.display());
        Ok(conn)
    }

    pub fn criminal_repo(&self) -> crate::infra::db::repository::CriminalRepository {
        crate::infra::db::repository::CriminalRepository::new(self.clone())
    }

    pub fn victim_repo(&self) -> crate::infra::db::repository::VictimRepository {
        crate::infra::db::repository::VictimRepository::new(self.clone())
    }

    pub fn court_record_repo(&self) -> crate::infra::db::repository::CourtRecordRepository {
        crate::infra::db::repository::CourtRecordRepository::new(self.clone())
    }

    fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS criminal (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                age INTEGER NOT NULL,
                address TEXT NOT NULL,
                crime TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS victim (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                age INTEGER NOT NULL,
                address TEXT NOT NULL,
                report TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS court_record (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                criminal_id INTEGER NOT NULL,
                judge_name TEXT NOT NULL,
                verdict TEXT NOT NULL,
                FOREIGN KEY (criminal_id) REFERENCES criminal (id)
            );
            "#,
        )
    }
}
