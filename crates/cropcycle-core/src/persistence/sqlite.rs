//! SQLite-backed key-value store.

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use super::KvStore;
use crate::error::{DatabaseResultExt, PlannerError, Result};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv_store WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// Key-value store persisted in a single SQLite table.
pub struct SqliteStore {
    connection: Connection,
}

impl SqliteStore {
    /// Opens (creating if needed) the database file and initializes the
    /// schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PlannerError::file_system(parent, e))?;
        }

        let connection =
            Connection::open(path).db_context("Failed to open database connection")?;
        Self::from_connection(connection)
    }

    /// An in-memory database, mostly useful in tests.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Self::from_connection(connection)
    }

    /// Default database path following the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/cropcycle/cropcycle.db`.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("cropcycle")
            .place_data_file("cropcycle.db")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }

    fn from_connection(connection: Connection) -> Result<Self> {
        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read value")
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, value, now])
            .db_context("Failed to write value")?;
        Ok(())
    }
}
