//! Builder for creating and configuring PlanStore instances.

use std::path::{Path, PathBuf};

use super::PlanStore;
use crate::{
    builder::PlanBuilder,
    error::Result,
    ids::IdGenerator,
    persistence::{KvStore, Persistence, SqliteStore},
};

/// Builder for creating and configuring PlanStore instances.
#[derive(Debug, Clone, Default)]
pub struct PlanStoreBuilder {
    database_path: Option<PathBuf>,
    ids: Option<IdGenerator>,
}

impl PlanStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/cropcycle/cropcycle.db` or
    /// `~/.local/share/cropcycle/cropcycle.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Supplies the identifier generator, e.g. a deterministic one in tests.
    pub fn with_id_generator(mut self, ids: IdGenerator) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Builds a store backed by the SQLite database.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::XdgDirectory` if the default path cannot be
    /// resolved, `PlannerError::FileSystem` if its directory cannot be
    /// created, and `PlannerError::Database` if the database cannot be opened.
    pub fn build(self) -> Result<PlanStore<SqliteStore>> {
        let db_path = match &self.database_path {
            Some(path) => path.clone(),
            None => SqliteStore::default_path()?,
        };
        let store = SqliteStore::open(&db_path)?;
        Ok(self.build_with(store))
    }

    /// Builds a store over any key-value store.
    pub fn build_with<S: KvStore>(self, store: S) -> PlanStore<S> {
        let builder = PlanBuilder::new(self.ids.unwrap_or_default());
        PlanStore::new(Persistence::new(store), builder)
    }
}
