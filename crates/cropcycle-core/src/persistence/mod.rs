//! Persistence of the plan collection in a key-value store.
//!
//! The whole collection is stored as one JSON array under [`STORAGE_KEY`].
//! There are no partial writes: every save replaces the previous snapshot.
//! Failures never reach the caller. A missing, unreadable or malformed
//! snapshot loads as an empty collection, and a failed write is logged and
//! dropped, leaving the in-memory state authoritative.

use std::sync::Arc;

use log::{debug, warn};

use crate::{
    error::{PlannerError, Result},
    models::Plan,
};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Key under which the serialized plan collection is stored.
pub const STORAGE_KEY: &str = "crop-plans";

/// A durable store of string values addressed by string keys.
pub trait KvStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Serializes plan collections to and from a [`KvStore`].
pub struct Persistence<S> {
    store: S,
}

impl<S: KvStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the stored collection, or an empty one when nothing usable is
    /// stored.
    pub fn load(&self) -> Vec<Arc<Plan>> {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored plans under '{STORAGE_KEY}'");
                return Vec::new();
            }
            Err(e) => {
                warn!("Failed to read stored plans, starting empty: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Arc<Plan>>>(&raw) {
            Ok(plans) => {
                debug!("Loaded {} plans", plans.len());
                plans
            }
            Err(e) => {
                warn!("Stored plans are malformed, starting empty: {e}");
                Vec::new()
            }
        }
    }

    /// Writes the full collection. Returns whether the write succeeded.
    pub fn save(&mut self, plans: &[Arc<Plan>]) -> bool {
        let result = serde_json::to_string(plans)
            .map_err(PlannerError::from)
            .and_then(|json| self.store.put(STORAGE_KEY, &json));

        match result {
            Ok(()) => {
                debug!("Saved {} plans", plans.len());
                true
            }
            Err(e) => {
                warn!("Failed to save plans, keeping in-memory state: {e}");
                false
            }
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
