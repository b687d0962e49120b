use cropcycle_core::{IdGenerator, PlanStore, PlanStoreBuilder, SqliteStore};
use tempfile::TempDir;

/// Helper function to create a test store backed by a temporary database
pub fn create_test_store() -> (TempDir, PlanStore<SqliteStore>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir, "t");
    (temp_dir, store)
}

/// Opens (or reopens) the database inside `temp_dir` with a deterministic
/// id prefix.
pub fn open_store(temp_dir: &TempDir, id_prefix: &str) -> PlanStore<SqliteStore> {
    let db_path = temp_dir.path().join("test.db");
    PlanStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .with_id_generator(IdGenerator::with_prefix(id_prefix))
        .build()
        .expect("Failed to create plan store")
}
