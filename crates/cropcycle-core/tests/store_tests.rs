mod common;

use std::collections::HashSet;

use common::{create_test_store, open_store};
use cropcycle_core::{progress, KvStore, SqliteStore, TaskStatus, TemplateCatalog};

#[test]
fn test_complete_plan_workflow() {
    let (temp_dir, mut store) = create_test_store();
    let catalog = TemplateCatalog::builtin();

    let rice_id = store.create(catalog.get("Rice (Kharif)").expect("rice template"));
    let tomato_id = store.create(catalog.get("Tomato").expect("tomato template"));

    // Newest first, newest selected
    assert_eq!(store.plans()[0].id, tomato_id);
    assert_eq!(store.selected_id(), Some(tomato_id.as_str()));

    store.select(&rice_id);
    let rice = store.selected().expect("rice selected").clone();
    let harvest = rice.phases[4].clone();

    store.set_task_status(&harvest.id, &harvest.tasks[0].id, TaskStatus::Done);
    store.set_task_status(&harvest.id, &harvest.tasks[1].id, TaskStatus::InProgress);
    store.add_phase();
    store.rename("Paddy, north field");

    drop(store);
    let store = open_store(&temp_dir, "t");

    assert_eq!(store.plans().len(), 2);
    assert_eq!(store.plans()[0].id, tomato_id);
    assert_eq!(store.selected_id(), None);

    let rice = store.get(&rice_id).expect("rice persisted");
    let rollup = progress::rollup(rice);
    assert_eq!(rice.name, "Paddy, north field");
    assert_eq!(rice.phases.len(), 6);
    assert_eq!(rollup.total, 17);
    assert_eq!(rollup.done, 1);
    assert_eq!(rollup.in_progress, 1);
}

#[test]
fn test_delete_persists() {
    let (temp_dir, mut store) = create_test_store();
    let catalog = TemplateCatalog::builtin();

    let kept = store.create(catalog.get("Wheat (Rabi)").expect("wheat template"));
    let removed = store.create_blank();
    assert!(store.delete(&removed));
    assert_eq!(store.selected_id(), None);

    drop(store);
    let store = open_store(&temp_dir, "t");
    assert_eq!(store.plans().len(), 1);
    assert_eq!(store.plans()[0].id, kept);
}

#[test]
fn test_created_at_is_stable_across_edits_and_reloads() {
    let (temp_dir, mut store) = create_test_store();
    let id = store.create_blank();
    let created_at = store.get(&id).expect("plan").created_at;

    store.add_phase();
    store.rename("Kitchen garden");
    assert_eq!(store.get(&id).expect("plan").created_at, created_at);

    drop(store);
    let store = open_store(&temp_dir, "t");
    assert_eq!(store.get(&id).expect("plan").created_at, created_at);
}

#[test]
fn test_corrupt_database_value_starts_empty() {
    let (temp_dir, mut store) = create_test_store();
    store.create_blank();
    drop(store);

    let mut raw = SqliteStore::open(temp_dir.path().join("test.db")).expect("open db");
    raw.put("crop-plans", "[{\"id\": 42").expect("write garbage");
    drop(raw);

    let mut store = open_store(&temp_dir, "t");
    assert!(store.plans().is_empty());

    // The store keeps working and overwrites the bad snapshot
    store.create_blank();
    drop(store);
    assert_eq!(open_store(&temp_dir, "t").plans().len(), 1);
}

#[test]
fn test_ids_unique_across_sessions() {
    let (temp_dir, mut store) = create_test_store();
    let catalog = TemplateCatalog::builtin();
    store.create(catalog.get("Rice (Kharif)").expect("rice template"));
    drop(store);

    // Same deterministic prefix on purpose: loaded ids must be skipped
    let mut store = open_store(&temp_dir, "t");
    store.create(catalog.get("Rice (Kharif)").expect("rice template"));
    store.add_phase();
    let phase_id = store.selected().expect("selected").phases[0].id.clone();
    store.add_task(&phase_id);

    let ids: Vec<&str> = store.plans().iter().flat_map(|plan| plan.ids()).collect();
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());
}
