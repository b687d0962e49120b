use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn crop_cmd(db_path: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("crop").expect("Failed to find crop binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path.to_str().unwrap());
    cmd
}

/// Runs a command expected to succeed and returns its stdout
fn run_ok(db_path: &std::path::Path, args: &[&str]) -> String {
    let output = crop_cmd(db_path).args(args).assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("Invalid UTF-8 output")
}

/// Creates a plan and returns its id, parsed from the confirmation line
fn create_plan(db_path: &std::path::Path, template: Option<&str>) -> String {
    let mut args = vec!["plan", "create"];
    args.extend(template);
    let stdout = run_ok(db_path, &args);
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Created plan with ID: "))
        .expect("No plan id in output")
        .trim()
        .to_string()
}

/// Pulls `(phase_id, [task_ids])` pairs out of `plan show` output
fn phase_and_task_ids(show_output: &str) -> Vec<(String, Vec<String>)> {
    let mut phases: Vec<(String, Vec<String>)> = Vec::new();
    let mut in_phase = false;
    for line in show_output.lines() {
        if line.starts_with("## ") {
            in_phase = true;
            continue;
        }
        if !in_phase {
            continue;
        }
        if let Some(id) = line.strip_prefix("- ID: ") {
            phases.push((id.to_string(), Vec::new()));
        } else if let Some(rest) = line.strip_suffix('`') {
            if let Some((_, id)) = rest.rsplit_once('`') {
                if let Some(last) = phases.last_mut() {
                    last.1.push(id.to_string());
                }
            }
        }
    }
    phases
}

#[test]
fn test_cli_list_empty_plans() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    crop_cmd(&db_path)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_no_command_lists_plans() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    crop_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_create_from_template() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    crop_cmd(&db_path)
        .args(["plan", "create", "Rice (Kharif)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID:"))
        .stdout(predicate::str::contains("# 🌾 Rice (Kharif)"))
        .stdout(predicate::str::contains("## Land Preparation (Weeks 1-2)"))
        .stdout(predicate::str::contains("- Progress: 0% (0/16 done"));
}

#[test]
fn test_cli_create_blank_plan() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    crop_cmd(&db_path)
        .args(["plan", "create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 🌱 New Crop Plan"))
        .stdout(predicate::str::contains("## Phase 1 (TBD)"))
        .stdout(predicate::str::contains("○ Pending New task"));
}

#[test]
fn test_cli_create_unknown_template_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    crop_cmd(&db_path)
        .args(["plan", "create", "Quinoa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Quinoa"));
}

#[test]
fn test_cli_list_plans_newest_first() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    create_plan(&db_path, Some("Rice (Kharif)"));
    create_plan(&db_path, Some("Tomato"));

    let stdout = run_ok(&db_path, &["plan", "list"]);
    let tomato = stdout.find("Tomato").expect("Tomato plan not listed");
    let rice = stdout.find("Rice (Kharif)").expect("Rice plan not listed");
    assert!(tomato < rice, "newest plan should be listed first");
}

#[test]
fn test_cli_show_unknown_plan_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    crop_cmd(&db_path)
        .args(["plan", "show", "missing-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan missing-1 not found"));
}

#[test]
fn test_cli_rename_and_delete_plan() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_plan(&db_path, Some("Wheat (Rabi)"));

    crop_cmd(&db_path)
        .args(["plan", "rename", &id, "  North Field Wheat  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("North Field Wheat"));

    crop_cmd(&db_path)
        .args(["plan", "rename", &id, "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("No change:"))
        .stdout(predicate::str::contains("Renamed to ''").not());

    crop_cmd(&db_path)
        .args(["plan", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 🌿 North Field Wheat"));

    crop_cmd(&db_path)
        .args(["plan", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Deleted plan 'North Field Wheat' (ID: {id})"
        )));

    crop_cmd(&db_path)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_task_status_updates_progress() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_plan(&db_path, Some("Rice (Kharif)"));

    let show = run_ok(&db_path, &["plan", "show", &id]);
    let phases = phase_and_task_ids(&show);
    assert_eq!(phases.len(), 5);

    let done: Vec<(String, String)> = phases
        .iter()
        .flat_map(|(phase, tasks)| tasks.iter().map(move |t| (phase.clone(), t.clone())))
        .take(8)
        .collect();
    for (phase, task) in &done {
        crop_cmd(&db_path)
            .args(["task", "update", &id, phase, task, "--status", "done"])
            .assert()
            .success();
    }

    crop_cmd(&db_path)
        .args(["plan", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Progress: 50% (8/16 done"));

    crop_cmd(&db_path)
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50%"));
}

#[test]
fn test_cli_task_update_text_and_notes() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_plan(&db_path, None);
    let phases = phase_and_task_ids(&run_ok(&db_path, &["plan", "show", &id]));
    let (phase, tasks) = &phases[0];

    crop_cmd(&db_path)
        .args([
            "task",
            "update",
            &id,
            phase,
            &tasks[0],
            "--text",
            "Test soil pH",
            "--notes",
            "Sample from three corners",
            "--status",
            "in-progress",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("➤ In Progress Test soil pH"))
        .stdout(predicate::str::contains("Notes: Sample from three corners"));

    // Blank text keeps the old text but the status still applies
    crop_cmd(&db_path)
        .args([
            "task", "update", &id, phase, &tasks[0], "--text", "  ", "--status", "done",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Done Test soil pH"));
}

#[test]
fn test_cli_task_add_swap_delete() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_plan(&db_path, None);
    let phases = phase_and_task_ids(&run_ok(&db_path, &["plan", "show", &id]));
    let phase = phases[0].0.clone();

    run_ok(&db_path, &["task", "add", &id, &phase]);
    let phases = phase_and_task_ids(&run_ok(&db_path, &["plan", "show", &id]));
    let tasks = phases[0].1.clone();
    assert_eq!(tasks.len(), 2);

    run_ok(&db_path, &["task", "swap", &id, &phase, &tasks[0], &tasks[1]]);
    let swapped = phase_and_task_ids(&run_ok(&db_path, &["plan", "show", &id]));
    assert_eq!(swapped[0].1, vec![tasks[1].clone(), tasks[0].clone()]);

    crop_cmd(&db_path)
        .args(["task", "delete", &id, &phase, &tasks[0]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Deleted task"));

    let remaining = phase_and_task_ids(&run_ok(&db_path, &["plan", "show", &id]));
    assert_eq!(remaining[0].1, vec![tasks[1].clone()]);
}

#[test]
fn test_cli_unknown_task_is_reported_not_fatal() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_plan(&db_path, None);
    let phases = phase_and_task_ids(&run_ok(&db_path, &["plan", "show", &id]));

    crop_cmd(&db_path)
        .args(["task", "delete", &id, &phases[0].0, "nope-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No change: Task nope-1 not found"));
}

#[test]
fn test_cli_phase_lifecycle() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_plan(&db_path, None);

    crop_cmd(&db_path)
        .args(["phase", "add", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("## New Phase (TBD)"));

    let phases = phase_and_task_ids(&run_ok(&db_path, &["plan", "show", &id]));
    assert_eq!(phases.len(), 2);
    assert_eq!(phases[1].1.len(), 1);

    crop_cmd(&db_path)
        .args([
            "phase",
            "update",
            &id,
            &phases[1].0,
            "--title",
            "Harvest",
            "--duration",
            "Week 12",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Harvest (Week 12)"));

    run_ok(&db_path, &["phase", "swap", &id, &phases[0].0, &phases[1].0]);
    let swapped = phase_and_task_ids(&run_ok(&db_path, &["plan", "show", &id]));
    assert_eq!(swapped[0].0, phases[1].0);

    crop_cmd(&db_path)
        .args(["phase", "delete", &id, &phases[1].0])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Deleted phase"));

    crop_cmd(&db_path)
        .args(["plan", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Phase 1 (TBD)"))
        .stdout(predicate::str::contains("Harvest").not());
}

#[test]
fn test_cli_phase_update_requires_a_field() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let id = create_plan(&db_path, None);

    crop_cmd(&db_path)
        .args(["phase", "update", &id, "whatever-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to update"));
}

#[test]
fn test_cli_templates_list_and_file() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let templates_path = temp_dir.path().join("templates.json");
    let templates = serde_json::json!([
        {
            "name": "🌽 Maize",
            "phases": [
                { "title": "Sowing", "duration": "Week 1", "tasks": ["Sow seed", "Irrigate"] },
                { "title": "Harvest", "duration": "Week 14", "tasks": ["Pick cobs"] }
            ]
        }
    ]);
    std::fs::write(&templates_path, templates.to_string()).unwrap();

    crop_cmd(&db_path)
        .args(["plan", "templates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**🌾 Rice (Kharif)**: 5 phases, 16 tasks"))
        .stdout(predicate::str::contains("Maize").not());

    crop_cmd(&db_path)
        .arg("--templates-file")
        .arg(&templates_path)
        .args(["plan", "templates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**🌽 Maize**: 2 phases, 3 tasks"));

    crop_cmd(&db_path)
        .arg("--templates-file")
        .arg(&templates_path)
        .args(["plan", "create", "maize"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 🌽 Maize"))
        .stdout(predicate::str::contains("## Sowing (Week 1)"));
}

#[test]
fn test_cli_bad_templates_file_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let templates_path = temp_dir.path().join("templates.json");
    std::fs::write(&templates_path, "not json").unwrap();

    crop_cmd(&db_path)
        .arg("--templates-file")
        .arg(&templates_path)
        .args(["plan", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load templates"));
}

#[test]
fn test_cli_unnamed_template_in_file_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let templates_path = temp_dir.path().join("templates.json");
    std::fs::write(&templates_path, r#"[{"name":"   ","phases":[]}]"#).unwrap();

    crop_cmd(&db_path)
        .arg("--templates-file")
        .arg(&templates_path)
        .args(["plan", "templates"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no name"));
}
