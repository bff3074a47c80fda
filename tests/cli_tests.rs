
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;
use test_helpers::{base_moodtrack_command, today_string};

#[test]
fn test_cli_requires_subcommand() {
    let temp_dir = tempdir().unwrap();
    base_moodtrack_command(temp_dir.path()).assert().failure();
}

#[test]
fn test_cli_checkin_today_updates_status() {
    let temp_dir = tempdir().unwrap();

    base_moodtrack_command(temp_dir.path())
        .args(["checkin", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Checked in {}", today_string())))
        .stdout(predicate::str::contains("keep staying active and hydrated"));

    base_moodtrack_command(temp_dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Today: Checked in"))
        .stdout(predicate::str::contains("Current streak: 1"))
        .stdout(predicate::str::contains("Best streak: 1"));
}

#[test]
fn test_cli_status_on_empty_store() {
    let temp_dir = tempdir().unwrap();

    base_moodtrack_command(temp_dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Today: Not checked in"))
        .stdout(predicate::str::contains("Current streak: 0"))
        .stdout(predicate::str::contains("Best streak: 0"));
}

#[test]
fn test_cli_checkin_specific_date_and_show() {
    let temp_dir = tempdir().unwrap();

    base_moodtrack_command(temp_dir.path())
        .args(["checkin", "7", "--date", "20240115"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked in 2024-01-15"));

    base_moodtrack_command(temp_dir.path())
        .args(["show", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood Level: 7"))
        .stdout(predicate::str::contains("Condition worsening"));

    base_moodtrack_command(temp_dir.path())
        .args(["show", "2024-01-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No check-in for 2024-01-16"));
}

#[test]
fn test_cli_checkin_rejects_out_of_range_score() {
    let temp_dir = tempdir().unwrap();

    base_moodtrack_command(temp_dir.path())
        .args(["checkin", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid mood score: 11"));

    base_moodtrack_command(temp_dir.path())
        .args(["checkin", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid mood score: -1"));
}

#[test]
fn test_cli_invalid_date() {
    let temp_dir = tempdir().unwrap();

    base_moodtrack_command(temp_dir.path())
        .args(["checkin", "3", "--date", "not-a-date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_cli_checkin_persists_current_record() {
    let temp_dir = tempdir().unwrap();

    base_moodtrack_command(temp_dir.path())
        .args(["checkin", "4", "-d", "2024-01-01"])
        .assert()
        .success();

    let record = fs::read_to_string(temp_dir.path().join("daily-checkin-entries-v2.json")).unwrap();
    assert_eq!(record, r#"{"2024-01-01":4}"#);
}

#[test]
fn test_cli_remove() {
    let temp_dir = tempdir().unwrap();

    base_moodtrack_command(temp_dir.path())
        .args(["checkin", "4", "-d", "2024-01-01"])
        .assert()
        .success();

    base_moodtrack_command(temp_dir.path())
        .args(["remove", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed check-in for 2024-01-01"));

    base_moodtrack_command(temp_dir.path())
        .args(["remove", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No check-in for 2024-01-01"));
}

#[test]
fn test_cli_export_to_stdout() {
    let temp_dir = tempdir().unwrap();

    for (score, date) in [("1", "2024-01-02"), ("9", "2024-01-01")] {
        base_moodtrack_command(temp_dir.path())
            .args(["checkin", score, "--date", date])
            .assert()
            .success();
    }

    base_moodtrack_command(temp_dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout("{\n  \"2024-01-01\": 9,\n  \"2024-01-02\": 1\n}\n");
}

#[test]
fn test_cli_export_to_file_then_import_elsewhere() {
    let source_dir = tempdir().unwrap();
    let target_dir = tempdir().unwrap();
    let export_path = source_dir.path().join("checkins.json");

    base_moodtrack_command(source_dir.path())
        .args(["checkin", "6", "--date", "2024-05-01"])
        .assert()
        .success();

    base_moodtrack_command(source_dir.path())
        .args(["export", "--output"])
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 check-ins"));

    base_moodtrack_command(target_dir.path())
        .arg("import")
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 check-ins"));

    base_moodtrack_command(target_dir.path())
        .args(["show", "2024-05-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood Level: 6"));
}

#[test]
fn test_cli_import_legacy_list() {
    let temp_dir = tempdir().unwrap();
    let import_path = temp_dir.path().join("old.json");
    fs::write(&import_path, r#"["2024-01-01", "2024-01-02", "garbage"]"#).unwrap();

    base_moodtrack_command(temp_dir.path())
        .arg("import")
        .arg(&import_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 check-ins"));

    base_moodtrack_command(temp_dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout("{\n  \"2024-01-01\": 5,\n  \"2024-01-02\": 5\n}\n");
}

#[test]
fn test_cli_malformed_import_leaves_entries() {
    let temp_dir = tempdir().unwrap();
    let import_path = temp_dir.path().join("broken.json");
    fs::write(&import_path, "{").unwrap();

    base_moodtrack_command(temp_dir.path())
        .args(["checkin", "3", "--date", "2024-01-01"])
        .assert()
        .success();

    base_moodtrack_command(temp_dir.path())
        .arg("import")
        .arg(&import_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import failed"));

    base_moodtrack_command(temp_dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout("{\n  \"2024-01-01\": 3\n}\n");
}

#[test]
fn test_cli_import_missing_file() {
    let temp_dir = tempdir().unwrap();

    base_moodtrack_command(temp_dir.path())
        .arg("import")
        .arg(temp_dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read import file"));
}

#[test]
fn test_cli_clear_requires_confirmation() {
    let temp_dir = tempdir().unwrap();

    base_moodtrack_command(temp_dir.path())
        .args(["checkin", "3", "--date", "2024-01-01"])
        .assert()
        .success();

    base_moodtrack_command(temp_dir.path())
        .arg("clear")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires --yes"));

    base_moodtrack_command(temp_dir.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1 check-ins"));

    base_moodtrack_command(temp_dir.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("No check-ins to clear"));
}

#[test]
fn test_cli_events_json() {
    let temp_dir = tempdir().unwrap();

    base_moodtrack_command(temp_dir.path())
        .args(["checkin", "0", "--date", "2024-01-01"])
        .assert()
        .success();

    let output = base_moodtrack_command(temp_dir.path())
        .arg("events")
        .output()
        .unwrap();
    assert!(output.status.success());

    let events: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(events[0]["id"], "checkin-2024-01-01");
    assert_eq!(events[0]["label"], "😀 0");
    assert_eq!(events[0]["colorHint"], "rgb(46, 204, 113)");
}

#[test]
fn test_cli_migrates_legacy_record_on_start() {
    let temp_dir = tempdir().unwrap();
    let legacy_path = temp_dir.path().join("daily-checkin-dates-v1.json");
    fs::write(&legacy_path, r#"["2024-01-01","2024-01-02"]"#).unwrap();

    base_moodtrack_command(temp_dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout("{\n  \"2024-01-01\": 5,\n  \"2024-01-02\": 5\n}\n");

    assert!(!legacy_path.exists());
    assert!(temp_dir.path().join("daily-checkin-entries-v2.json").exists());
}

#[test]
fn test_cli_scale() {
    let temp_dir = tempdir().unwrap();

    base_moodtrack_command(temp_dir.path())
        .arg("scale")
        .assert()
        .success()
        .stdout(predicate::str::contains("#2ecc71"))
        .stdout(predicate::str::contains("#ff5c5c"))
        .stdout(predicate::str::contains("0 = best, 10 = worst"));
}
