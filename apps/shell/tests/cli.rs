use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn podium(workdir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_podium"));
    cmd.current_dir(workdir).env_remove("RUST_LOG");
    cmd
}

fn write_json(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
    path
}

fn session(id: &str, start: &str, end: &str, presenters: &[&str], chairs: &[&str]) -> Value {
    json!({
        "id": id,
        "title": id,
        "location": "Main Hall",
        "startTime": format!("2024-03-01T{start}:00Z"),
        "endTime": format!("2024-03-01T{end}:00Z"),
        "presenters": presenters,
        "chairPersons": chairs,
    })
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout should be JSON")
}

#[test]
fn check_reports_conflicts_as_json() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_json(
        &dir,
        "snapshot.json",
        &json!({
            "persons": [{ "id": "ada", "name": "Ada Lovelace" }],
            "sessions": [session("keynote", "09:00", "10:00", &["ada"], &["grace"])],
            "candidate": session("workshop", "09:30", "11:00", &["ada"], &[]),
        }),
    );

    let out = podium(dir.path())
        .args(["check", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report = stdout_json(&out);
    assert_eq!(report["conflictingPresenters"], json!([{ "id": "ada", "name": "Ada Lovelace" }]));
    assert_eq!(report["conflictingChairPersons"], json!([]));
    assert_eq!(report["overlappingSessions"], json!(["keynote"]));
    assert_eq!(report["locationClashes"], json!(["keynote"]));
}

#[test]
fn check_cross_role_and_exclude_self() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_json(
        &dir,
        "snapshot.json",
        &json!({
            "sessions": [
                session("panel", "09:00", "10:00", &[], &["ada"]),
                session("talk", "09:00", "10:00", &["ada"], &[]),
            ],
            "candidate": session("talk", "09:15", "10:15", &["ada"], &[]),
        }),
    );

    let out = podium(dir.path())
        .args(["check", "--exclude-self", "--cross-role", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report = stdout_json(&out);
    assert_eq!(report["conflictingPresenters"], json!([{ "id": "ada", "name": "Unknown" }]));
    assert_eq!(report["overlappingSessions"], json!(["panel"]));
}

#[test]
fn check_fails_on_inverted_window() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_json(
        &dir,
        "snapshot.json",
        &json!({ "candidate": session("bad", "11:00", "10:00", &["ada"], &[]) }),
    );

    podium(dir.path())
        .args(["check", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time window"));
}

#[test]
fn days_prints_one_entry_per_date() {
    let dir = TempDir::new().unwrap();

    let out = podium(dir.path())
        .args(["days", "--start", "2024-03-01", "--end", "2024-03-03"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let days = stdout_json(&out);
    let days = days.as_array().expect("array of days");
    assert_eq!(days.len(), 3);
    assert_eq!(days[0]["date"], "2024-03-01");
    assert_eq!(days[2]["window"]["startTime"], "2024-03-03T09:00:00Z");
    assert_eq!(days[2]["window"]["endTime"], "2024-03-03T17:00:00Z");
}

#[test]
fn days_honours_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(
        &config,
        "[schedule]\nday_start = \"08:00:00\"\nday_end = \"12:00:00\"\nutc_offset_minutes = 60\n",
    )
    .unwrap();

    let out = podium(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["days", "--start", "2024-03-01", "--end", "2024-03-01"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let days = stdout_json(&out);
    assert_eq!(days[0]["window"]["startTime"], "2024-03-01T07:00:00Z");
    assert_eq!(days[0]["window"]["endTime"], "2024-03-01T11:00:00Z");
}

#[test]
fn days_rejects_inverted_range() {
    let dir = TempDir::new().unwrap();

    podium(dir.path())
        .args(["days", "--start", "2024-03-03", "--end", "2024-03-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date range"));
}

#[test]
fn order_prints_sessions_by_start() {
    let dir = TempDir::new().unwrap();
    let sessions = write_json(
        &dir,
        "sessions.json",
        &json!([
            session("late", "14:00", "15:00", &[], &[]),
            session("early", "09:00", "10:00", &[], &[]),
            { "id": "draft", "title": "Draft" },
        ]),
    );

    podium(dir.path())
        .args(["order", "--plain", "--sessions"])
        .arg(&sessions)
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "09:00-10:00  early  @ Main Hall\n14:00-15:00  late  @ Main Hall\n--:--  Draft\n",
        ));
}

#[test]
fn missing_explicit_config_is_fatal() {
    let dir = TempDir::new().unwrap();

    podium(dir.path())
        .args(["--config", "does-not-exist.toml", "days", "--start", "2024-03-01", "--end", "2024-03-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}

#[test]
fn order_plain_uses_configured_offset() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("podium.toml");
    fs::write(&config, "[schedule]\nutc_offset_minutes = 120\n").unwrap();
    let sessions = write_json(&dir, "sessions.json", &json!([session("early", "09:00", "10:00", &[], &[])]));

    podium(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["order", "--plain", "--sessions"])
        .arg(&sessions)
        .assert()
        .success()
        .stdout(predicate::str::diff("11:00-12:00  early  @ Main Hall\n"));
}

#[test]
fn check_rejects_malformed_session_times() {
    let dir = TempDir::new().unwrap();
    let mut existing = session("keynote", "10:00", "11:00", &["ada"], &[]);
    existing["startTime"] = json!("2024-03-01 10:00");
    let snapshot = write_json(
        &dir,
        "snapshot.json",
        &json!({
            "sessions": [existing],
            "candidate": session("workshop", "10:30", "11:30", &["ada"], &[]),
        }),
    );

    podium(dir.path())
        .args(["check", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parsing"));
}
