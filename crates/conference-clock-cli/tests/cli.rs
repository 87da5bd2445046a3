use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

const IO24: &str = r#"{
    "timezone": "America/Los_Angeles",
    "days": [
        { "start": "2024-05-14T09:00:00-07:00", "end": "2024-05-14T18:00:00-07:00" },
        { "start": "2024-05-15T09:00:00-07:00", "end": "2024-05-15T18:00:00-07:00" },
        { "start": "2024-05-16T09:00:00-07:00", "end": "2024-05-16T18:00:00-07:00" }
    ],
    "features": { "wifi_offering": "2024-05-13T12:00:00-07:00" }
}"#;

fn confclock() -> Command {
    let mut cmd = Command::cargo_bin("confclock").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Set the conference through environment variables, the way a deployment would.
fn with_env(cmd: &mut Command) -> &mut Command {
    cmd.env("CONFERENCE_TIMEZONE", "America/Los_Angeles")
        .env("CONFERENCE_DAY1_START", "2024-05-14T09:00:00-07:00")
        .env("CONFERENCE_DAY1_END", "2024-05-14T18:00:00-07:00")
        .env("CONFERENCE_DAY2_START", "2024-05-15T09:00:00-07:00")
        .env("CONFERENCE_DAY2_END", "2024-05-15T18:00:00-07:00")
        .env("CONFERENCE_DAY3_START", "2024-05-16T09:00:00-07:00")
        .env("CONFERENCE_DAY3_END", "2024-05-16T18:00:00-07:00")
        .env_remove("CONFERENCE_DAY4_START")
        .env_remove("CONFERENCE_DAY4_END")
        .env_remove("CONFERENCE_DAY5_START")
        .env_remove("CONFERENCE_WIFI_OFFERING_START")
}

fn config_file(name: &str, contents: &str) -> PathBuf {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

// ── state ──────────────────────────────────────────────────────────

#[test]
fn test_state_at_start_is_during() {
    confclock()
        .args([
            "state",
            "--start",
            "2024-05-14T09:00:00-07:00",
            "--end",
            "2024-05-14T18:00:00-07:00",
            "--now",
            "2024-05-14T09:00:00-07:00",
        ])
        .assert()
        .success()
        .stdout("DURING\n");
}

#[test]
fn test_state_before_and_after() {
    let slot = [
        "state",
        "--start",
        "2024-05-14T09:00:00-07:00",
        "--end",
        "2024-05-14T18:00:00-07:00",
    ];
    confclock()
        .args(slot)
        .args(["--now", "2024-05-14T08:59:59-07:00"])
        .assert()
        .success()
        .stdout("BEFORE\n");
    confclock()
        .args(slot)
        .args(["--now", "2024-05-15T01:00:01Z"])
        .assert()
        .success()
        .stdout("AFTER\n");
}

#[test]
fn test_state_rejects_bad_timestamp() {
    confclock()
        .args(["state", "--start", "tomorrow", "--end", "2024-05-14T18:00:00-07:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("RFC 3339"));
}

// ── status ─────────────────────────────────────────────────────────

#[test]
fn test_status_mid_conference_from_file() {
    let path = config_file("status_mid.json", IO24);
    let output = confclock()
        .args(["status", "--now", "2024-05-15T12:00:00-07:00", "--config"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let status: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(status["started"], true);
    assert_eq!(status["ended"], false);
    assert_eq!(status["current_day"], "Day 2");
    assert_eq!(status["features"]["wifi_offering"], true);
}

#[test]
fn test_status_before_conference_from_env() {
    let mut cmd = confclock();
    let output = with_env(&mut cmd)
        .args(["status", "--now", "2024-05-14T08:00:00-07:00"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let status: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(status["started"], false);
    assert!(status["current_day"].is_null());
    assert!(status["features"].as_object().unwrap().is_empty());
}

#[test]
fn test_status_bad_config_fails_fast() {
    let path = config_file(
        "status_bad_tz.json",
        &IO24.replace("America/Los_Angeles", "Nowhere/Special"),
    );
    confclock()
        .args(["status", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timezone"));
}

#[test]
fn test_status_gap_in_env_days_fails_fast() {
    let mut cmd = confclock();
    with_env(&mut cmd)
        .env_remove("CONFERENCE_DAY2_START")
        .env_remove("CONFERENCE_DAY2_END")
        .args(["status", "--now", "2024-05-15T12:00:00-07:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFERENCE_DAY3_START"));
}

// ── label ──────────────────────────────────────────────────────────

#[test]
fn test_label_dated_and_plain() {
    let day3 = [
        "label",
        "--start",
        "2024-05-16T09:00:00-07:00",
        "--end",
        "2024-05-16T18:00:00-07:00",
    ];
    let mut cmd = confclock();
    with_env(&mut cmd)
        .args(day3)
        .assert()
        .success()
        .stdout("May 16\n");
    let mut cmd = confclock();
    with_env(&mut cmd)
        .args(day3)
        .arg("--plain")
        .assert()
        .success()
        .stdout("Day 3\n");
}

#[test]
fn test_label_unknown_day_fails() {
    let mut cmd = confclock();
    with_env(&mut cmd)
        .args([
            "label",
            "--start",
            "2024-05-17T09:00:00-07:00",
            "--end",
            "2024-05-17T18:00:00-07:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown conference day"));
}

// ── format ─────────────────────────────────────────────────────────

#[test]
fn test_format_range() {
    confclock()
        .args([
            "format",
            "--start",
            "2024-05-14T11:30:00-07:00",
            "--end",
            "2024-05-14T12:30:00-07:00",
            "--tz",
            "America/Los_Angeles",
        ])
        .assert()
        .success()
        .stdout("Tue, May 14, 11:30 AM - 12:30 PM\n");
}

#[test]
fn test_format_abbreviated_uses_conference_zone() {
    let mut cmd = confclock();
    with_env(&mut cmd)
        .args(["format", "--abbreviated", "--start", "2024-05-15T02:00:00Z"])
        .assert()
        .success()
        .stdout("Tue, May 14\n");
}

#[test]
fn test_format_unknown_locale_fails() {
    confclock()
        .args([
            "format",
            "--start",
            "2024-05-14T11:30:00-07:00",
            "--tz",
            "UTC",
            "--locale",
            "xx_NOPE",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown locale"));
}
