use assert_cmd::Command;
use predicates::prelude::*;

fn oncall_shift() -> Command {
    let mut cmd = Command::cargo_bin("oncall-shift").unwrap();
    for var in [
        "ONCALL_ENDPOINT",
        "ONCALL_USERNAME",
        "ONCALL_PASSWORD",
        "ONCALL_AUTH_TYPE",
        "ONCALL_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

// ── encode / decode ─────────────────────────────────────────────────────

#[test]
fn test_encode_prints_seconds() {
    oncall_shift()
        .args(["encode", "Monday", "23:58"])
        .assert()
        .success()
        .stdout("172680\n");
}

#[test]
fn test_encode_rejects_twelve_hour_time() {
    oncall_shift()
        .args(["encode", "Friday", "11:30 PM"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid shift start"))
        .stderr(predicate::str::contains("Malformed time"));
}

#[test]
fn test_encode_rejects_unknown_day() {
    oncall_shift()
        .args(["encode", "Oliverday", "23:58"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown weekday"));
}

#[test]
fn test_decode_prints_json() {
    let output = oncall_shift()
        .args(["decode", "172680"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["weekday_index"], 1);
    assert_eq!(json["weekday"], "Monday");
    assert_eq!(json["start_time"], "23:58");
}

#[test]
fn test_decode_past_end_of_week() {
    let output = oncall_shift()
        .args(["decode", "694800"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["weekday_index"], 8);
    assert!(json["weekday"].is_null());
    assert_eq!(json["start_time"], "01:00");
}

// ── duration ────────────────────────────────────────────────────────────

#[test]
fn test_duration_parse() {
    oncall_shift()
        .args(["duration", "parse", "1h30m"])
        .assert()
        .success()
        .stdout("5400\n");
}

#[test]
fn test_duration_parse_rejects_garbage() {
    oncall_shift()
        .args(["duration", "parse", "1.5h"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed duration"));
}

#[test]
fn test_duration_format() {
    oncall_shift()
        .args(["duration", "format", "691260"])
        .assert()
        .success()
        .stdout("1w1d1m\n");
}

#[test]
fn test_duration_format_zero_is_blank() {
    oncall_shift()
        .args(["duration", "format", "0"])
        .assert()
        .success()
        .stdout("\n");
}

// ── schedule ────────────────────────────────────────────────────────────

const ADVANCED: &str = r#"{
    "kind": "advanced",
    "role": "primary",
    "roster_id": "sre/rotation",
    "scheduling_algorithm": "round-robin",
    "shifts": [
        { "start_day_of_week": "monday", "start_time": "9:00", "duration": "90m" }
    ]
}"#;

#[test]
fn test_schedule_build_from_stdin() {
    let output = oncall_shift()
        .args(["schedule", "build"])
        .write_stdin(ADVANCED)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["team"], "sre");
    assert_eq!(json["roster"], "rotation");
    assert_eq!(json["advanced_mode"], 1);
    assert_eq!(json["auto_populate_threshold"], 21);
    assert_eq!(json["scheduler"]["name"], "round-robin");
    assert_eq!(json["events"][0]["start"], 86400 + 9 * 3600);
    assert_eq!(json["events"][0]["duration"], 5400);
}

#[test]
fn test_schedule_build_from_file() {
    let path = std::env::temp_dir().join(format!(
        "oncall-shift-build-{}.json",
        std::process::id()
    ));
    std::fs::write(&path, ADVANCED).unwrap();
    oncall_shift()
        .args(["schedule", "build", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"advanced_mode\": 1"));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_schedule_build_reports_shift() {
    let bad = ADVANCED.replace("90m", "90 minutes");
    oncall_shift()
        .args(["schedule", "build"])
        .write_stdin(bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("building schedule sre/rotation/primary"))
        .stderr(predicate::str::contains("shift 1"));
}

#[test]
fn test_schedule_build_requires_shifts() {
    let empty = r#"{
        "kind": "advanced",
        "role": "primary",
        "roster_id": "sre/rotation",
        "shifts": []
    }"#;
    oncall_shift()
        .args(["schedule", "build"])
        .write_stdin(empty)
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs at least one shift"));

    oncall_shift()
        .args(["schedule", "build"])
        .write_stdin(r#"{"kind": "advanced", "role": "primary", "roster_id": "sre/rotation"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing field `shifts`"));
}

#[test]
fn test_schedule_read_normalizes() {
    let payload = r#"{
        "role": "primary",
        "team": "sre",
        "roster": "rotation",
        "auto_populate_threshold": 21,
        "advanced_mode": 0,
        "events": [{ "start": 0, "duration": 1209600 }],
        "scheduler": { "name": "default" }
    }"#;
    let output = oncall_shift()
        .args(["schedule", "read"])
        .write_stdin(payload)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["kind"], "basic");
    assert_eq!(json["start_day_of_week"], "Sunday");
    assert_eq!(json["start_time"], "00:00");
    assert_eq!(json["rotate_frequency"], "bi-weekly");
    assert_eq!(json["roster_id"], "sre/rotation");
}

// ── config ──────────────────────────────────────────────────────────────

#[test]
fn test_config_from_env_hides_password() {
    oncall_shift()
        .arg("config")
        .env("ONCALL_ENDPOINT", "https://oncall.example.com/")
        .env("ONCALL_PASSWORD", "hunter2")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"endpoint\": \"https://oncall.example.com\""))
        .stdout(predicate::str::contains("\"auth_type\": \"user\""))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn test_config_requires_endpoint() {
    oncall_shift()
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ONCALL_ENDPOINT"));
}
