use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn rolldate() -> Command {
    Command::cargo_bin("rolldate").unwrap()
}

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("rolldate-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn resolve_nth_weekday() {
    rolldate()
        .args(["resolve", "--date", "2024-11-20", "--kind", "1", "0/1/1"])
        .assert()
        .success()
        .stdout(predicate::eq("2024-11-04\n"));
}

#[test]
fn resolve_month_edge_with_negative_offset() {
    rolldate()
        .args(["resolve", "--date", "2024-11-20", "--kind", "2", "-1F"])
        .assert()
        .success()
        .stdout(predicate::eq("2024-10-01\n"));
}

#[test]
fn resolve_json_record() {
    rolldate()
        .args([
            "resolve", "--date", "2024-11-20", "--kind", "1", "--json", "-2/3/2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"target\": \"2024-09-11\""))
        .stdout(predicate::str::contains("\"weekday\": \"Wed\""));
}

#[test]
fn resolve_malformed_pattern_fails_with_field_context() {
    rolldate()
        .args(["resolve", "--date", "2024-11-20", "--kind", "1", "abc/1/1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("month offset"));
}

#[test]
fn resolve_unknown_kind_fails() {
    rolldate()
        .args(["resolve", "--date", "2024-11-20", "--kind", "9", "0/1/1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid query kind 9"));
}

#[test]
fn expiry_thursday() {
    rolldate()
        .args(["expiry", "--year", "2024", "--month", "11"])
        .assert()
        .success()
        .stdout(predicate::eq("2024-11-28\n"));
}

#[test]
fn expiry_roll_session() {
    rolldate()
        .args(["expiry", "--year", "2024", "--month", "12", "--roll"])
        .assert()
        .success()
        .stdout(predicate::eq("2024-11-29\n"));
}

#[test]
fn expiry_rejects_bad_month() {
    rolldate()
        .args(["expiry", "--year", "2024", "--month", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("month must be in 1-12"));
}

#[test]
fn vol_prints_one_line_per_row() {
    let path = write_temp(
        "vol.csv",
        "dt,px\n2024-11-18,100.0\n2024-11-19,101.0\n2024-11-20,102.0\n",
    );
    rolldate()
        .args([
            "vol",
            "--file",
            path.to_str().unwrap(),
            "--column",
            "Close",
            "--lookback",
            "2",
            "--rename",
            "dt=Date",
            "--rename",
            "px=Close",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-11-18,0.250000"))
        .stdout(predicate::str::contains("2024-11-20,"));
    std::fs::remove_file(path).unwrap();
}

#[test]
fn vol_missing_column_fails() {
    let path = write_temp("vol-miss.csv", "Date,px\n2024-11-18,100.0\n");
    rolldate()
        .args(["vol", "--file", path.to_str().unwrap(), "--column", "Close"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no column 'Close'"));
    std::fs::remove_file(path).unwrap();
}
