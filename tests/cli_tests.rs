use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{SCENARIO_CSV, sm, write_fixture};

fn write_config(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftmetrics.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("failed to write config");
    p
}

#[test]
fn test_report_day_shift_operator_against_target() {
    let csv = write_fixture("report_e2e", SCENARIO_CSV);

    sm().args([
        "report",
        &csv,
        "--group-by",
        "day,shift,operator",
        "--target",
        "130",
    ])
    .assert()
    .success()
    .stdout(contains("ALICE"))
    .stdout(contains("BOB"))
    .stdout(contains("2024-01-01"))
    // ALICE AM: 140/h, +10 over target
    .stdout(contains("Meets/Exceeds"))
    .stdout(contains("+10.0"))
    // ALICE PM misses by 30, BOB Night by 40
    .stdout(contains("Below"))
    .stdout(contains("-30.0"))
    .stdout(contains("-40.0"));
}

#[test]
fn test_report_json_format() {
    let csv = write_fixture("report_json", SCENARIO_CSV);

    sm().args(["report", &csv, "--group-by", "operator", "--format", "json"])
        .assert()
        .success()
        .stdout(contains("\"operator\": \"ALICE\""))
        .stdout(contains("\"total_items\": 240"))
        .stdout(contains("\"session_count\": 2"));
}

#[test]
fn test_classify_rolls_night_session_to_previous_day() {
    let csv = write_fixture("classify_rollover", SCENARIO_CSV);

    // BOB logs at 23:30 on 01/01: Night shift, shift day 2024-01-01.
    sm().args(["classify", &csv, "--operators", "BOB"])
        .assert()
        .success()
        .stdout(contains("Night"))
        .stdout(contains("2024-01-01"))
        .stdout(contains("ALICE").not());
}

#[test]
fn test_time_window_filter_wraps_midnight() {
    let csv = write_fixture("classify_window", SCENARIO_CSV);

    sm().args(["classify", &csv, "--between", "22:00-06:00"])
        .assert()
        .success()
        .stdout(contains("BOB"))
        .stdout(contains("ALICE").not());
}

#[test]
fn test_top_performer_combines_shifts() {
    let csv = write_fixture("top_e2e", SCENARIO_CSV);

    // ALICE averages 120 across her AM and PM sessions, beating BOB's 90.
    sm().args(["top", &csv])
        .assert()
        .success()
        .stdout(contains("ALICE"))
        .stdout(contains("120.0"))
        .stdout(contains("BOB").not());
}

#[test]
fn test_flags_respect_threshold() {
    let csv = write_fixture("flags_e2e", SCENARIO_CSV);

    // Only BOB has a single session on his shift day.
    sm().args(["flags", &csv])
        .assert()
        .success()
        .stdout(contains("BOB"))
        .stdout(contains("ALICE").not());

    sm().args(["flags", &csv, "--threshold", "2"])
        .assert()
        .success()
        .stdout(contains("BOB"))
        .stdout(contains("ALICE"));
}

#[test]
fn test_empty_result_is_a_message_not_an_error() {
    let csv = write_fixture("empty_result", SCENARIO_CSV);

    sm().args(["report", &csv, "--operators", "CHARLIE"])
        .assert()
        .success()
        .stdout(contains("No data found for the selected filters."));
}

#[test]
fn test_bad_rows_are_collected_not_fatal() {
    let csv = write_fixture(
        "bad_rows",
        "Operation,Date,Drawers Processed,Faulty,Rogue\n\
         ALICE,01/01/24 07:00,140,0,0\n\
         BOB,not-a-date,90,0,0\n\
         **,01/01/24 08:00,50,0,0\n",
    );

    sm().args(["report", &csv])
        .assert()
        .success()
        .stderr(contains("3 rows read, 1 accepted, 2 failed"))
        .stderr(contains("not-a-date"))
        .stdout(contains("ALICE"));
}

#[test]
fn test_missing_file_is_fatal() {
    sm().args(["report", "/no/such/file.csv"])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

#[test]
fn test_config_check_rejects_schedule_gap() {
    let cfg = write_config(
        "gap_schedule",
        "schedule:\n\
         - { name: AM, start: \"06:00\", end: \"13:00\" }\n\
         - { name: PM, start: \"14:00\", end: \"22:00\" }\n\
         - { name: Night, start: \"22:00\", end: \"06:00\" }\n\
         session_hours: 1.0\n\
         kpi_target: 130.0\n\
         low_utilization_threshold: 1\n",
    );

    sm().args(["--config", &cfg, "config", "--check"])
        .assert()
        .failure()
        .stderr(contains("Invalid shift schedule"));
}

#[test]
fn test_config_print_shows_defaults() {
    sm().args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("kpi_target: 130"))
        .stdout(contains("name: Night"));
}

#[test]
fn test_custom_session_hours_changes_per_hour_metric() {
    let csv = write_fixture("session_hours", SCENARIO_CSV);
    let cfg = write_config(
        "eight_hour_sessions",
        "session_hours: 8.0\n\
         kpi_target: 15.0\n",
    );

    // One login = one 8-hour shift: ALICE 240/16h = 15.0/h meets the
    // per-hour target exactly, BOB 90/8h = 11.25/h misses it.
    sm().args(["--config", &cfg, "report", &csv, "--group-by", "operator"])
        .assert()
        .success()
        .stdout(contains("15.0"))
        .stdout(contains("Meets/Exceeds"))
        .stdout(contains("Below"));
}

#[test]
fn test_init_writes_config_file() {
    let mut home: PathBuf = env::temp_dir();
    home.push("shiftmetrics_init_home");
    fs::create_dir_all(&home).unwrap();

    sm().env("HOME", &home)
        .env("APPDATA", &home)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Config file"));
}
