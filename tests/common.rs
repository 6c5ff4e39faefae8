#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use shiftmetrics::models::record::{ClassifiedRecord, Record};
use shiftmetrics::models::schedule::ShiftSchedule;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sm() -> Command {
    cargo_bin_cmd!("shiftmetrics")
}

/// Write a fixture file inside the system temp dir and return its path.
pub fn write_fixture(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftmetrics.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("failed to write fixture");
    p
}

/// Small dataset shared by the CLI tests: two ALICE sessions (AM and
/// PM) and one BOB session just before midnight.
pub const SCENARIO_CSV: &str = "\
Operation,Date,Drawers Processed,Faulty,Rogue
*ALICE ,01/01/24 07:00,140,0,0
ALICE,01/01/24 15:00,100,0,0
BOB,01/01/24 23:30,90,0,0
";

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn ts(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    ymd(y, m, d).and_hms_opt(h, min, s).unwrap()
}

pub fn record(operator: &str, timestamp: NaiveDateTime, items: u32) -> Record {
    Record {
        operator: operator.to_string(),
        timestamp,
        items_processed: items,
        faulty: 0,
        rogue: 0,
    }
}

/// Classify a set of records against the default AM/PM/Night schedule.
pub fn classify_default(records: Vec<Record>) -> Vec<ClassifiedRecord> {
    let schedule = ShiftSchedule::default();
    shiftmetrics::core::classify::classify_records(records, &schedule)
        .expect("classification failed")
}
