//! Shift classifier: attaches (shift, shift_day) to each record via
//! interval lookup in the configured schedule.

use crate::errors::{AppError, AppResult};
use crate::models::record::{ClassifiedRecord, Record};
use crate::models::schedule::ShiftSchedule;
use chrono::Duration;

/// Classify one record. A timestamp exactly on a boundary belongs to the
/// shift that starts there. When the matched window wraps midnight and the
/// time-of-day falls in its early-morning tail (before the cycle's
/// start-of-day boundary), the session reports under the previous day.
pub fn classify_record(record: Record, schedule: &ShiftSchedule) -> AppResult<ClassifiedRecord> {
    let time = record.time();
    let window = schedule.classify(time).ok_or_else(|| {
        AppError::InvalidSchedule(format!(
            "no shift window covers {}",
            time.format("%H:%M:%S")
        ))
    })?;

    let shift_day = if window.wraps_midnight() && time < window.end {
        record.date() - Duration::days(1)
    } else {
        record.date()
    };

    Ok(ClassifiedRecord {
        shift: window.name.clone(),
        shift_day,
        record,
    })
}

/// Classify a whole batch. The schedule must already be validated, so a
/// lookup miss here is a configuration bug and fails the run.
pub fn classify_records(
    records: Vec<Record>,
    schedule: &ShiftSchedule,
) -> AppResult<Vec<ClassifiedRecord>> {
    records
        .into_iter()
        .map(|r| classify_record(r, schedule))
        .collect()
}
