//! Shift schedule model: an ordered set of named time-of-day windows
//! covering the full 24-hour cycle, with at most one window wrapping
//! past midnight (the rollover shift).

use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One named shift window, half-open `[start, end)`.
/// A window with `start > end` wraps past midnight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShiftWindow {
    pub name: String,
    #[serde(serialize_with = "ser_time", deserialize_with = "de_time")]
    pub start: NaiveTime,
    #[serde(serialize_with = "ser_time", deserialize_with = "de_time")]
    pub end: NaiveTime,
}

impl ShiftWindow {
    /// An end of exactly 00:00 closes the window at the end of the day;
    /// only a window whose interval genuinely crosses midnight wraps.
    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end && self.end != NaiveTime::MIN
    }

    /// Membership test, start inclusive, end exclusive.
    pub fn contains(&self, t: NaiveTime) -> bool {
        if self.wraps_midnight() {
            t >= self.start || t < self.end
        } else if self.end == NaiveTime::MIN {
            // [start, 24:00): every time from start to the end of the day.
            t >= self.start
        } else {
            t >= self.start && t < self.end
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ShiftSchedule {
    pub windows: Vec<ShiftWindow>,
}

impl Default for ShiftSchedule {
    fn default() -> Self {
        let w = |name: &str, start: &str, end: &str| ShiftWindow {
            name: name.to_string(),
            start: parse_time(start).unwrap(),
            end: parse_time(end).unwrap(),
        };
        Self {
            windows: vec![
                w("AM", "06:00", "14:00"),
                w("PM", "14:00", "22:00"),
                w("Night", "22:00", "06:00"),
            ],
        }
    }
}

impl ShiftSchedule {
    /// Check that the windows cover the full 24-hour cycle with no gaps or
    /// overlaps and at most one window wrapping past midnight. Must be run
    /// before any classification; a bad schedule is fatal to the run.
    pub fn validate(&self) -> AppResult<()> {
        if self.windows.is_empty() {
            return Err(AppError::InvalidSchedule("no shift windows".to_string()));
        }
        for w in &self.windows {
            if w.start == w.end {
                return Err(AppError::InvalidSchedule(format!(
                    "shift '{}' has zero length",
                    w.name
                )));
            }
        }
        let wrapping = self.windows.iter().filter(|w| w.wraps_midnight()).count();
        if wrapping > 1 {
            return Err(AppError::InvalidSchedule(
                "more than one shift wraps past midnight".to_string(),
            ));
        }

        // Sorted by start, each window must end exactly where the next one
        // starts, closing the cycle back to the first window.
        let mut sorted: Vec<&ShiftWindow> = self.windows.iter().collect();
        sorted.sort_by_key(|w| w.start);
        for i in 0..sorted.len() {
            let cur = sorted[i];
            let next = sorted[(i + 1) % sorted.len()];
            if cur.end != next.start {
                return Err(AppError::InvalidSchedule(format!(
                    "gap or overlap between '{}' (ends {}) and '{}' (starts {})",
                    cur.name,
                    cur.end.format("%H:%M"),
                    next.name,
                    next.start.format("%H:%M"),
                )));
            }
        }
        Ok(())
    }

    /// Interval lookup: the window containing `t`. A validated schedule
    /// always matches; boundaries belong to the shift that starts there.
    pub fn classify(&self, t: NaiveTime) -> Option<&ShiftWindow> {
        self.windows.iter().find(|w| w.contains(t))
    }

    /// The rollover window, if the schedule has one.
    pub fn rollover(&self) -> Option<&ShiftWindow> {
        self.windows.iter().find(|w| w.wraps_midnight())
    }

    pub fn shift_names(&self) -> Vec<String> {
        self.windows.iter().map(|w| w.name.clone()).collect()
    }
}

fn ser_time<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&t.format("%H:%M").to_string())
}

fn de_time<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
    let raw = String::deserialize(d)?;
    parse_time(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid time: {raw}")))
}
