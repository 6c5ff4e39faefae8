//! Record filter: four independent predicates whose intersection narrows
//! the classified batch. Pure: always returns a new Vec.

use crate::models::record::ClassifiedRecord;
use crate::utils::time::time_in_window;
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Keep only these operators (normalized names). None keeps all.
    pub operators: Option<BTreeSet<String>>,
    /// Keep only these shift names. None keeps all.
    pub shifts: Option<BTreeSet<String>>,
    /// Inclusive calendar-date range, applied to the record's own date,
    /// not the derived shift day.
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    /// Inclusive time-of-day window; start > end wraps past midnight.
    /// Independent of the shift-day rollover rule.
    pub window: Option<(NaiveTime, NaiveTime)>,
}

impl RecordFilter {
    pub fn matches(&self, rec: &ClassifiedRecord) -> bool {
        if let Some(ops) = &self.operators
            && !ops.contains(rec.operator())
        {
            return false;
        }
        if let Some(shifts) = &self.shifts
            && !shifts.contains(&rec.shift)
        {
            return false;
        }
        if let Some(from) = self.from
            && rec.date() < from
        {
            return false;
        }
        if let Some(to) = self.to
            && rec.date() > to
        {
            return false;
        }
        if let Some((start, end)) = self.window
            && !time_in_window(rec.time(), start, end)
        {
            return false;
        }
        true
    }

    pub fn apply(&self, records: &[ClassifiedRecord]) -> Vec<ClassifiedRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}
