//! Record models: the raw CSV row, the normalized record, and the record
//! with derived shift attribution.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One row of the raw input CSV, column names as produced upstream.
/// Counts arrive as strings so that a malformed cell is reported as a
/// per-row parse failure instead of aborting the whole file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Operation")]
    pub operation: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Drawers Processed")]
    pub drawers_processed: String,
    #[serde(rename = "Faulty")]
    pub faulty: String,
    #[serde(rename = "Rogue")]
    pub rogue: String,
}

/// One disassembly session, normalized. Immutable after ingestion; the
/// engine only derives new data alongside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub operator: String,
    pub timestamp: NaiveDateTime,
    pub items_processed: u32,
    pub faulty: u32,
    pub rogue: u32,
}

impl Record {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }
}

/// A record plus its shift attribution: the named shift whose window
/// contains the timestamp, and the shift day it reports under (previous
/// calendar date for the early-morning tail of an overnight shift).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedRecord {
    #[serde(flatten)]
    pub record: Record,
    pub shift: String,
    pub shift_day: NaiveDate,
}

impl ClassifiedRecord {
    pub fn operator(&self) -> &str {
        &self.record.operator
    }

    pub fn time(&self) -> NaiveTime {
        self.record.time()
    }

    pub fn date(&self) -> NaiveDate {
        self.record.date()
    }
}
