//! Record normalizer: cleans raw operation labels and parses day-first
//! timestamps. Per-row failures are collected, never thrown; one bad row
//! must not abort the batch.

use crate::models::record::{RawRow, Record};
use crate::utils::time::parse_timestamp;
use regex::Regex;
use std::sync::LazyLock;

static MARKERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\*]").unwrap());

/// One row that failed normalization, with enough context to report it.
#[derive(Debug, Clone)]
pub struct ParseFailure {
    /// 1-based data row number in the source file.
    pub line: usize,
    pub field: &'static str,
    pub reason: String,
}

impl ParseFailure {
    fn new(line: usize, field: &'static str, reason: String) -> Self {
        Self {
            line,
            field,
            reason,
        }
    }
}

/// Strip `*` markers and surrounding whitespace from an operation label.
/// Returns None when nothing remains: labels differing only by markers or
/// whitespace must collapse to the same operator identity.
pub fn normalize_operator(raw: &str) -> Option<String> {
    let cleaned = MARKERS.replace_all(raw, "");
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalize one raw row into a Record.
pub fn normalize_row(row: &RawRow, line: usize) -> Result<Record, ParseFailure> {
    let operator = normalize_operator(&row.operation).ok_or_else(|| {
        ParseFailure::new(
            line,
            "Operation",
            format!("empty operator after normalization: {:?}", row.operation),
        )
    })?;

    let timestamp = parse_timestamp(&row.date).ok_or_else(|| {
        ParseFailure::new(line, "Date", format!("unparseable date: {:?}", row.date))
    })?;

    let items_processed = parse_count(&row.drawers_processed)
        .map_err(|reason| ParseFailure::new(line, "Drawers Processed", reason))?;
    let faulty = parse_count(&row.faulty).map_err(|reason| ParseFailure::new(line, "Faulty", reason))?;
    let rogue = parse_count(&row.rogue).map_err(|reason| ParseFailure::new(line, "Rogue", reason))?;

    Ok(Record {
        operator,
        timestamp,
        items_processed,
        faulty,
        rogue,
    })
}

fn parse_count(raw: &str) -> Result<u32, String> {
    let s = raw.trim();
    if s.is_empty() {
        return Err("missing count".to_string());
    }
    s.parse::<u32>()
        .map_err(|_| format!("invalid non-negative count: {:?}", raw))
}
