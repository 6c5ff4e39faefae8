//! CSV ingestion: reads the raw export file into normalized Records.
//! Malformed rows are collected into the ingest report (count plus a
//! sample) so one bad row never aborts the batch.

use crate::core::normalize::{ParseFailure, normalize_row};
use crate::errors::AppResult;
use crate::models::record::{RawRow, Record};
use std::path::Path;

#[derive(Debug, Default)]
pub struct IngestReport {
    pub rows_read: usize,
    pub failures: Vec<ParseFailure>,
}

impl IngestReport {
    pub fn accepted(&self) -> usize {
        self.rows_read - self.failures.len()
    }

    /// Human-readable one-liner plus up to `sample` failure details.
    pub fn summary(&self, sample: usize) -> String {
        let mut out = format!(
            "{} rows read, {} accepted, {} failed",
            self.rows_read,
            self.accepted(),
            self.failures.len()
        );
        for f in self.failures.iter().take(sample) {
            out.push_str(&format!("\n  row {}: {} ({})", f.line, f.reason, f.field));
        }
        if self.failures.len() > sample {
            out.push_str(&format!("\n  ... and {} more", self.failures.len() - sample));
        }
        out
    }
}

/// Read and normalize a CSV file. Reader-level errors (missing file,
/// broken header) are fatal; row-level errors go into the report.
pub fn read_csv(path: &Path) -> AppResult<(Vec<Record>, IngestReport)> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    let mut report = IngestReport::default();

    for (idx, row) in reader.deserialize::<RawRow>().enumerate() {
        let line = idx + 1;
        report.rows_read += 1;
        match row {
            Ok(raw) => match normalize_row(&raw, line) {
                Ok(rec) => records.push(rec),
                Err(failure) => report.failures.push(failure),
            },
            Err(e) => report.failures.push(ParseFailure {
                line,
                field: "row",
                reason: e.to_string(),
            }),
        }
    }

    Ok((records, report))
}
