//! One handler per subcommand, plus the glue shared by the data
//! subcommands (filter construction, ingestion, empty-result signal).

pub mod classify;
pub mod config;
pub mod flags;
pub mod init;
pub mod report;
pub mod top;

use crate::cli::parser::FilterArgs;
use crate::core::filter::RecordFilter;
use crate::core::normalize::normalize_operator;
use crate::core::report::Engine;
use crate::errors::{AppError, AppResult};
use crate::ingest;
use crate::models::record::ClassifiedRecord;
use crate::utils::time::{parse_date, parse_window};
use std::collections::BTreeSet;
use std::path::Path;

pub const NO_DATA_MSG: &str = "No data found for the selected filters.";

/// Translate the CLI filter arguments into engine predicates.
/// Operator names go through the same normalization as the data, so
/// `--operators "ALICE*"` matches the cleaned identity.
pub fn build_filter(args: &FilterArgs) -> AppResult<RecordFilter> {
    let operators = args.operators.as_ref().map(|raw| {
        raw.split(',')
            .filter_map(normalize_operator)
            .collect::<BTreeSet<String>>()
    });

    let shifts = args.shifts.as_ref().map(|raw| {
        raw.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<BTreeSet<String>>()
    });

    let from = args.from.as_deref().map(parse_date).transpose()?;
    let to = args.to.as_deref().map(parse_date).transpose()?;
    if let (Some(f), Some(t)) = (from, to)
        && f > t
    {
        return Err(AppError::InvalidDate(format!(
            "date range start {f} is after end {t}"
        )));
    }

    let window = args.between.as_deref().map(parse_window).transpose()?;

    Ok(RecordFilter {
        operators,
        shifts,
        from,
        to,
        window,
    })
}

/// Ingest, classify and filter one input file. The ingest summary goes to
/// stderr so stdout stays clean for the result tables.
pub fn load_batch(
    file: &str,
    engine: &Engine,
    filter: &RecordFilter,
) -> AppResult<Vec<ClassifiedRecord>> {
    let (records, report) = ingest::read_csv(Path::new(file))?;
    eprintln!("{}", report.summary(3));

    let classified = engine.classify(records)?;
    Ok(engine.select(&classified, filter))
}
