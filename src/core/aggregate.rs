//! Aggregation engine: group-then-reduce over any non-empty subset of
//! {day, shift, operator}, with derived ratio metrics.

use crate::models::aggregate::{AggregateRow, GroupDim, GroupKey};
use crate::models::record::ClassifiedRecord;
use std::collections::BTreeMap;

#[derive(Default)]
struct Accumulator {
    total_items: u64,
    session_count: u64,
    total_faulty: u64,
    total_rogue: u64,
}

fn key_for(rec: &ClassifiedRecord, dims: &[GroupDim]) -> GroupKey {
    GroupKey {
        shift_day: dims.contains(&GroupDim::Day).then_some(rec.shift_day),
        shift: dims
            .contains(&GroupDim::Shift)
            .then(|| rec.shift.clone()),
        operator: dims
            .contains(&GroupDim::Operator)
            .then(|| rec.operator().to_string()),
    }
}

/// One AggregateRow per distinct key combination present in `records`.
/// BTreeMap keeps the output in canonical key order (day, shift,
/// operator ascending), which downstream ranking relies on.
///
/// Hours convention: one record is one fixed-length login session, so
/// `hours_worked = session_count * session_hours`. Ratios stay unrounded;
/// a zero denominator yields None, never a sentinel value.
pub fn aggregate(
    records: &[ClassifiedRecord],
    dims: &[GroupDim],
    session_hours: f64,
) -> Vec<AggregateRow> {
    let mut groups: BTreeMap<GroupKey, Accumulator> = BTreeMap::new();

    for rec in records {
        let acc = groups.entry(key_for(rec, dims)).or_default();
        acc.total_items += u64::from(rec.record.items_processed);
        acc.session_count += 1;
        acc.total_faulty += u64::from(rec.record.faulty);
        acc.total_rogue += u64::from(rec.record.rogue);
    }

    groups
        .into_iter()
        .map(|(key, acc)| {
            let avg_per_session = if acc.session_count > 0 {
                Some(acc.total_items as f64 / acc.session_count as f64)
            } else {
                None
            };
            let hours_worked = acc.session_count as f64 * session_hours;
            let avg_per_hour = if hours_worked > 0.0 {
                Some(acc.total_items as f64 / hours_worked)
            } else {
                None
            };
            AggregateRow {
                key,
                total_items: acc.total_items,
                session_count: acc.session_count,
                total_faulty: acc.total_faulty,
                total_rogue: acc.total_rogue,
                avg_per_session,
                avg_per_hour,
            }
        })
        .collect()
}
