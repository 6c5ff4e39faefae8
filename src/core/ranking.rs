//! Ranking and anomaly selection: per-day top performer and
//! low-utilization flags, both explicit group-then-reduce operations.

use crate::core::aggregate::aggregate;
use crate::models::aggregate::{GroupDim, LowUtilizationFlag, TopPerformer};
use crate::models::record::ClassifiedRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

const DAY_OPERATOR: [GroupDim; 2] = [GroupDim::Day, GroupDim::Operator];

/// For each shift day, the operator with the highest average items per
/// session, shifts combined. Ties break to the ascending-first operator
/// name: the (day, operator) rows arrive in that order and only a
/// strictly greater average displaces the current best.
pub fn top_performers_by_day(
    records: &[ClassifiedRecord],
    session_hours: f64,
) -> Vec<TopPerformer> {
    let rows = aggregate(records, &DAY_OPERATOR, session_hours);

    let mut best: BTreeMap<NaiveDate, TopPerformer> = BTreeMap::new();
    for row in rows {
        let (Some(day), Some(operator), Some(avg)) =
            (row.key.shift_day, row.key.operator.clone(), row.avg_per_session)
        else {
            continue;
        };
        let candidate = TopPerformer {
            shift_day: day,
            operator,
            avg_per_session: avg,
            session_count: row.session_count,
            total_items: row.total_items,
        };
        match best.get(&day) {
            Some(cur) if candidate.avg_per_session <= cur.avg_per_session => {}
            _ => {
                best.insert(day, candidate);
            }
        }
    }

    best.into_values().collect()
}

/// Flag every (shift day, operator) pair with at most `threshold`
/// sessions. A pure predicate over the aggregate rows; the underlying
/// data is untouched.
pub fn low_utilization_flags(
    records: &[ClassifiedRecord],
    session_hours: f64,
    threshold: u64,
) -> Vec<LowUtilizationFlag> {
    aggregate(records, &DAY_OPERATOR, session_hours)
        .into_iter()
        .filter(|row| row.session_count <= threshold)
        .filter_map(|row| {
            let (Some(day), Some(operator)) = (row.key.shift_day, row.key.operator) else {
                return None;
            };
            Some(LowUtilizationFlag {
                shift_day: day,
                operator,
                session_count: row.session_count,
            })
        })
        .collect()
}
