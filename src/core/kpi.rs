//! KPI comparator: classifies a throughput metric against the configured
//! target. The target unit is items per hour and it is only ever compared
//! against the per-hour metric, never multiplied by shift length.

use crate::models::aggregate::{AggregateRow, KpiStatus, KpiSummary};

/// Compare one metric value against the target.
pub fn compare(metric: f64, target: f64) -> KpiSummary {
    let status = if metric >= target {
        KpiStatus::MeetsOrExceeds
    } else {
        KpiStatus::Below
    };
    let percent_of_target = if target != 0.0 {
        Some(metric / target * 100.0)
    } else {
        None
    };
    KpiSummary {
        status,
        diff_from_target: metric - target,
        percent_of_target,
    }
}

/// KPI annotation for an aggregate row's per-hour throughput. None when
/// the row has no defined per-hour metric.
pub fn annotate(row: &AggregateRow, target: f64) -> Option<KpiSummary> {
    row.avg_per_hour.map(|metric| compare(metric, target))
}
