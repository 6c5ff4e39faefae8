//! Aggregation result models: group keys, aggregate rows, KPI annotations,
//! and the ranking/flag outputs. Plain serializable structs handed to the
//! presentation side (tables, JSON).

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::Serialize;

/// One grouping dimension. Any non-empty subset may be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupDim {
    Day,
    Shift,
    Operator,
}

/// Parse a comma-separated `--group-by` expression, e.g. "day,operator".
pub fn parse_group_by(raw: &str) -> AppResult<Vec<GroupDim>> {
    let mut dims = Vec::new();
    for part in raw.split(',') {
        let dim = match part.trim().to_lowercase().as_str() {
            "day" => GroupDim::Day,
            "shift" => GroupDim::Shift,
            "operator" => GroupDim::Operator,
            other => return Err(AppError::InvalidGroupBy(other.to_string())),
        };
        if !dims.contains(&dim) {
            dims.push(dim);
        }
    }
    if dims.is_empty() {
        return Err(AppError::InvalidGroupBy("empty group-by list".to_string()));
    }
    Ok(dims)
}

/// Group key over the requested dimensions. Unused dimensions stay None.
/// Ord gives the canonical result order: day, then shift, then operator,
/// ascending. The ranking tie-break relies on this order being stable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct GroupKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_day: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
}

/// Sums and derived ratios for one group. Ratios are None when their
/// denominator is zero; they are kept unrounded until presentation.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateRow {
    #[serde(flatten)]
    pub key: GroupKey,
    pub total_items: u64,
    pub session_count: u64,
    pub total_faulty: u64,
    pub total_rogue: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_per_session: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_per_hour: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KpiStatus {
    MeetsOrExceeds,
    Below,
}

impl KpiStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KpiStatus::MeetsOrExceeds => "Meets/Exceeds",
            KpiStatus::Below => "Below",
        }
    }
}

/// KPI annotation for one aggregate row's throughput metric.
#[derive(Debug, Clone, Serialize)]
pub struct KpiSummary {
    pub status: KpiStatus,
    pub diff_from_target: f64,
    /// None when the configured target is zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_of_target: Option<f64>,
}

/// Top operator of one shift day, shifts combined.
#[derive(Debug, Clone, Serialize)]
pub struct TopPerformer {
    pub shift_day: NaiveDate,
    pub operator: String,
    pub avg_per_session: f64,
    pub session_count: u64,
    pub total_items: u64,
}

/// An operator/day pair whose session count sits at or below the
/// configured minimum.
#[derive(Debug, Clone, Serialize)]
pub struct LowUtilizationFlag {
    pub shift_day: NaiveDate,
    pub operator: String,
    pub session_count: u64,
}
