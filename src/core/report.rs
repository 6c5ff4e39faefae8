//! High-level pipeline runner: one named entry point per stage chain so
//! CLI handlers never wire the stages by hand.
//!
//! Data flows strictly forward: normalize -> classify -> filter ->
//! aggregate -> {kpi, ranking}. Aggregation only ever sees a fully
//! classified and filtered batch.

use crate::config::Config;
use crate::core::{aggregate, classify, filter::RecordFilter, kpi, ranking};
use crate::errors::AppResult;
use crate::models::aggregate::{
    AggregateRow, GroupDim, KpiSummary, LowUtilizationFlag, TopPerformer,
};
use crate::models::record::{ClassifiedRecord, Record};

pub struct Engine<'a> {
    cfg: &'a Config,
}

impl<'a> Engine<'a> {
    /// Validates the configuration up front; a broken schedule or a zero
    /// ratio denominator never reaches the computation stages.
    pub fn new(cfg: &'a Config) -> AppResult<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn classify(&self, records: Vec<Record>) -> AppResult<Vec<ClassifiedRecord>> {
        classify::classify_records(records, &self.cfg.schedule)
    }

    pub fn select(
        &self,
        records: &[ClassifiedRecord],
        filter: &RecordFilter,
    ) -> Vec<ClassifiedRecord> {
        filter.apply(records)
    }

    pub fn aggregate(&self, records: &[ClassifiedRecord], dims: &[GroupDim]) -> Vec<AggregateRow> {
        aggregate::aggregate(records, dims, self.cfg.session_hours)
    }

    /// Aggregate rows paired with their KPI annotation.
    pub fn aggregate_with_kpi(
        &self,
        records: &[ClassifiedRecord],
        dims: &[GroupDim],
    ) -> Vec<(AggregateRow, Option<KpiSummary>)> {
        self.aggregate(records, dims)
            .into_iter()
            .map(|row| {
                let summary = kpi::annotate(&row, self.cfg.kpi_target);
                (row, summary)
            })
            .collect()
    }

    pub fn top_performers(&self, records: &[ClassifiedRecord]) -> Vec<TopPerformer> {
        ranking::top_performers_by_day(records, self.cfg.session_hours)
    }

    pub fn low_utilization(&self, records: &[ClassifiedRecord]) -> Vec<LowUtilizationFlag> {
        ranking::low_utilization_flags(
            records,
            self.cfg.session_hours,
            self.cfg.low_utilization_threshold,
        )
    }
}
