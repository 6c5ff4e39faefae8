pub mod aggregate;
pub mod classify;
pub mod filter;
pub mod kpi;
pub mod normalize;
pub mod ranking;
pub mod report;
