pub mod aggregate;
pub mod record;
pub mod schedule;
