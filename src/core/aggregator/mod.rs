//! Hours aggregator: reduces punches and approved leave into worked minutes
//! per day, per worker and for the whole crew.

pub mod day;
pub mod leave;
pub mod period;

pub use period::{AggregateReport, aggregate};
