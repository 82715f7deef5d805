//! Derived values produced by the hours aggregator. Never persisted.

use chrono::NaiveDate;
use serde::Serialize;

/// What the presentation layer receives for a duration: either real minutes
/// or a marker meaning nothing contributed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "minutes", rename_all = "snake_case")]
pub enum Reported {
    NoData,
    Minutes(f64),
}

impl Reported {
    /// A zero total carries no information, so it is reported as `NoData`.
    pub fn from_minutes(minutes: f64) -> Self {
        if minutes == 0.0 {
            Reported::NoData
        } else {
            Reported::Minutes(minutes)
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Reported::NoData)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayAggregate {
    pub date: NaiveDate,
    pub worker_id: String,
    pub worked_minutes: f64,
}

impl DayAggregate {
    pub fn reported(&self) -> Reported {
        Reported::from_minutes(self.worked_minutes)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodTotal {
    pub worker_id: String,
    pub worked_minutes: f64,
    pub leave_minutes: f64,
    pub total_minutes: f64,
}

impl PeriodTotal {
    pub fn new(worker_id: impl Into<String>, worked_minutes: f64, leave_minutes: f64) -> Self {
        Self {
            worker_id: worker_id.into(),
            worked_minutes,
            leave_minutes,
            total_minutes: worked_minutes + leave_minutes,
        }
    }

    pub fn reported(&self) -> Reported {
        Reported::from_minutes(self.total_minutes)
    }
}
