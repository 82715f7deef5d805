use super::window::DateWindow;
use chrono::NaiveDate;
use serde::Serialize;

/// Approved absence credited as worked time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaveInterval {
    pub id: i64,
    pub worker_id: String,
    pub start_date: NaiveDate, // inclusive
    pub end_date: NaiveDate,   // inclusive
    pub hours_credited: f64,   // flat credit for the whole interval, not a daily rate
}

impl LeaveInterval {
    pub fn new(
        worker_id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        hours_credited: f64,
    ) -> Self {
        Self {
            id: 0,
            worker_id: worker_id.into(),
            start_date,
            end_date,
            hours_credited,
        }
    }

    pub fn overlaps(&self, window: &DateWindow) -> bool {
        window.overlaps(self.start_date, self.end_date)
    }

    pub fn credited_minutes(&self) -> f64 {
        self.hours_credited * 60.0
    }
}
