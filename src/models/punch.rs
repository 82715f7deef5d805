use super::punch_kind::PunchKind;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PunchEvent {
    pub id: i64,                  // ⇔ punches.id (0 until persisted)
    pub worker_id: String,        // ⇔ punches.worker_id
    pub kind: PunchKind,          // ⇔ punches.kind
    pub timestamp: NaiveDateTime, // ⇔ punches.date + punches.time
    pub worksite: Option<String>, // ⇔ punches.worksite (informational)
    pub edited: bool,             // ⇔ punches.edited (administrator correction)
}

impl PunchEvent {
    /// Build a punch that has not been stored yet.
    pub fn new(worker_id: impl Into<String>, kind: PunchKind, timestamp: NaiveDateTime) -> Self {
        Self {
            id: 0,
            worker_id: worker_id.into(),
            kind,
            timestamp,
            worksite: None,
            edited: false,
        }
    }

    pub fn at_site(mut self, worksite: Option<String>) -> Self {
        self.worksite = worksite;
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }

    pub fn date_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}
