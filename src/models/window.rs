//! Inclusive calendar-date window used by every query and aggregation.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateWindow {
    /// Fails with `MalformedWindow` when `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::MalformedWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True for any instant from `start 00:00:00` through the last instant of `end`.
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.contains_date(ts.date())
    }

    /// Inclusive interval overlap with `[from, to]`.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        from <= self.end && to >= self.start
    }

    /// The whole window lies strictly before `now`'s calendar day.
    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        self.end < now.date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn rejects_start_after_end() {
        let err = DateWindow::new(d("2025-03-10"), d("2025-03-09")).unwrap_err();
        assert!(matches!(err, AppError::MalformedWindow { .. }));
    }

    #[test]
    fn bounds_are_inclusive() {
        let w = DateWindow::new(d("2025-03-01"), d("2025-03-31")).unwrap();
        let first = d("2025-03-01").and_hms_opt(0, 0, 0).unwrap();
        let last = d("2025-03-31").and_hms_opt(23, 59, 59).unwrap();
        let after = d("2025-04-01").and_hms_opt(0, 0, 0).unwrap();
        assert!(w.contains(first));
        assert!(w.contains(last));
        assert!(!w.contains(after));
    }

    #[test]
    fn partial_overlap_counts() {
        let w = DateWindow::new(d("2025-03-10"), d("2025-03-20")).unwrap();
        assert!(w.overlaps(d("2025-03-09"), d("2025-03-11")));
        assert!(w.overlaps(d("2025-03-20"), d("2025-03-25")));
        assert!(!w.overlaps(d("2025-03-01"), d("2025-03-09")));
    }
}
