//! Leave credit: approved absences counted as worked time.

use crate::models::leave::LeaveInterval;
use crate::models::window::DateWindow;
use std::collections::BTreeMap;
use tracing::trace;

/// Leave minutes per worker for every interval touching `window`.
///
/// An interval that overlaps the window at all is credited in full, once;
/// it is not pro-rated to the days inside the window.
pub fn credits_by_worker(leave: &[LeaveInterval], window: &DateWindow) -> BTreeMap<String, f64> {
    let mut credits: BTreeMap<String, f64> = BTreeMap::new();

    for interval in leave.iter().filter(|l| l.overlaps(window)) {
        trace!(
            worker = %interval.worker_id,
            start = %interval.start_date,
            end = %interval.end_date,
            hours = interval.hours_credited,
            "leave credited"
        );
        *credits.entry(interval.worker_id.clone()).or_default() += interval.credited_minutes();
    }

    credits
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn overlapping_interval_is_credited_in_full() {
        let window = DateWindow::new(d("2025-05-05"), d("2025-05-09")).unwrap();
        let leave = [LeaveInterval::new("w-1", d("2025-05-04"), d("2025-05-06"), 16.0)];
        assert_eq!(credits_by_worker(&leave, &window)["w-1"], 960.0);
    }

    #[test]
    fn each_interval_counts_once() {
        let window = DateWindow::new(d("2025-05-01"), d("2025-05-31")).unwrap();
        let leave = [
            LeaveInterval::new("w-1", d("2025-05-02"), d("2025-05-02"), 8.0),
            LeaveInterval::new("w-1", d("2025-05-20"), d("2025-05-21"), 4.0),
            LeaveInterval::new("w-2", d("2025-05-20"), d("2025-05-21"), 8.0),
            LeaveInterval::new("w-2", d("2025-06-01"), d("2025-06-02"), 8.0),
        ];
        let credits = credits_by_worker(&leave, &window);
        assert_eq!(credits.get("w-1"), Some(&720.0));
        assert_eq!(credits.get("w-2"), Some(&480.0));
    }

    #[test]
    fn interval_outside_window_is_ignored() {
        let window = DateWindow::new(d("2025-05-05"), d("2025-05-09")).unwrap();
        let leave = [LeaveInterval::new("w-1", d("2025-05-10"), d("2025-05-12"), 8.0)];
        assert!(credits_by_worker(&leave, &window).is_empty());
    }
}
