// Ports describe what the attendance core needs from storage, without
// implementing it. The SQLite store and the in-memory store in `db` are the
// adapters; the validator and the aggregator never see either of them.

use crate::errors::AppResult;
use crate::models::leave::LeaveInterval;
use crate::models::punch::PunchEvent;
use crate::models::window::DateWindow;
use chrono::NaiveDate;

/// Supplies recorded punches, ascending by timestamp.
pub trait PunchSource {
    /// Punches inside `window`, for one worker or for everyone when `worker` is `None`.
    fn punches(&self, worker: Option<&str>, window: &DateWindow) -> AppResult<Vec<PunchEvent>>;

    fn punches_on(&self, worker: &str, date: NaiveDate) -> AppResult<Vec<PunchEvent>> {
        self.punches(Some(worker), &DateWindow::single_day(date))
    }
}

/// Supplies approved leave intervals overlapping a window.
pub trait LeaveSource {
    fn leave(&self, worker: Option<&str>, window: &DateWindow) -> AppResult<Vec<LeaveInterval>>;
}

/// Persists punches that the validator accepted.
///
/// Implementations must reject a second punch of the same kind for the same
/// worker and day with `AppError::InvalidTransition`, so two racing writes
/// cannot both land.
pub trait PunchSink {
    /// Returns the id assigned to the stored punch.
    fn insert_punch(&self, punch: &PunchEvent) -> AppResult<i64>;
    fn update_punch(&self, punch: &PunchEvent) -> AppResult<()>;
    fn delete_punch(&self, id: i64) -> AppResult<()>;
}

/// Persists approved leave.
pub trait LeaveSink {
    fn insert_leave(&self, leave: &LeaveInterval) -> AppResult<i64>;
}
