use crate::core::ports::LeaveSink;
use crate::errors::{AppError, AppResult};
use crate::models::leave::LeaveInterval;
use crate::models::window::DateWindow;
use tracing::info;

/// Registration of already-approved leave.
pub struct LeaveLogic;

impl LeaveLogic {
    pub fn register<S: LeaveSink>(store: &S, leave: LeaveInterval) -> AppResult<LeaveInterval> {
        DateWindow::new(leave.start_date, leave.end_date)?;

        if !leave.hours_credited.is_finite() || leave.hours_credited < 0.0 {
            return Err(AppError::InvalidHours(leave.hours_credited.to_string()));
        }

        let id = store.insert_leave(&leave)?;
        info!(
            worker = %leave.worker_id,
            start = %leave.start_date,
            end = %leave.end_date,
            hours = leave.hours_credited,
            id,
            "leave registered"
        );

        Ok(LeaveInterval { id, ..leave })
    }
}
