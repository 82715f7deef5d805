use crate::core::aggregator::{AggregateReport, aggregate};
use crate::core::ports::{LeaveSource, PunchSource};
use crate::errors::AppResult;
use crate::models::window::DateWindow;
use chrono::NaiveDateTime;

pub struct ReportLogic;

impl ReportLogic {
    /// Fetch punches and leave for `window` and aggregate them.
    ///
    /// `now` is only forwarded for live displays; historical reports pass `None`.
    pub fn build<S>(
        store: &S,
        window: &DateWindow,
        worker: Option<&str>,
        now: Option<NaiveDateTime>,
    ) -> AppResult<AggregateReport>
    where
        S: PunchSource + LeaveSource,
    {
        let punches = store.punches(worker, window)?;
        let leave = store.leave(worker, window)?;

        Ok(aggregate(&punches, &leave, window, now))
    }
}
