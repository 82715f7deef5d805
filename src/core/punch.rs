use crate::core::ports::{PunchSink, PunchSource};
use crate::core::validator::{self, AttendanceState, BreakPolicy};
use crate::errors::{AppError, AppResult};
use crate::models::punch::PunchEvent;
use crate::models::punch_kind::PunchKind;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, info};

/// Snapshot of a worker's day as seen by the validator.
#[derive(Debug, Clone)]
pub struct DayStatus {
    pub worker_id: String,
    pub date: NaiveDate,
    pub state: AttendanceState,
    pub punches: Vec<PunchEvent>,
    pub next: Vec<PunchKind>,
}

/// High-level business logic for recording and correcting punches.
pub struct PunchLogic;

fn kinds_of(punches: &[PunchEvent]) -> Vec<PunchKind> {
    punches.iter().map(|p| p.kind).collect()
}

impl PunchLogic {
    /// Validate `punch` against the worker's day and store it.
    pub fn record<S>(store: &S, punch: PunchEvent, policy: BreakPolicy) -> AppResult<PunchEvent>
    where
        S: PunchSource + PunchSink,
    {
        let today = store.punches_on(&punch.worker_id, punch.date())?;

        validator::check(&kinds_of(&today), punch.kind, policy)?;

        if let Some(previous) = today.iter().map(|p| p.timestamp).max()
            && punch.timestamp < previous
        {
            return Err(AppError::OutOfOrder {
                kind: punch.kind,
                at: punch.timestamp,
                previous,
            });
        }

        let id = store.insert_punch(&punch)?;
        info!(worker = %punch.worker_id, kind = %punch.kind, at = %punch.timestamp, id, "punch recorded");

        Ok(PunchEvent { id, ..punch })
    }

    /// Move an existing punch to `new_time` on the same day and flag it as edited.
    ///
    /// The corrected time must keep the day's punches in day order.
    pub fn amend<S>(
        store: &S,
        worker: &str,
        date: NaiveDate,
        kind: PunchKind,
        new_time: NaiveTime,
    ) -> AppResult<PunchEvent>
    where
        S: PunchSource + PunchSink,
    {
        let today = store.punches_on(worker, date)?;
        let target = today
            .iter()
            .find(|p| p.kind == kind)
            .cloned()
            .ok_or_else(|| AppError::PunchNotFound {
                worker: worker.to_string(),
                date,
                kind,
            })?;

        let at = date.and_time(new_time);

        for other in today.iter().filter(|p| p.id != target.id) {
            let misplaced = (other.kind < kind && other.timestamp > at)
                || (other.kind > kind && other.timestamp < at);
            if misplaced {
                return Err(AppError::OutOfOrder {
                    kind,
                    at,
                    previous: other.timestamp,
                });
            }
        }

        let amended = PunchEvent {
            timestamp: at,
            edited: true,
            ..target
        };
        store.update_punch(&amended)?;
        debug!(worker, %kind, %at, "punch amended");

        Ok(amended)
    }

    /// Remove the latest punch of a day. Earlier punches stay, so the day
    /// can never end up in a state the validator would not have produced.
    pub fn delete_latest<S>(store: &S, worker: &str, date: NaiveDate) -> AppResult<PunchEvent>
    where
        S: PunchSource + PunchSink,
    {
        let today = store.punches_on(worker, date)?;
        let latest = today
            .iter()
            .max_by_key(|p| (p.kind, p.timestamp))
            .cloned()
            .ok_or_else(|| {
                AppError::Other(format!("No punches for worker '{worker}' on {date}"))
            })?;

        store.delete_punch(latest.id)?;
        debug!(worker, kind = %latest.kind, %date, "punch deleted");

        Ok(latest)
    }

    pub fn status<S>(
        store: &S,
        worker: &str,
        date: NaiveDate,
        policy: BreakPolicy,
    ) -> AppResult<DayStatus>
    where
        S: PunchSource,
    {
        let punches = store.punches_on(worker, date)?;
        let kinds = kinds_of(&punches);

        Ok(DayStatus {
            worker_id: worker.to_string(),
            date,
            state: AttendanceState::from_kinds(kinds.iter().copied()),
            next: validator::next_allowed(&kinds, policy),
            punches,
        })
    }

    /// Instant to use for a punch: explicit `--at` value or the wall clock.
    pub fn resolve_instant(at: Option<NaiveDateTime>) -> NaiveDateTime {
        at.unwrap_or_else(|| chrono::Local::now().naive_local())
    }
}
