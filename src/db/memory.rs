//! In-memory store implementing the storage ports, for tests and embedding.

use crate::core::ports::{LeaveSink, LeaveSource, PunchSink, PunchSource};
use crate::core::validator::AttendanceState;
use crate::errors::{AppError, AppResult};
use crate::models::leave::LeaveInterval;
use crate::models::punch::PunchEvent;
use crate::models::window::DateWindow;
use std::cell::{Cell, RefCell};

#[derive(Debug, Default)]
pub struct MemoryStore {
    punches: RefCell<Vec<PunchEvent>>,
    leave: RefCell<Vec<LeaveInterval>>,
    next_id: Cell<i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    /// Every stored punch, in insertion order.
    pub fn all_punches(&self) -> Vec<PunchEvent> {
        self.punches.borrow().clone()
    }
}

impl PunchSource for MemoryStore {
    fn punches(&self, worker: Option<&str>, window: &DateWindow) -> AppResult<Vec<PunchEvent>> {
        let mut out: Vec<PunchEvent> = self
            .punches
            .borrow()
            .iter()
            .filter(|p| window.contains(p.timestamp))
            .filter(|p| worker.is_none_or(|w| p.worker_id == w))
            .cloned()
            .collect();
        out.sort_by_key(|p| (p.timestamp, p.id));
        Ok(out)
    }
}

impl PunchSink for MemoryStore {
    fn insert_punch(&self, punch: &PunchEvent) -> AppResult<i64> {
        let same_day: Vec<_> = self
            .punches
            .borrow()
            .iter()
            .filter(|p| p.worker_id == punch.worker_id && p.date() == punch.date())
            .map(|p| p.kind)
            .collect();

        // Same uniqueness rule as the SQLite schema
        if same_day.contains(&punch.kind) {
            return Err(AppError::InvalidTransition {
                state: AttendanceState::from_kinds(same_day),
                kind: punch.kind,
            });
        }

        let id = self.next_id();
        self.punches.borrow_mut().push(PunchEvent {
            id,
            ..punch.clone()
        });
        Ok(id)
    }

    fn update_punch(&self, punch: &PunchEvent) -> AppResult<()> {
        let mut punches = self.punches.borrow_mut();
        let slot = punches
            .iter_mut()
            .find(|p| p.id == punch.id)
            .ok_or_else(|| AppError::Other(format!("punch {} not found", punch.id)))?;
        *slot = punch.clone();
        Ok(())
    }

    fn delete_punch(&self, id: i64) -> AppResult<()> {
        let mut punches = self.punches.borrow_mut();
        let before = punches.len();
        punches.retain(|p| p.id != id);
        if punches.len() == before {
            return Err(AppError::Other(format!("punch {id} not found")));
        }
        Ok(())
    }
}

impl LeaveSource for MemoryStore {
    fn leave(&self, worker: Option<&str>, window: &DateWindow) -> AppResult<Vec<LeaveInterval>> {
        Ok(self
            .leave
            .borrow()
            .iter()
            .filter(|l| l.overlaps(window))
            .filter(|l| worker.is_none_or(|w| l.worker_id == w))
            .cloned()
            .collect())
    }
}

impl LeaveSink for MemoryStore {
    fn insert_leave(&self, leave: &LeaveInterval) -> AppResult<i64> {
        let id = self.next_id();
        self.leave.borrow_mut().push(LeaveInterval {
            id,
            ..leave.clone()
        });
        Ok(id)
    }
}
