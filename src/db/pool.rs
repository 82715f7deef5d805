//! SQLite connection wrapper and its implementation of the storage ports.

use crate::core::ports::{LeaveSink, LeaveSource, PunchSink, PunchSource};
use crate::core::validator::AttendanceState;
use crate::db::initialize::init_db;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::leave::LeaveInterval;
use crate::models::punch::PunchEvent;
use crate::models::window::DateWindow;
use rusqlite::{Connection, ErrorCode};
use std::path::Path;
use tracing::warn;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database at `path` and bring its schema up to date.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl PunchSource for DbPool {
    fn punches(&self, worker: Option<&str>, window: &DateWindow) -> AppResult<Vec<PunchEvent>> {
        queries::load_punches(&self.conn, worker, window)
    }
}

impl PunchSink for DbPool {
    fn insert_punch(&self, punch: &PunchEvent) -> AppResult<i64> {
        match queries::insert_punch(&self.conn, punch) {
            Ok(id) => Ok(id),
            // Lost a race against a concurrent punch of the same kind
            Err(e) if is_unique_violation(&e) => {
                warn!(worker = %punch.worker_id, kind = %punch.kind, "duplicate punch rejected by store");
                let today = self.punches_on(&punch.worker_id, punch.date())?;
                Err(AppError::InvalidTransition {
                    state: AttendanceState::from_kinds(today.iter().map(|p| p.kind)),
                    kind: punch.kind,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    fn update_punch(&self, punch: &PunchEvent) -> AppResult<()> {
        queries::update_punch(&self.conn, punch)
    }

    fn delete_punch(&self, id: i64) -> AppResult<()> {
        queries::delete_punch(&self.conn, id)
    }
}

impl LeaveSource for DbPool {
    fn leave(&self, worker: Option<&str>, window: &DateWindow) -> AppResult<Vec<LeaveInterval>> {
        queries::load_leave(&self.conn, worker, window)
    }
}

impl LeaveSink for DbPool {
    fn insert_leave(&self, leave: &LeaveInterval) -> AppResult<i64> {
        queries::insert_leave(&self.conn, leave)
    }
}
