//! Unified application error type.
//! The engine, the store and the CLI all return AppError so failures surface
//! through a single `Result` shape up to `main`.

use crate::models::punch_kind::PunchKind;
use crate::core::validator::AttendanceState;
use chrono::{NaiveDate, NaiveDateTime};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid punch kind: {0}")]
    InvalidPunchKind(String),

    #[error("Invalid leave hours: {0}")]
    InvalidHours(String),

    // ---------------------------
    // Attendance rules
    // ---------------------------
    #[error("Cannot record {kind} while {state}")]
    InvalidTransition {
        state: AttendanceState,
        kind: PunchKind,
    },

    #[error("Malformed window: start {start} is after end {end}")]
    MalformedWindow { start: NaiveDate, end: NaiveDate },

    #[error("{kind} at {at} is earlier than the previous punch at {previous}")]
    OutOfOrder {
        kind: PunchKind,
        at: NaiveDateTime,
        previous: NaiveDateTime,
    },

    #[error("No {kind} punch for worker '{worker}' on {date}")]
    PunchNotFound {
        worker: String,
        date: NaiveDate,
        kind: PunchKind,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
