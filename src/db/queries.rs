use crate::errors::{AppError, AppResult};
use crate::models::leave::LeaveInterval;
use crate::models::punch::PunchEvent;
use crate::models::punch_kind::PunchKind;
use crate::models::window::DateWindow;
use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::{Connection, Result, Row, params};

const DATE_FMT: &str = "%Y-%m-%d";
const TIME_FMT: &str = "%H:%M:%S%.f";

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_date_col(row: &Row, col: &str, idx: usize) -> Result<NaiveDate> {
    let raw: String = row.get(col)?;
    NaiveDate::parse_from_str(&raw, DATE_FMT)
        .map_err(|_| conversion_error(idx, AppError::InvalidDate(raw.clone())))
}

pub fn map_punch_row(row: &Row) -> Result<PunchEvent> {
    let date = parse_date_col(row, "date", 2)?;

    let time_str: String = row.get("time")?;
    let time = chrono::NaiveTime::parse_from_str(&time_str, TIME_FMT)
        .map_err(|_| conversion_error(3, AppError::InvalidTime(time_str.clone())))?;

    let kind_str: String = row.get("kind")?;
    let kind = PunchKind::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(4, AppError::InvalidPunchKind(kind_str.clone())))?;

    Ok(PunchEvent {
        id: row.get("id")?,
        worker_id: row.get("worker_id")?,
        kind,
        timestamp: NaiveDateTime::new(date, time),
        worksite: row.get("worksite")?,
        edited: row.get::<_, i32>("edited")? == 1,
    })
}

pub fn map_leave_row(row: &Row) -> Result<LeaveInterval> {
    Ok(LeaveInterval {
        id: row.get("id")?,
        worker_id: row.get("worker_id")?,
        start_date: parse_date_col(row, "start_date", 2)?,
        end_date: parse_date_col(row, "end_date", 3)?,
        hours_credited: row.get("hours_credited")?,
    })
}

/// Punches whose date falls inside `window`, ascending by date and time.
pub fn load_punches(
    conn: &Connection,
    worker: Option<&str>,
    window: &DateWindow,
) -> AppResult<Vec<PunchEvent>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, worker_id, date, time, kind, worksite, edited FROM punches
         WHERE date BETWEEN ?1 AND ?2
           AND (?3 IS NULL OR worker_id = ?3)
         ORDER BY date ASC, time ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            window.start().format(DATE_FMT).to_string(),
            window.end().format(DATE_FMT).to_string(),
            worker,
        ],
        map_punch_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_punch(conn: &Connection, p: &PunchEvent) -> Result<i64> {
    conn.execute(
        "INSERT INTO punches (worker_id, date, time, kind, worksite, edited, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            p.worker_id,
            p.timestamp.format(DATE_FMT).to_string(),
            p.timestamp.format(TIME_FMT).to_string(),
            p.kind.to_db_str(),
            p.worksite,
            if p.edited { 1 } else { 0 },
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_punch(conn: &Connection, p: &PunchEvent) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE punches
         SET date = ?1, time = ?2, kind = ?3, worksite = ?4, edited = ?5
         WHERE id = ?6",
        params![
            p.timestamp.format(DATE_FMT).to_string(),
            p.timestamp.format(TIME_FMT).to_string(),
            p.kind.to_db_str(),
            p.worksite,
            if p.edited { 1 } else { 0 },
            p.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::Other(format!("punch {} not found", p.id)));
    }
    Ok(())
}

pub fn delete_punch(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM punches WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(AppError::Other(format!("punch {id} not found")));
    }
    Ok(())
}

pub fn insert_leave(conn: &Connection, l: &LeaveInterval) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO leave (worker_id, start_date, end_date, hours_credited, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            l.worker_id,
            l.start_date.format(DATE_FMT).to_string(),
            l.end_date.format(DATE_FMT).to_string(),
            l.hours_credited,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Leave intervals overlapping `window` at all.
pub fn load_leave(
    conn: &Connection,
    worker: Option<&str>,
    window: &DateWindow,
) -> AppResult<Vec<LeaveInterval>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, worker_id, start_date, end_date, hours_credited FROM leave
         WHERE start_date <= ?2 AND end_date >= ?1
           AND (?3 IS NULL OR worker_id = ?3)
         ORDER BY start_date ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            window.start().format(DATE_FMT).to_string(),
            window.end().format(DATE_FMT).to_string(),
            worker,
        ],
        map_leave_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
