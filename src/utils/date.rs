//! Date and period parsing for the `--period` / `--range` arguments.

use crate::errors::{AppError, AppResult};
use crate::models::window::DateWindow;
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    let first_next = if m == 12 {
        NaiveDate::from_ymd_opt(y + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(y, m + 1, 1)
    }?;
    first_next.pred_opt().map(|d| d.day())
}

/// First and last day covered by `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();
    let invalid = || AppError::InvalidDate(p.to_string());

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            let last_day = month_last_day(first.year(), first.month()).ok_or_else(invalid)?;
            let last = first.with_day(last_day).ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(invalid)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

/// Parse a period expression into a window.
///
/// Supports `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, and `start:end` ranges of any
/// of those (e.g. `2025-06:2025-08`). A range whose start is after its end
/// fails with `MalformedWindow`.
pub fn parse_period(p: &str) -> AppResult<DateWindow> {
    if let Some((start, end)) = p.split_once(':') {
        let (first, _) = period_bounds(start)?;
        let (_, last) = period_bounds(end)?;
        return DateWindow::new(first, last);
    }

    let (first, last) = period_bounds(p)?;
    DateWindow::new(first, last)
}

/// Window for the current calendar month.
pub fn current_month() -> AppResult<DateWindow> {
    let t = today();
    parse_period(&t.format("%Y-%m").to_string())
}

/// `--period` when given, current month otherwise.
pub fn resolve_period(period: &Option<String>) -> AppResult<DateWindow> {
    match period {
        Some(p) => parse_period(p),
        None => current_month(),
    }
}
