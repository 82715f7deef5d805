//! Time utilities: parsing punch instants and times of day.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn parse_time_arg(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Accepts `YYYY-MM-DD HH:MM[:SS]` and the ISO `T` separator.
pub fn parse_instant(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

pub fn parse_optional_instant(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    match input {
        Some(s) => parse_instant(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidTime(s.to_string())),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instants_with_and_without_seconds() {
        let a = parse_instant("2025-06-02 08:00").unwrap();
        let b = parse_instant("2025-06-02T08:00:00").unwrap();
        assert_eq!(a, b);
        assert!(parse_instant("08:00").is_none());
    }
}
