#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use crewclock::models::punch::PunchEvent;
use crewclock::models::punch_kind::PunchKind;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cc() -> Command {
    cargo_bin_cmd!("crewclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_crewclock.sqlite"));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_out.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    cc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Record one punch through the CLI, `at` as `YYYY-MM-DD HH:MM`.
pub fn punch_cli(db_path: &str, worker: &str, kind: &str, at: &str) {
    cc().args(["--db", db_path, "punch", worker, kind, "--at", at])
        .assert()
        .success();
}

/// Init the DB and record a full 08:00-17:00 day with a 30 minute break.
pub fn init_db_with_day(db_path: &str, worker: &str, date: &str) {
    init_db(db_path);
    for (kind, time) in [
        ("arrive", "08:00"),
        ("break-start", "12:00"),
        ("break-end", "12:30"),
        ("depart", "17:00"),
    ] {
        punch_cli(db_path, worker, kind, &format!("{date} {time}"));
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid timestamp")
}

pub fn punch(worker: &str, kind: PunchKind, at: &str) -> PunchEvent {
    PunchEvent::new(worker, kind, ts(at))
}

/// The four punches of a standard 8h30m day.
pub fn full_day(worker: &str, day: &str) -> Vec<PunchEvent> {
    vec![
        punch(worker, PunchKind::ArriveSite, &format!("{day} 08:00")),
        punch(worker, PunchKind::BreakStart, &format!("{day} 12:00")),
        punch(worker, PunchKind::BreakEnd, &format!("{day} 12:30")),
        punch(worker, PunchKind::DepartSite, &format!("{day} 17:00")),
    ]
}
