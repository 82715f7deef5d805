use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{cc, init_db, init_db_with_day, punch_cli, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    cc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_punch_and_status() {
    let db_path = setup_test_db("cli_status");
    init_db(&db_path);

    punch_cli(&db_path, "w-1", "arrive", "2025-06-02 08:00");
    punch_cli(&db_path, "w-1", "break-start", "2025-06-02 12:00");

    cc().args(["--db", &db_path, "status", "w-1", "--date", "2025-06-02"])
        .assert()
        .success()
        .stdout(contains("State: on break"))
        .stdout(contains("Next: break_end"));
}

#[test]
fn test_report_full_day() {
    let db_path = setup_test_db("cli_report_day");
    init_db_with_day(&db_path, "w-1", "2025-06-02");

    cc().args(["--db", &db_path, "report", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("w-1"))
        .stdout(contains("8h 30m"))
        .stdout(contains("Crew total: 8h 30m"));
}

#[test]
fn test_report_details_lists_days() {
    let db_path = setup_test_db("cli_report_details");
    init_db_with_day(&db_path, "w-1", "2025-06-02");
    punch_cli(&db_path, "w-1", "arrive", "2025-06-03 08:00");

    cc().args([
        "--db",
        &db_path,
        "report",
        "--period",
        "2025-06-01:2025-06-03",
        "--details",
    ])
    .assert()
    .success()
    .stdout(contains("2025-06-02"))
    .stdout(contains("2025-06-03"))
    .stdout(contains("no data"));
}

#[test]
fn test_report_arrival_only_is_no_data() {
    let db_path = setup_test_db("cli_report_nodata");
    init_db(&db_path);
    punch_cli(&db_path, "w-1", "arrive", "2025-06-02 08:00");

    cc().args(["--db", &db_path, "report", "-p", "2025-06-02"])
        .assert()
        .success()
        .stdout(contains("Crew total: no data"));
}

#[test]
fn test_second_arrival_fails() {
    let db_path = setup_test_db("cli_double_arrival");
    init_db(&db_path);
    punch_cli(&db_path, "w-1", "arrive", "2025-06-02 08:00");

    cc().args([
        "--db",
        &db_path,
        "punch",
        "w-1",
        "arrive",
        "--at",
        "2025-06-02 09:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Cannot record arrival while working"));
}

#[test]
fn test_depart_during_break_fails() {
    let db_path = setup_test_db("cli_depart_on_break");
    init_db(&db_path);
    punch_cli(&db_path, "w-1", "arrive", "2025-06-02 08:00");
    punch_cli(&db_path, "w-1", "break-start", "2025-06-02 12:00");

    cc().args([
        "--db",
        &db_path,
        "punch",
        "w-1",
        "depart",
        "--at",
        "2025-06-02 16:00",
    ])
    .assert()
    .failure()
    .stderr(contains("on break"));
}

#[test]
fn test_unknown_punch_kind_is_rejected_by_parser() {
    let db_path = setup_test_db("cli_bad_kind");
    init_db(&db_path);

    cc().args(["--db", &db_path, "punch", "w-1", "lunch"])
        .assert()
        .failure();
}

#[test]
fn test_leave_is_credited_in_report() {
    let db_path = setup_test_db("cli_leave");
    init_db(&db_path);

    cc().args(["--db", &db_path, "leave", "w-2", "2025-06-02", "2025-06-02", "8"])
        .assert()
        .success()
        .stdout(contains("Leave of 8h registered"));

    cc().args(["--db", &db_path, "report", "--period", "2025-06", "-w", "w-2"])
        .assert()
        .success()
        .stdout(contains("8h 0m"));
}

#[test]
fn test_leave_with_reversed_dates_fails() {
    let db_path = setup_test_db("cli_leave_reversed");
    init_db(&db_path);

    cc().args(["--db", &db_path, "leave", "w-2", "2025-06-05", "2025-06-02", "8"])
        .assert()
        .failure()
        .stderr(contains("Malformed window"));
}

#[test]
fn test_amend_and_del() {
    let db_path = setup_test_db("cli_amend_del");
    init_db_with_day(&db_path, "w-1", "2025-06-02");

    cc().args(["--db", &db_path, "amend", "w-1", "2025-06-02", "depart", "16:30"])
        .assert()
        .success();

    cc().args(["--db", &db_path, "report", "--period", "2025-06-02"])
        .assert()
        .success()
        .stdout(contains("Crew total: 8h 0m"));

    cc().args(["--db", &db_path, "del", "w-1", "2025-06-02"])
        .assert()
        .success();

    cc().args(["--db", &db_path, "status", "w-1", "--date", "2025-06-02"])
        .assert()
        .success()
        .stdout(contains("working (break taken)").and(contains("(edited)").not()));
}

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("cli_export_csv");
    init_db_with_day(&db_path, "w-1", "2025-06-02");
    let out = temp_out("cli_export_csv", "csv");

    cc().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2025-06",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("csv written");
    assert!(content.starts_with("scope,worker_id,date"));
    assert!(content.contains("day,w-1,2025-06-02"));
    assert!(content.contains("crew"));
    assert!(content.contains("8h 30m"));
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("cli_export_json");
    init_db_with_day(&db_path, "w-1", "2025-06-02");
    let out = temp_out("cli_export_json", "json");

    cc().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out, "--range", "2025-06",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("json written");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of rows");

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2]["scope"], "crew");
    assert_eq!(rows[2]["total_minutes"], 510.0);
}

#[test]
fn test_export_relative_path_fails() {
    let db_path = setup_test_db("cli_export_relative");
    init_db(&db_path);

    cc().args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("absolute"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db(&db_path);
    punch_cli(&db_path, "w-1", "arrive", "2025-06-02 08:00");

    cc().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init").and(contains("punch")));
}
