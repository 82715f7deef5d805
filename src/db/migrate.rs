//! Schema migrations, tracked through SQLite's `user_version` pragma.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use tracing::info;

/// Ordered migrations; the index + 1 is the schema version they lead to.
const MIGRATIONS: &[(&str, &str)] = &[
    (
        "create punches and log tables",
        r#"
        CREATE TABLE IF NOT EXISTS punches (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id   TEXT NOT NULL,
            date        TEXT NOT NULL,
            time        TEXT NOT NULL,
            kind        TEXT NOT NULL
                        CHECK(kind IN ('arrive','break_start','break_end','depart')),
            worksite    TEXT,
            edited      INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL,
            UNIQUE(worker_id, date, kind)
        );

        CREATE INDEX IF NOT EXISTS idx_punches_date_time ON punches(date, time);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    ),
    (
        "create leave table",
        r#"
        CREATE TABLE IF NOT EXISTS leave (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id      TEXT NOT NULL,
            start_date     TEXT NOT NULL,
            end_date       TEXT NOT NULL,
            hours_credited REAL NOT NULL CHECK(hours_credited >= 0),
            created_at     TEXT NOT NULL,
            CHECK(start_date <= end_date)
        );

        CREATE INDEX IF NOT EXISTS idx_leave_dates ON leave(start_date, end_date);
        "#,
    ),
];

pub fn schema_version(conn: &Connection) -> AppResult<usize> {
    let v: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    usize::try_from(v).map_err(|_| AppError::Migration(format!("negative user_version {v}")))
}

/// Apply every migration newer than the current schema version.
/// Returns the number of migrations applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    let current = schema_version(conn)?;

    if current > MIGRATIONS.len() {
        return Err(AppError::Migration(format!(
            "database schema version {current} is newer than this binary ({})",
            MIGRATIONS.len()
        )));
    }

    let mut applied = 0;
    for (idx, (name, sql)) in MIGRATIONS.iter().enumerate().skip(current) {
        let version = idx + 1;
        conn.execute_batch(&format!(
            "BEGIN;\n{sql}\nPRAGMA user_version = {version};\nCOMMIT;"
        ))
        .map_err(|e| AppError::Migration(format!("{name}: {e}")))?;

        info!(version, name, "migration applied");
        applied += 1;
    }

    Ok(applied)
}
