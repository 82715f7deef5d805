use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Every table comes from the migrations; nothing is created here directly.
pub fn init_db(conn: &Connection) -> AppResult<usize> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    run_pending_migrations(conn)
}
