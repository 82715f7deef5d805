use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::parse_date_arg;

/// Delete the latest punch of a worker's day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { worker, date } = cmd {
        let d = parse_date_arg(date)?;

        let pool = DbPool::new(&cfg.database)?;
        let removed = PunchLogic::delete_latest(&pool, worker, d)?;

        ttlog(
            &pool.conn,
            "del",
            worker,
            &format!("{} at {} deleted", removed.kind, removed.timestamp),
        )?;

        success(format!(
            "Deleted {} of {} at {} {}.",
            removed.kind,
            worker,
            removed.date_str(),
            removed.time_str()
        ));
    }

    Ok(())
}
