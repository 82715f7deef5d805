use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::parse_date_arg;
use crate::utils::time::parse_time_arg;

/// Administrator correction of a punch time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Amend {
        worker,
        date,
        kind,
        time,
    } = cmd
    {
        let d = parse_date_arg(date)?;
        let t = parse_time_arg(time)?;

        let pool = DbPool::new(&cfg.database)?;
        let amended = PunchLogic::amend(&pool, worker, d, *kind, t)?;

        ttlog(
            &pool.conn,
            "amend",
            worker,
            &format!("{} moved to {}", amended.kind, amended.timestamp),
        )?;

        success(format!(
            "✏️ {} of {} on {} set to {}.",
            amended.kind,
            worker,
            d,
            amended.time_str()
        ));
    }

    Ok(())
}
