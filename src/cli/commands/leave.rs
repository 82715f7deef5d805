use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::leave::LeaveLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::leave::LeaveInterval;
use crate::ui::messages::success;
use crate::utils::date::parse_date_arg;

/// Register an approved leave interval.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Leave {
        worker,
        start,
        end,
        hours,
    } = cmd
    {
        let s = parse_date_arg(start)?;
        let e = parse_date_arg(end)?;

        let pool = DbPool::new(&cfg.database)?;
        let leave = LeaveLogic::register(&pool, LeaveInterval::new(worker.as_str(), s, e, *hours))?;

        ttlog(
            &pool.conn,
            "leave",
            worker,
            &format!("{}h from {} to {}", leave.hours_credited, s, e),
        )?;

        success(format!(
            "Leave of {}h registered for {} ({} → {}).",
            leave.hours_credited, worker, s, e
        ));
    }

    Ok(())
}
