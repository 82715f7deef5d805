use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::punch::PunchEvent;
use crate::ui::messages::success;
use crate::utils::time::parse_optional_instant;

/// Record a punch after validation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        worker,
        kind,
        at,
        site,
    } = cmd
    {
        let instant = PunchLogic::resolve_instant(parse_optional_instant(at.as_ref())?);
        let worksite = site.clone().or_else(|| cfg.default_worksite.clone());

        let pool = DbPool::new(&cfg.database)?;

        let punch = PunchEvent::new(worker.as_str(), *kind, instant).at_site(worksite);
        let stored = PunchLogic::record(&pool, punch, cfg.break_policy())?;

        ttlog(
            &pool.conn,
            "punch",
            worker,
            &format!("{} at {}", stored.kind, stored.timestamp),
        )?;

        success(format!(
            "Recorded {} for {} at {} {}.",
            stored.kind,
            stored.worker_id,
            stored.date_str(),
            stored.time_str()
        ));
    }

    Ok(())
}
