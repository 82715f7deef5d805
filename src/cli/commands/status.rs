use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { worker, date: day } = cmd {
        let d = match day {
            Some(s) => date::parse_date_arg(s)?,
            None => date::today(),
        };

        let pool = DbPool::new(&cfg.database)?;
        let status = PunchLogic::status(&pool, worker, d, cfg.break_policy())?;

        header(format!("{} on {}", status.worker_id, status.date));
        println!("State: {}", status.state);

        for p in &status.punches {
            let edited = if p.edited { " (edited)" } else { "" };
            let site = p.worksite.as_deref().unwrap_or("-");
            println!("  {} {:<12} @ {}{}", p.time_str(), p.kind.to_db_str(), site, edited);
        }

        if status.next.is_empty() {
            println!("Next: nothing, the day is closed");
        } else {
            let next: Vec<&str> = status.next.iter().map(|k| k.to_db_str()).collect();
            println!("Next: {}", next.join(", "));
        }
    }

    Ok(())
}
