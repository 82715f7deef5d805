use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::resolve_period;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        worker,
        force,
    } = cmd
    {
        let window = resolve_period(range)?;
        let pool = DbPool::new(&cfg.database)?;

        let rows = ExportLogic::export(&pool, *format, file, &window, worker.as_deref(), *force)?;

        if rows > 0 {
            ttlog(
                &pool.conn,
                "export",
                format.as_str(),
                &format!(
                    "{rows} rows for {}:{} to {file}",
                    window.start(),
                    window.end()
                ),
            )?;
        }
    }
    Ok(())
}
