use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::AggregateReport;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::date::resolve_period;
use crate::utils::formatting::{format_minutes, format_reported};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        period,
        worker,
        live,
        details,
    } = cmd
    {
        let window = resolve_period(period)?;
        let now = live.then(|| chrono::Local::now().naive_local());

        let pool = DbPool::new(&cfg.database)?;
        let report = ReportLogic::build(&pool, &window, worker.as_deref(), now)?;

        header(format!("{} → {}", window.start(), window.end()));

        if report.workers.is_empty() {
            info("No punches or leave in this period.");
            return Ok(());
        }

        if *details {
            print_days(&report, cfg.separator_char);
        }
        print_totals(&report, cfg.separator_char);
    }
    Ok(())
}

fn print_days(report: &AggregateReport, separator: char) {
    let mut table = Table::new(vec![
        Column::new("WORKER", 10),
        Column::new("DATE", 10),
        Column::new("WORKED", 8),
    ]);

    for days in report.days.values() {
        for day in days {
            table.add_row(vec![
                day.worker_id.clone(),
                day.date.to_string(),
                format_reported(day.reported()),
            ]);
        }
    }

    println!("{}", table.render(separator));
}

fn print_totals(report: &AggregateReport, separator: char) {
    let mut table = Table::new(vec![
        Column::new("WORKER", 10),
        Column::new("WORKED", 8),
        Column::new("LEAVE", 8),
        Column::new("TOTAL", 8),
    ]);

    for total in report.workers.values() {
        table.add_row(vec![
            total.worker_id.clone(),
            format_minutes(total.worked_minutes),
            format_minutes(total.leave_minutes),
            format_reported(total.reported()),
        ]);
    }

    print!("{}", table.render(separator));
    println!("Crew total: {}", format_reported(report.population()));
}
