// src/export/model.rs

use crate::core::aggregator::AggregateReport;
use crate::utils::formatting::format_reported;
use serde::Serialize;

/// Flat row shared by the CSV and JSON exports.
///
/// `scope` is `day`, `worker` or `crew`; `date` is empty on total rows.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub scope: &'static str,
    pub worker_id: String,
    pub date: String,
    pub worked_minutes: f64,
    pub leave_minutes: f64,
    pub total_minutes: f64,
    pub display: String,
}

/// Day rows first, then one total row per worker, then the crew total.
pub fn report_rows(report: &AggregateReport) -> Vec<ReportRow> {
    let mut rows = Vec::new();

    for days in report.days.values() {
        for day in days {
            rows.push(ReportRow {
                scope: "day",
                worker_id: day.worker_id.clone(),
                date: day.date.format("%Y-%m-%d").to_string(),
                worked_minutes: day.worked_minutes,
                leave_minutes: 0.0,
                total_minutes: day.worked_minutes,
                display: format_reported(day.reported()),
            });
        }
    }

    for total in report.workers.values() {
        rows.push(ReportRow {
            scope: "worker",
            worker_id: total.worker_id.clone(),
            date: String::new(),
            worked_minutes: total.worked_minutes,
            leave_minutes: total.leave_minutes,
            total_minutes: total.total_minutes,
            display: format_reported(total.reported()),
        });
    }

    let (worked, leave) = report
        .workers
        .values()
        .fold((0.0, 0.0), |(w, l), t| (w + t.worked_minutes, l + t.leave_minutes));

    rows.push(ReportRow {
        scope: "crew",
        worker_id: String::new(),
        date: String::new(),
        worked_minutes: worked,
        leave_minutes: leave,
        total_minutes: report.population_minutes,
        display: format_reported(report.population()),
    });

    rows
}
