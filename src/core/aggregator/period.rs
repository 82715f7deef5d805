//! Period and population rollups over a date window.

use super::day::{DaySlots, day_minutes};
use super::leave::credits_by_worker;
use crate::models::aggregate::{DayAggregate, PeriodTotal, Reported};
use crate::models::leave::LeaveInterval;
use crate::models::punch::PunchEvent;
use crate::models::window::DateWindow;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    pub window: DateWindow,
    /// Per-worker day aggregates, in date order.
    pub days: BTreeMap<String, Vec<DayAggregate>>,
    pub workers: BTreeMap<String, PeriodTotal>,
    pub population_minutes: f64,
}

impl AggregateReport {
    pub fn worker(&self, worker_id: &str) -> Option<&PeriodTotal> {
        self.workers.get(worker_id)
    }

    /// `NoData` for a worker absent from the window as well as for a zero total.
    pub fn worker_reported(&self, worker_id: &str) -> Reported {
        self.worker(worker_id)
            .map(PeriodTotal::reported)
            .unwrap_or(Reported::NoData)
    }

    pub fn population(&self) -> Reported {
        Reported::from_minutes(self.population_minutes)
    }

    pub fn days_of(&self, worker_id: &str) -> &[DayAggregate] {
        self.days.get(worker_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Reduce punches and approved leave to day, worker and population totals.
///
/// `punches` are expected in ascending timestamp order; when a kind repeats on
/// a day, the first one in that order is used. `now` enables the live branch
/// for the day it falls on, unless the whole window is already in the past.
pub fn aggregate(
    punches: &[PunchEvent],
    leave: &[LeaveInterval],
    window: &DateWindow,
    now: Option<NaiveDateTime>,
) -> AggregateReport {
    let live = now.filter(|n| !window.is_past(*n));

    // Group by (worker, calendar date), keeping the supplied order inside a group
    let mut groups: BTreeMap<(&str, NaiveDate), Vec<&PunchEvent>> = BTreeMap::new();
    for p in punches.iter().filter(|p| window.contains(p.timestamp)) {
        groups
            .entry((p.worker_id.as_str(), p.date()))
            .or_default()
            .push(p);
    }

    let mut days: BTreeMap<String, Vec<DayAggregate>> = BTreeMap::new();
    let mut worked: BTreeMap<String, f64> = BTreeMap::new();

    for ((worker_id, date), group) in groups {
        let slots = DaySlots::from_punches(group);
        let day_now = live.filter(|n| n.date() == date);
        let minutes = day_minutes(&slots, day_now);

        *worked.entry(worker_id.to_string()).or_default() += minutes;
        days.entry(worker_id.to_string())
            .or_default()
            .push(DayAggregate {
                date,
                worker_id: worker_id.to_string(),
                worked_minutes: minutes,
            });
    }

    let mut credits = credits_by_worker(leave, window);

    let mut workers: BTreeMap<String, PeriodTotal> = BTreeMap::new();
    for (worker_id, worked_minutes) in worked {
        let leave_minutes = credits.remove(&worker_id).unwrap_or(0.0);
        workers.insert(
            worker_id.clone(),
            PeriodTotal::new(worker_id, worked_minutes, leave_minutes),
        );
    }
    // Workers with leave only
    for (worker_id, leave_minutes) in credits {
        workers.insert(
            worker_id.clone(),
            PeriodTotal::new(worker_id, 0.0, leave_minutes),
        );
    }

    let population_minutes: f64 = workers.values().map(|t| t.total_minutes).sum();

    debug!(
        start = %window.start(),
        end = %window.end(),
        workers = workers.len(),
        population_minutes,
        live = live.is_some(),
        "aggregation completed"
    );

    AggregateReport {
        window: *window,
        days,
        workers,
        population_minutes,
    }
}
