//! Reduction of one worker's punches on one calendar day into worked minutes.

use crate::models::punch::PunchEvent;
use crate::models::punch_kind::PunchKind;
use chrono::NaiveDateTime;
use tracing::trace;

/// At most one timestamp per punch kind for a single day.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DaySlots {
    pub arrive: Option<NaiveDateTime>,
    pub break_start: Option<NaiveDateTime>,
    pub break_end: Option<NaiveDateTime>,
    pub depart: Option<NaiveDateTime>,
}

impl DaySlots {
    /// Fill the slots in the order the punches are supplied.
    /// A repeated kind keeps its first-seen timestamp.
    pub fn from_punches<'a, I>(punches: I) -> Self
    where
        I: IntoIterator<Item = &'a PunchEvent>,
    {
        let mut slots = DaySlots::default();
        for p in punches {
            let slot = slots.slot_mut(p.kind);
            if slot.is_none() {
                *slot = Some(p.timestamp);
            } else {
                trace!(worker = %p.worker_id, kind = %p.kind, "duplicate punch ignored");
            }
        }
        slots
    }

    fn slot_mut(&mut self, kind: PunchKind) -> &mut Option<NaiveDateTime> {
        match kind {
            PunchKind::ArriveSite => &mut self.arrive,
            PunchKind::BreakStart => &mut self.break_start,
            PunchKind::BreakEnd => &mut self.break_end,
            PunchKind::DepartSite => &mut self.depart,
        }
    }
}

/// Minutes between two instants, millisecond precision, never negative.
pub fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    let ms = (to - from).num_milliseconds();
    (ms.max(0) as f64) / 60_000.0
}

/// Worked minutes for one day.
///
/// * arrival and departure: `depart - arrive`, minus a closed break;
/// * arrival without departure and a `now` instant: measured up to `now`,
///   minus a closed break, or minus the open break elapsed so far;
/// * anything else contributes zero.
///
/// `now` must only be passed for the live day; the caller decides that.
pub fn day_minutes(slots: &DaySlots, now: Option<NaiveDateTime>) -> f64 {
    let Some(arrive) = slots.arrive else {
        return 0.0;
    };

    let (end, live) = match (slots.depart, now) {
        (Some(depart), _) => (depart, false),
        (None, Some(now)) => (now, true),
        (None, None) => return 0.0,
    };

    let span = minutes_between(arrive, end);

    let break_minutes = match (slots.break_start, slots.break_end) {
        (Some(start), Some(stop)) => minutes_between(start, stop),
        (Some(start), None) if live => minutes_between(start, end),
        _ => 0.0,
    };

    (span - break_minutes).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn punch(kind: PunchKind, h: u32, m: u32) -> PunchEvent {
        PunchEvent::new("w-1", kind, at(h, m))
    }

    #[test]
    fn full_day_with_closed_break() {
        let punches = [
            punch(PunchKind::ArriveSite, 8, 0),
            punch(PunchKind::BreakStart, 12, 0),
            punch(PunchKind::BreakEnd, 12, 30),
            punch(PunchKind::DepartSite, 17, 0),
        ];
        let slots = DaySlots::from_punches(&punches);
        assert_eq!(day_minutes(&slots, None), 510.0);
    }

    #[test]
    fn arrival_only_is_zero_without_live_clock() {
        let punches = [punch(PunchKind::ArriveSite, 8, 0)];
        let slots = DaySlots::from_punches(&punches);
        assert_eq!(day_minutes(&slots, None), 0.0);
    }

    #[test]
    fn departure_without_arrival_is_zero() {
        let punches = [punch(PunchKind::DepartSite, 17, 0)];
        let slots = DaySlots::from_punches(&punches);
        assert_eq!(day_minutes(&slots, Some(at(18, 0))), 0.0);
    }

    #[test]
    fn open_break_is_measured_against_now() {
        let punches = [
            punch(PunchKind::ArriveSite, 8, 0),
            punch(PunchKind::BreakStart, 12, 0),
        ];
        let slots = DaySlots::from_punches(&punches);
        // 08:00 → 12:45 is 285 minutes, the 45 minutes of open break do not count.
        assert_eq!(day_minutes(&slots, Some(at(12, 45))), 240.0);
    }

    #[test]
    fn working_without_break_is_measured_against_now() {
        let punches = [punch(PunchKind::ArriveSite, 7, 30)];
        let slots = DaySlots::from_punches(&punches);
        assert_eq!(day_minutes(&slots, Some(at(10, 0))), 150.0);
    }

    #[test]
    fn first_seen_punch_wins() {
        let punches = [
            punch(PunchKind::ArriveSite, 8, 0),
            punch(PunchKind::ArriveSite, 9, 0),
            punch(PunchKind::DepartSite, 16, 0),
        ];
        let slots = DaySlots::from_punches(&punches);
        assert_eq!(slots.arrive, Some(at(8, 0)));
        assert_eq!(day_minutes(&slots, None), 480.0);
    }

    #[test]
    fn sub_minute_precision_is_kept() {
        let arrive = at(8, 0);
        let depart = arrive + chrono::Duration::seconds(90);
        let punches = [
            PunchEvent::new("w-1", PunchKind::ArriveSite, arrive),
            PunchEvent::new("w-1", PunchKind::DepartSite, depart),
        ];
        let slots = DaySlots::from_punches(&punches);
        assert_eq!(day_minutes(&slots, None), 1.5);
    }

    #[test]
    fn departure_before_arrival_clamps_to_zero() {
        let punches = [
            punch(PunchKind::ArriveSite, 17, 0),
            punch(PunchKind::DepartSite, 8, 0),
        ];
        let slots = DaySlots::from_punches(&punches);
        assert_eq!(day_minutes(&slots, None), 0.0);
    }
}
