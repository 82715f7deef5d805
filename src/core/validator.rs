//! Punch validator: decides which punch kind a worker may record next on a
//! given day, from the kinds already recorded that day.

use crate::errors::{AppError, AppResult};
use crate::models::punch_kind::PunchKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Whether a worker must have taken (and closed) a break before departing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BreakPolicy {
    /// A day without any break may still be closed with a departure.
    #[default]
    Optional,
    /// Departure needs a closed break, even when no break was ever started.
    Required,
}

impl BreakPolicy {
    pub fn from_flag(require_break: bool) -> Self {
        if require_break {
            BreakPolicy::Required
        } else {
            BreakPolicy::Optional
        }
    }
}

/// Attendance state of one worker on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceState {
    NotStarted,
    Working { break_taken: bool },
    OnBreak,
    Departed,
}

impl AttendanceState {
    /// Rebuild the state from the kinds recorded so far, whatever their order.
    pub fn from_kinds<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = PunchKind>,
    {
        let present: BTreeSet<PunchKind> = kinds.into_iter().collect();

        if present.contains(&PunchKind::DepartSite) {
            AttendanceState::Departed
        } else if present.contains(&PunchKind::BreakStart)
            && !present.contains(&PunchKind::BreakEnd)
        {
            AttendanceState::OnBreak
        } else if present.contains(&PunchKind::ArriveSite) {
            AttendanceState::Working {
                break_taken: present.contains(&PunchKind::BreakStart),
            }
        } else {
            AttendanceState::NotStarted
        }
    }

    /// The state reached by recording `kind`, or `None` when the punch is illegal.
    pub fn next(self, kind: PunchKind, policy: BreakPolicy) -> Option<AttendanceState> {
        use AttendanceState::*;
        use PunchKind::*;

        match (self, kind) {
            (NotStarted, ArriveSite) => Some(Working { break_taken: false }),
            (Working { break_taken: false }, BreakStart) => Some(OnBreak),
            (OnBreak, BreakEnd) => Some(Working { break_taken: true }),
            (Working { break_taken: true }, DepartSite) => Some(Departed),
            (Working { break_taken: false }, DepartSite) => match policy {
                BreakPolicy::Optional => Some(Departed),
                BreakPolicy::Required => None,
            },
            (NotStarted, BreakStart | BreakEnd | DepartSite)
            | (Working { .. }, ArriveSite | BreakStart | BreakEnd)
            | (OnBreak, ArriveSite | BreakStart | DepartSite)
            | (Departed, _) => None,
        }
    }
}

impl fmt::Display for AttendanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceState::NotStarted => f.write_str("not started"),
            AttendanceState::Working { break_taken: false } => f.write_str("working"),
            AttendanceState::Working { break_taken: true } => {
                f.write_str("working (break taken)")
            }
            AttendanceState::OnBreak => f.write_str("on break"),
            AttendanceState::Departed => f.write_str("departed"),
        }
    }
}

/// `true` when `candidate` may be recorded after the kinds in `present`.
pub fn can_record(present: &[PunchKind], candidate: PunchKind, policy: BreakPolicy) -> bool {
    let state = AttendanceState::from_kinds(present.iter().copied());
    let allowed = state.next(candidate, policy).is_some();
    debug!(%state, %candidate, allowed, "punch validation");
    allowed
}

/// Same as [`can_record`], with the rejection turned into `InvalidTransition`.
pub fn check(present: &[PunchKind], candidate: PunchKind, policy: BreakPolicy) -> AppResult<()> {
    let state = AttendanceState::from_kinds(present.iter().copied());
    match state.next(candidate, policy) {
        Some(_) => Ok(()),
        None => Err(AppError::InvalidTransition {
            state,
            kind: candidate,
        }),
    }
}

/// Kinds that may legally be punched next, in day order.
pub fn next_allowed(present: &[PunchKind], policy: BreakPolicy) -> Vec<PunchKind> {
    PunchKind::ALL
        .into_iter()
        .filter(|k| can_record(present, *k, policy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use PunchKind::*;

    const OPT: BreakPolicy = BreakPolicy::Optional;
    const REQ: BreakPolicy = BreakPolicy::Required;

    #[test]
    fn arrival_is_only_allowed_first() {
        assert_eq!(next_allowed(&[], OPT), vec![ArriveSite]);
        assert_eq!(next_allowed(&[], REQ), vec![ArriveSite]);
        for present in [
            vec![ArriveSite],
            vec![ArriveSite, BreakStart],
            vec![ArriveSite, BreakStart, BreakEnd],
            vec![ArriveSite, BreakStart, BreakEnd, DepartSite],
        ] {
            assert!(!can_record(&present, ArriveSite, OPT), "{present:?}");
        }
    }

    #[test]
    fn no_kind_is_accepted_twice() {
        let full_day = [ArriveSite, BreakStart, BreakEnd, DepartSite];
        for (i, kind) in full_day.iter().enumerate() {
            let present = &full_day[..=i];
            assert!(!can_record(present, *kind, OPT), "{kind:?} after {present:?}");
        }
        assert!(next_allowed(&full_day, OPT).is_empty());
    }

    #[test]
    fn open_break_blocks_departure() {
        let present = [ArriveSite, BreakStart];
        assert!(!can_record(&present, DepartSite, OPT));
        assert!(!can_record(&present, DepartSite, REQ));
        assert_eq!(next_allowed(&present, OPT), vec![BreakEnd]);
    }

    #[test]
    fn closed_break_allows_departure() {
        let present = [ArriveSite, BreakStart, BreakEnd];
        assert!(can_record(&present, DepartSite, OPT));
        assert!(can_record(&present, DepartSite, REQ));
        assert!(!can_record(&present, BreakStart, OPT));
    }

    #[test]
    fn breakless_departure_depends_on_policy() {
        assert!(can_record(&[ArriveSite], DepartSite, OPT));
        assert!(!can_record(&[ArriveSite], DepartSite, REQ));
        assert_eq!(next_allowed(&[ArriveSite], REQ), vec![BreakStart]);
    }

    #[test]
    fn nothing_after_departure() {
        let present = [ArriveSite, DepartSite];
        for kind in PunchKind::ALL {
            assert!(!can_record(&present, kind, OPT));
        }
    }

    #[test]
    fn break_needs_arrival() {
        assert!(!can_record(&[], BreakStart, OPT));
        assert!(!can_record(&[], BreakEnd, OPT));
        assert!(!can_record(&[], DepartSite, OPT));
    }

    #[test]
    fn state_is_order_independent() {
        let a = AttendanceState::from_kinds([BreakStart, ArriveSite]);
        let b = AttendanceState::from_kinds([ArriveSite, BreakStart]);
        assert_eq!(a, b);
        assert_eq!(a, AttendanceState::OnBreak);
    }

    #[test]
    fn check_reports_state_and_kind() {
        let err = check(&[ArriveSite, BreakStart], DepartSite, OPT).unwrap_err();
        match err {
            AppError::InvalidTransition { state, kind } => {
                assert_eq!(state, AttendanceState::OnBreak);
                assert_eq!(kind, DepartSite);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(check(&[], ArriveSite, OPT).is_ok());
    }
}
