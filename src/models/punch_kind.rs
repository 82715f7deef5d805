use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four clock actions a worker can take during a day.
///
/// The variant order follows the logical sequence of a working day; it carries
/// no arithmetic meaning.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum PunchKind {
    #[value(name = "arrive")]
    ArriveSite,
    #[value(name = "break-start")]
    BreakStart,
    #[value(name = "break-end")]
    BreakEnd,
    #[value(name = "depart")]
    DepartSite,
}

impl PunchKind {
    pub const ALL: [PunchKind; 4] = [
        PunchKind::ArriveSite,
        PunchKind::BreakStart,
        PunchKind::BreakEnd,
        PunchKind::DepartSite,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchKind::ArriveSite => "arrive",
            PunchKind::BreakStart => "break_start",
            PunchKind::BreakEnd => "break_end",
            PunchKind::DepartSite => "depart",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "arrive" => Some(PunchKind::ArriveSite),
            "break_start" => Some(PunchKind::BreakStart),
            "break_end" => Some(PunchKind::BreakEnd),
            "depart" => Some(PunchKind::DepartSite),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PunchKind::ArriveSite => "arrival",
            PunchKind::BreakStart => "break start",
            PunchKind::BreakEnd => "break end",
            PunchKind::DepartSite => "departure",
        }
    }
}

impl fmt::Display for PunchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
