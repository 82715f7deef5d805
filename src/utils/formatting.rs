//! Formatting utilities used for CLI and export outputs.

use crate::models::aggregate::Reported;

pub const NO_DATA: &str = "no data";

/// `8h 30m`. Flooring happens here and nowhere earlier, so day sums keep
/// their fractional minutes until presentation.
pub fn format_minutes(total: f64) -> String {
    let total = total.max(0.0);
    let hours = (total / 60.0).floor();
    let minutes = (total % 60.0).floor();
    format!("{}h {}m", hours as i64, minutes as i64)
}

pub fn format_reported(value: Reported) -> String {
    match value {
        Reported::NoData => NO_DATA.to_string(),
        Reported::Minutes(m) => format_minutes(m),
    }
}
