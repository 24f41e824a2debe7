//! Elapsed-time arithmetic on the source's formatted clock strings.

use regex::Regex;

use crate::types::UNKNOWN;

/// Computes the layover between an arrival and the next departure, both given
/// as `H:MM AM|PM` strings, e.g. `("7:32 AM", "8:32 AM")` → `"1h"`.
///
/// A departure earlier on the clock than the arrival is assumed to be the
/// following day. Input that does not match the time pattern yields
/// `"Unknown"`; this function never panics.
#[must_use]
pub fn layover_duration(arrival: &str, departure: &str) -> String {
    match (clock_minutes(arrival), clock_minutes(departure)) {
        (Some(arrived), Some(mut departs)) => {
            if departs < arrived {
                // Overnight connection: departure is on the next day.
                departs += 24 * 60;
            }
            format_minutes(departs - arrived)
        }
        _ => UNKNOWN.to_string(),
    }
}

/// Parses `H:MM AM|PM` (1-2 digit hour, case-sensitive meridiem) into
/// minutes since midnight. 12 AM maps to 0, 12 PM stays 12.
fn clock_minutes(time: &str) -> Option<u32> {
    let re = Regex::new(r"^(\d{1,2}):(\d{2})\s*(AM|PM)").expect("valid regex");
    let caps = re.captures(time.trim())?;

    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;

    let hour = match (&caps[3], hour) {
        ("PM", h) if h != 12 => h + 12,
        ("AM", 12) => 0,
        (_, h) => h,
    };

    Some(hour * 60 + minute)
}

fn format_minutes(total: u32) -> String {
    if total < 60 {
        return format!("{total}m");
    }
    let hours = total / 60;
    let minutes = total % 60;
    if minutes == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {minutes}m")
    }
}
