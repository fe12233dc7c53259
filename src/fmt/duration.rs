//! Retrieval windows and job durations move through the calculator as
//! second counts; this renders them as a days/hours/minutes/seconds
//! breakdown for display.

const DAY_SECONDS: f64 = 86_400.0;
const HOUR_SECONDS: f64 = 3_600.0;
const MINUTE_SECONDS: f64 = 60.0;

/// Breaks a second count into `"N days N hours N minutes N seconds"`,
/// omitting components that don't apply. Suffixes are always plural.
///
/// A unit is emitted only when the remaining value strictly exceeds that
/// unit's divider, so an exact multiple rolls into the smaller unit:
/// `86400.0` renders as `"24 hours"`, not `"1 days"`, and `60.0` as
/// `"60 seconds"`. Non-finite input renders as the empty string.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() {
        return String::new();
    }

    let mut remaining = seconds;
    let mut output = String::new();

    if remaining > DAY_SECONDS {
        let days = (remaining / DAY_SECONDS).floor();
        remaining %= DAY_SECONDS;
        output.push_str(&format!("{days} days"));
    }

    if remaining > HOUR_SECONDS {
        let hours = (remaining / HOUR_SECONDS).floor();
        remaining %= HOUR_SECONDS;
        if !output.is_empty() {
            output.push(' ');
        }
        output.push_str(&format!("{hours} hours"));
    }

    if remaining > MINUTE_SECONDS {
        let minutes = (remaining / MINUTE_SECONDS).floor();
        remaining %= MINUTE_SECONDS;
        if !output.is_empty() {
            output.push(' ');
        }
        output.push_str(&format!("{minutes} minutes"));
    }

    if remaining > 0.0 {
        if !output.is_empty() {
            output.push(' ');
        }
        output.push_str(&format!("{remaining} seconds"));
    }

    output
}
