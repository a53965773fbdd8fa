//! # Statistic Formatting
//!
//! Short human-readable values for leader rows.
//!
//! | Function | Input | Example |
//! |----------|-------|---------|
//! | [`format_duration`] | seconds | `1h 5m`, `3m 4s`, `5s` |
//! | [`format_distance`] | meters | `42.2 km`, `5.03 km` |
//! | [`format_speed`] | m/s | `27.4 km/h` |
//! | [`format_elevation`] | meters | `312 m` |
//! | [`format_pace`] | m/s | `5:00 /km` |
//! | [`date_range_label`] | end date, days | `Jan 1 - Jan 8` |

use chrono::{Days, NaiveDate};

/// Largest unit pair only: hours and minutes, minutes and seconds, or
/// seconds. Fractions are truncated.
pub fn format_duration(seconds: u64) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    if h > 0 {
        format!("{}h {}m", h, m)
    } else if m > 0 {
        format!("{}m {}s", m, s)
    } else {
        format!("{}s", s)
    }
}

/// Kilometers, one decimal from 10 km up, two below.
pub fn format_distance(meters: f64) -> String {
    let km = meters / 1000.0;
    if km >= 10.0 {
        format!("{:.1} km", km)
    } else {
        format!("{:.2} km", km)
    }
}

pub fn format_speed(meters_per_sec: f64) -> String {
    format!("{:.1} km/h", meters_per_sec * 3.6)
}

pub fn format_elevation(meters: f64) -> String {
    // `+ 0.0` turns -0 into 0
    format!("{} m", meters.round() + 0.0)
}

/// Minutes and seconds per kilometer.
///
/// Returns `None` for a non-positive or non-finite speed.
pub fn format_pace(meters_per_sec: f64) -> Option<String> {
    if !(meters_per_sec.is_finite() && meters_per_sec > 0.0) {
        return None;
    }
    // Round the total first so 299.6 s shows as 5:00, never 4:60.
    let total = (1000.0 / meters_per_sec).round() as u64;
    Some(format!("{}:{:02} /km", total / 60, total % 60))
}

/// `"Mon D - Mon D"` for the `days` days ending at `end`.
///
/// Falls back to the single end date if the start would underflow the
/// calendar.
pub fn date_range_label(end: NaiveDate, days: u64) -> String {
    let fmt = |d: NaiveDate| d.format("%b %-d").to_string();
    match end.checked_sub_days(Days::new(days)) {
        Some(start) => format!("{} - {}", fmt(start), fmt(end)),
        None => fmt(end),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(59), "59s");
        assert_eq!(format_duration(184), "3m 4s");
        assert_eq!(format_duration(3600), "1h 0m");
        assert_eq!(format_duration(3725), "1h 2m");
    }

    #[test]
    fn test_distance() {
        assert_eq!(format_distance(5030.0), "5.03 km");
        assert_eq!(format_distance(9999.0), "10.00 km");
        assert_eq!(format_distance(10000.0), "10.0 km");
        assert_eq!(format_distance(42195.0), "42.2 km");
    }

    #[test]
    fn test_speed() {
        assert_eq!(format_speed(7.6), "27.4 km/h");
        assert_eq!(format_speed(0.0), "0.0 km/h");
    }

    #[test]
    fn test_elevation() {
        assert_eq!(format_elevation(311.6), "312 m");
        assert_eq!(format_elevation(0.2), "0 m");
        assert_eq!(format_elevation(-0.2), "0 m");
        assert_eq!(format_elevation(-3.6), "-4 m");
    }

    #[test]
    fn test_pace() {
        assert_eq!(format_pace(1000.0 / 300.0).as_deref(), Some("5:00 /km"));
        assert_eq!(format_pace(1000.0 / 299.6).as_deref(), Some("5:00 /km"));
        assert_eq!(format_pace(1000.0 / 272.0).as_deref(), Some("4:32 /km"));
        assert_eq!(format_pace(0.0), None);
        assert_eq!(format_pace(f64::NAN), None);
    }

    #[test]
    fn test_date_range() {
        let end = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert_eq!(date_range_label(end, 7), "Jan 1 - Jan 8");

        let end = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        assert_eq!(date_range_label(end, 7), "Feb 24 - Mar 2");
    }
}
