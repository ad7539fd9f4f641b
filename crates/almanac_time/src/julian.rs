//! Julian Date ↔ calendar conversions.
//!
//! Dates on or after 1582-10-15 are Gregorian, earlier dates are Julian
//! calendar dates. Valid for all non-negative Julian Dates.
//!
//! Source: Meeus, *Astronomical Algorithms*, 2nd ed., ch. 7.

/// Julian Date of J2000.0 (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Day offset used for Unix-epoch relative day counts.
pub const UNIX_EPOCH_JD: f64 = 2_440_588.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Day Number of 1582-10-15, first day of the Gregorian calendar.
const GREGORIAN_START_JDN: f64 = 2_299_161.0;

/// Whether a calendar date falls on or after the Gregorian reform.
pub fn is_gregorian(year: i32, month: u32, day: f64) -> bool {
    (year, month) > (1582, 10) || ((year, month) == (1582, 10) && day >= 15.0)
}

/// Convert a calendar date to a Julian Date.
///
/// `day` may carry a fractional part for the time of day, so
/// `calendar_to_jd(2000, 1, 1.5)` is J2000.0.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let (y, m) = (f64::from(y), f64::from(m));

    let b = if is_gregorian(year, month, day) {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Convert a Julian Date to `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.trunc();
    let f = shifted - z;

    let a = if z < GREGORIAN_START_JDN {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).trunc();
        z + 1.0 + alpha - (alpha / 4.0).trunc()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).trunc();
    let d = (365.25 * c).trunc();
    let e = ((b - d) / 30.6001).trunc();

    let day = b - d - (30.6001 * e).trunc() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}
