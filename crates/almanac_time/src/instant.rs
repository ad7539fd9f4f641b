//! Conversions between wall-clock instants and astronomical day counts.
//!
//! Instants are `chrono::DateTime<Utc>`. Julian Dates produced here are in
//! UT; callers that need dynamic time add ΔT via [`crate::ut_to_tt_jd`].

use chrono::{
    DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, TimeDelta, Timelike,
    Utc,
};

use crate::error::TimeError;
use crate::julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar,
};

/// Julian Date of an instant.
///
/// Subsecond precision is carried into the day fraction.
pub fn instant_to_jd(instant: &DateTime<Utc>) -> f64 {
    let seconds = f64::from(instant.num_seconds_from_midnight())
        + f64::from(instant.nanosecond()) / 1e9;
    calendar_to_jd(
        instant.year(),
        instant.month(),
        f64::from(instant.day()) + seconds / SECONDS_PER_DAY,
    )
}

/// Instant for a Julian Date, rounded to the nearest millisecond.
///
/// Before 1582-10-15 the calendar label is Julian, as in
/// [`instant_to_jd`]. A Julian 29 February in a year the Gregorian
/// calendar does not leap (1500, 1300, ...) has no `chrono` label and
/// rolls over to 1 March. Returns `None` for NaN or infinite input and
/// beyond `chrono`'s range.
pub fn jd_to_instant(jd: f64) -> Option<DateTime<Utc>> {
    if !jd.is_finite() {
        return None;
    }
    let (year, month, day_frac) = jd_to_calendar(jd);
    let day = day_frac.floor();
    let millis = ((day_frac - day) * SECONDS_PER_DAY * 1000.0).round() as i64;

    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let date = first.checked_add_days(Days::new((day as u64).saturating_sub(1)))?;
    let midnight = date.and_time(NaiveTime::MIN);
    let naive = midnight.checked_add_signed(TimeDelta::milliseconds(millis))?;
    Some(naive.and_utc())
}

/// Like [`jd_to_instant`] but reports failure as a [`TimeError`].
pub fn try_jd_to_instant(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    jd_to_instant(jd).ok_or(TimeError::OutOfRange(jd))
}

/// Truncate subsecond precision.
pub fn normalize_instant(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.trunc_subsecs(0)
}

/// 00:00:00 UTC on the calendar day containing `instant`.
pub fn day_start(instant: &DateTime<Utc>) -> DateTime<Utc> {
    instant.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Days elapsed since J2000.0 (may be negative).
pub fn days_since_j2000(jd: f64) -> f64 {
    jd - J2000_JD
}

/// Julian centuries since J2000.0, the `T` argument of the periodic series.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Julian Date computed from the Unix timestamp of `instant`.
///
/// Millisecond timestamp divided by a day, less half a day, plus 2440588.
pub fn unix_epoch_julian(instant: &DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / (SECONDS_PER_DAY * 1000.0) - 0.5 + UNIX_EPOCH_JD
}

/// Instant for a Unix-epoch Julian Date, rounded to the nearest millisecond.
pub fn from_unix_epoch_julian(jd: f64) -> Option<DateTime<Utc>> {
    if !jd.is_finite() {
        return None;
    }
    let millis = ((jd + 0.5 - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
    if millis.abs() > 8.0e15 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

/// Year with fractional part, as used by ΔT and the apsis series.
pub fn decimal_year(instant: &DateTime<Utc>) -> f64 {
    let year = instant.year();
    let days_in_year = if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366.0
    } else {
        365.0
    };
    let elapsed = f64::from(instant.ordinal0())
        + f64::from(instant.num_seconds_from_midnight()) / SECONDS_PER_DAY;
    f64::from(year) + elapsed / days_in_year
}

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse RFC 3339, `YYYY-MM-DDThh:mm[:ss]` (UTC, optional trailing `Z`),
/// or a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>, TimeError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let bare = s.strip_suffix('Z').unwrap_or(s);
    for fmt in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(bare, fmt) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(bare, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| TimeError::Parse(s.to_string()))
}
