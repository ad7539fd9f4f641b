//! Rise, set and twilight times by hourly scanning.
//!
//! The altitude is sampled at 00:00 UTC and at each following hour up to
//! 24:00. A sign change relative to the threshold between two samples is
//! refined minute by minute within that hour, then linearly interpolated
//! between the bracketing minutes. Only the first rise and the first set of
//! the day are reported.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Utc};

use almanac_core::{AlmanacConfig, Body, GeoPosition};
use almanac_series::normalize_degrees;
use almanac_time::{J2000_JD, instant_to_jd, jd_to_instant};

use crate::cancel::CancellationToken;
use crate::error::SearchError;
use crate::riseset_types::{Horizon, RiseSetResult, SolarDayEvents};

/// Hourly samples after the initial 00:00 sample.
const HOURS_PER_DAY: i64 = 24;

/// Minute steps within an hour bracketing a crossing.
const MINUTES_PER_HOUR: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Crossing {
    Rising,
    Setting,
}

impl Crossing {
    /// Whether the threshold-relative altitude went from `before` to `after`
    /// in this direction. Zero counts as above.
    fn crossed(self, before: f64, after: f64) -> bool {
        match self {
            Self::Rising => before < 0.0 && after >= 0.0,
            Self::Setting => before >= 0.0 && after < 0.0,
        }
    }
}

/// Locate the crossing inside the hour starting at `hour_start`, given the
/// relative altitudes at both ends of the hour.
fn refine_crossing<F>(
    hour_start: DateTime<Utc>,
    start_value: f64,
    end_value: f64,
    relative_altitude: &F,
    direction: Crossing,
) -> DateTime<Utc>
where
    F: Fn(DateTime<Utc>) -> f64,
{
    let mut before = start_value;
    for minute in 1..=MINUTES_PER_HOUR {
        let after = if minute == MINUTES_PER_HOUR {
            end_value
        } else {
            relative_altitude(hour_start + TimeDelta::minutes(minute))
        };
        if direction.crossed(before, after) {
            let minute_start = hour_start + TimeDelta::minutes(minute - 1);
            return interpolate(minute_start, TimeDelta::minutes(1), before, after);
        }
        before = after;
    }
    // Endpoints bracket a crossing, so some minute must; fall back to the hour.
    interpolate(hour_start, TimeDelta::hours(1), start_value, end_value)
}

/// Zero of the line through `(start, before)` and `(start + span, after)`.
fn interpolate(start: DateTime<Utc>, span: TimeDelta, before: f64, after: f64) -> DateTime<Utc> {
    let fraction = (before / (before - after)).clamp(0.0, 1.0);
    let millis = (fraction * span.num_milliseconds() as f64).round() as i64;
    start + TimeDelta::milliseconds(millis)
}

/// Scan one UTC day for the first rise and first set of an altitude curve.
///
/// `altitude_deg` maps an instant to an altitude in degrees; crossings are
/// reported relative to `threshold_deg`. The token, if any, is checked
/// before each hourly step.
pub fn scan_crossings<F>(
    day: NaiveDate,
    threshold_deg: f64,
    altitude_deg: F,
    cancel: Option<&CancellationToken>,
) -> Result<RiseSetResult, SearchError>
where
    F: Fn(DateTime<Utc>) -> f64,
{
    let day_start = day.and_time(NaiveTime::MIN).and_utc();
    let relative = |t: DateTime<Utc>| altitude_deg(t) - threshold_deg;

    let mut rise = None;
    let mut set = None;
    let mut previous = relative(day_start);

    for hour in 1..=HOURS_PER_DAY {
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            log::warn!("rise/set scan for {day} cancelled at hour {hour}");
            return Err(SearchError::Cancelled);
        }
        let hour_start = day_start + TimeDelta::hours(hour - 1);
        let current = relative(day_start + TimeDelta::hours(hour));

        if rise.is_none() && Crossing::Rising.crossed(previous, current) {
            let t = refine_crossing(hour_start, previous, current, &relative, Crossing::Rising);
            log::trace!("rise crossing at {t}");
            rise = Some(t);
        }
        if set.is_none() && Crossing::Setting.crossed(previous, current) {
            let t = refine_crossing(hour_start, previous, current, &relative, Crossing::Setting);
            log::trace!("set crossing at {t}");
            set = Some(t);
        }
        previous = current;
        if rise.is_some() && set.is_some() {
            break;
        }
    }

    let result = RiseSetResult::new(
        rise.map(|t| t.fixed_offset()),
        set.map(|t| t.fixed_offset()),
        previous >= 0.0,
    );
    if result.status.is_all_day() {
        log::debug!("no crossing of {threshold_deg}° on {day}: {:?}", result.status);
    }
    Ok(result)
}

/// Rise and set of a body's centre across a horizon on a UTC day.
pub fn body_rise_set(
    body: Body,
    day: NaiveDate,
    position: &GeoPosition,
    horizon: Horizon,
    config: &AlmanacConfig,
    cancel: Option<&CancellationToken>,
) -> Result<RiseSetResult, SearchError> {
    scan_crossings(
        day,
        horizon.threshold_deg(config),
        |t| body.altitude_deg(instant_to_jd(&t), position, config),
        cancel,
    )
}

/// Sun's rise and set across a horizon on a UTC day.
pub fn sun_rise_set(
    day: NaiveDate,
    position: &GeoPosition,
    horizon: Horizon,
    config: &AlmanacConfig,
    cancel: Option<&CancellationToken>,
) -> Result<RiseSetResult, SearchError> {
    body_rise_set(Body::Sun, day, position, horizon, config, cancel)
}

/// Moonrise and moonset at the apparent horizon on a UTC day.
pub fn moon_rise_set(
    day: NaiveDate,
    position: &GeoPosition,
    config: &AlmanacConfig,
    cancel: Option<&CancellationToken>,
) -> Result<RiseSetResult, SearchError> {
    body_rise_set(Body::Moon, day, position, Horizon::Apparent, config, cancel)
}

/// Sun's meridian transit nearest the middle of a UTC day.
///
/// Uses the solar transit formula with the equation of time approximated
/// from the mean anomaly and ecliptic longitude. Returns `None` when the
/// transit falls outside `[00:00, 24:00)` of `day`, which happens only
/// within seconds of the date line.
pub fn solar_noon(day: NaiveDate, position: &GeoPosition) -> Option<DateTime<FixedOffset>> {
    const J0: f64 = 0.0009;
    let day_start = day.and_time(NaiveTime::MIN).and_utc();
    let midday = instant_to_jd(&(day_start + TimeDelta::hours(12))) - J2000_JD;

    let lw = -position.longitude_deg / 360.0;
    let cycle = (midday - J0 - lw).round();
    let approx = J0 + lw + cycle;

    let m = normalize_degrees(357.5291 + 0.985_600_28 * approx).to_radians();
    let c = 1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin();
    let l = (m.to_degrees() + c + 102.9372 + 180.0).to_radians();
    let transit = J2000_JD + approx + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin();

    let noon = jd_to_instant(transit)?;
    (noon.date_naive() == day).then(|| noon.fixed_offset())
}

/// Sunrise/sunset, lower-limb crossings, the three twilights and solar noon.
pub fn solar_day_events(
    day: NaiveDate,
    position: &GeoPosition,
    config: &AlmanacConfig,
    cancel: Option<&CancellationToken>,
) -> Result<SolarDayEvents, SearchError> {
    let scan = |horizon| sun_rise_set(day, position, horizon, config, cancel);
    Ok(SolarDayEvents {
        sunrise_sunset: scan(Horizon::Apparent)?,
        bottom_of_disc: scan(Horizon::BottomOfDisc)?,
        civil: scan(Horizon::Civil)?,
        nautical: scan(Horizon::Nautical)?,
        astronomical: scan(Horizon::Astronomical)?,
        solar_noon: solar_noon(day, position),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riseset_types::RiseSetStatus;
    use chrono::Timelike;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 3, 15).unwrap()
    }

    fn hours_since_midnight(t: DateTime<Utc>) -> f64 {
        let start = day().and_time(NaiveTime::MIN).and_utc();
        (t - start).num_milliseconds() as f64 / 3_600_000.0
    }

    #[test]
    fn synthetic_rise_and_set_are_interpolated() {
        // Altitude = 10·sin(π(h − 6)/12): rises at 06:00, sets at 18:00.
        let curve = |t: DateTime<Utc>| {
            let h = hours_since_midnight(t);
            10.0 * (std::f64::consts::PI * (h - 6.0) / 12.0).sin()
        };
        let r = scan_crossings(day(), 0.0, curve, None).unwrap();
        assert_eq!(r.status, RiseSetStatus::RiseAndSet);
        // Exact hour samples hit zero, and zero counts as above.
        assert_eq!(r.rise.unwrap().hour(), 6);
        let set = r.set.unwrap();
        assert!((17..=18).contains(&set.hour()));
    }

    #[test]
    fn crossing_inside_a_minute() {
        // Linear curve crossing −0.3 at 07:30:30.
        let target = 7.0 + 30.5 / 60.0;
        let curve = |t: DateTime<Utc>| (hours_since_midnight(t) - target) - 0.3;
        let r = scan_crossings(day(), -0.3, curve, None).unwrap();
        assert_eq!(r.status, RiseSetStatus::NoSet);
        let rise = r.rise.unwrap();
        assert_eq!((rise.hour(), rise.minute(), rise.second()), (7, 30, 30));
    }

    #[test]
    fn always_above_is_up_all_day() {
        let r = scan_crossings(day(), -0.3, |_| 5.0, None).unwrap();
        assert_eq!(r, RiseSetResult::all_day(true));
        assert_eq!(r.status, RiseSetStatus::UpAllDay);
    }

    #[test]
    fn always_below_is_down_all_day() {
        let r = scan_crossings(day(), -0.3, |_| -40.0, None).unwrap();
        assert_eq!(r.status, RiseSetStatus::DownAllDay);
        assert!(r.rise.is_none() && r.set.is_none());
    }

    #[test]
    fn set_only_is_no_rise() {
        let curve = |t: DateTime<Utc>| 12.0 - hours_since_midnight(t);
        let r = scan_crossings(day(), 0.0, curve, None).unwrap();
        assert_eq!(r.status, RiseSetStatus::NoRise);
        assert_eq!(r.set.unwrap().hour(), 12);
    }

    #[test]
    fn cancelled_before_first_step() {
        let token = CancellationToken::new();
        token.cancel();
        let r = scan_crossings(day(), 0.0, |_| 1.0, Some(&token));
        assert_eq!(r, Err(SearchError::Cancelled));
    }

    #[test]
    fn solar_noon_greenwich_near_midday() {
        let noon = solar_noon(day(), &GeoPosition::new(51.48, 0.0)).unwrap();
        // Equation of time mid-March is about +9 minutes.
        let minutes = noon.hour() * 60 + noon.minute();
        assert!((12 * 60..12 * 60 + 15).contains(&minutes), "{noon}");
    }

    #[test]
    fn solar_noon_stays_on_day_near_date_line() {
        for lon in [-170.0, -120.0, 0.0, 120.0, 179.0] {
            let noon = solar_noon(day(), &GeoPosition::new(0.0, lon));
            assert!(noon.is_some(), "lon {lon}");
        }
    }
}
