//! Re-projecting the almanac onto a local calendar day.
//!
//! A local day `[00:00, 24:00)` at a non-zero offset straddles two UTC days,
//! so its sunrise may come from the previous UTC day's scan and its sunset
//! from the next one's. Day events are scanned for the UTC days before, on
//! and after the local date, and each timestamp is taken from whichever scan
//! places it inside the local day.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Utc};

use almanac_core::{AlmanacConfig, GeoPosition};
use almanac_search::{CancellationToken, RiseSetResult, RiseSetStatus, SolarDayEvents};
use almanac_time::normalize_instant;

use crate::celestial::Celestial;
use crate::compute::{DayEvents, assemble, day_events, validate};
use crate::error::AlmanacError;
use crate::shift::InstantFields;

/// Candidate indices in order of preference: the local date's own UTC day,
/// then the day before, then the day after.
const PREFERENCE: [usize; 3] = [1, 0, 2];

/// Fixed offset for `hours` east of UTC, rounded to the second.
pub fn utc_offset(hours: f64) -> Result<FixedOffset, AlmanacError> {
    if !hours.is_finite() || hours.abs() >= 24.0 {
        return Err(AlmanacError::InvalidOffset(hours));
    }
    FixedOffset::east_opt((hours * 3600.0).round() as i32)
        .ok_or(AlmanacError::InvalidOffset(hours))
}

/// Half-open UTC interval covered by one local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LocalDay {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl LocalDay {
    fn new(date: NaiveDate, offset: FixedOffset) -> Self {
        let start = date.and_time(NaiveTime::MIN).and_utc()
            - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
        Self {
            start,
            end: start + TimeDelta::days(1),
        }
    }

    fn contains(&self, t: &DateTime<FixedOffset>) -> bool {
        *t >= self.start && *t < self.end
    }
}

fn pick(
    candidates: [Option<DateTime<FixedOffset>>; 3],
    window: &LocalDay,
) -> Option<DateTime<FixedOffset>> {
    PREFERENCE
        .iter()
        .filter_map(|&i| candidates[i])
        .find(|t| window.contains(t))
}

/// Whether the body is up at the start of `window`, from the latest
/// crossing before it.
fn up_at_start(candidates: &[RiseSetResult; 3], window: &LocalDay) -> Option<bool> {
    candidates
        .iter()
        .flat_map(|c| [(c.rise, true), (c.set, false)])
        .filter_map(|(t, up)| t.map(|t| (t, up)))
        .filter(|(t, _)| *t < window.start)
        .max_by_key(|(t, _)| *t)
        .map(|(_, up)| up)
}

/// One rise/set result for the local day out of three UTC-day results.
///
/// An all-day status on any of the three days wins and clears both
/// times; otherwise each crossing is taken from the day that places it
/// inside the local day.
fn reproject(candidates: [RiseSetResult; 3], window: &LocalDay) -> RiseSetResult {
    let all_day = PREFERENCE
        .iter()
        .map(|&i| candidates[i].status)
        .find(|s| s.is_all_day());
    if let Some(status) = all_day {
        return RiseSetResult::all_day(status == RiseSetStatus::UpAllDay);
    }

    let rise = pick(candidates.map(|c| c.rise), window);
    let set = pick(candidates.map(|c| c.set), window);
    if rise.is_none() && set.is_none() {
        return RiseSetResult::all_day(up_at_start(&candidates, window).unwrap_or(false));
    }
    RiseSetResult::new(rise, set, false)
}

fn reproject_day(events: [DayEvents; 3], window: &LocalDay) -> DayEvents {
    let solar =
        |f: fn(&SolarDayEvents) -> RiseSetResult| reproject(events.map(|e| f(&e.solar)), window);
    DayEvents {
        solar: SolarDayEvents {
            sunrise_sunset: solar(|s| s.sunrise_sunset),
            bottom_of_disc: solar(|s| s.bottom_of_disc),
            civil: solar(|s| s.civil),
            nautical: solar(|s| s.nautical),
            astronomical: solar(|s| s.astronomical),
            solar_noon: pick(events.map(|e| e.solar.solar_noon), window),
        },
        moon: reproject(events.map(|e| e.moon), window),
    }
}

/// Almanac for `position` at `instant`, with every timestamp expressed at
/// `offset_hours` east of UTC and day events chosen for the local date.
pub fn compute_local(
    position: &GeoPosition,
    instant: &DateTime<Utc>,
    offset_hours: f64,
    config: &AlmanacConfig,
) -> Result<Celestial, AlmanacError> {
    compute_local_with_cancel(position, instant, offset_hours, config, None)
}

/// [`compute_local`] with a cancellation token checked between scan steps.
pub fn compute_local_with_cancel(
    position: &GeoPosition,
    instant: &DateTime<Utc>,
    offset_hours: f64,
    config: &AlmanacConfig,
    cancel: Option<&CancellationToken>,
) -> Result<Celestial, AlmanacError> {
    let offset = utc_offset(offset_hours)?;
    validate(position, config)?;
    let instant = normalize_instant(*instant);
    let date = instant.with_timezone(&offset).date_naive();
    let window = LocalDay::new(date, offset);

    let days = [
        date.pred_opt().unwrap_or(date),
        date,
        date.succ_opt().unwrap_or(date),
    ];
    let events = [
        day_events(days[0], position, config, cancel)?,
        day_events(days[1], position, config, cancel)?,
        day_events(days[2], position, config, cancel)?,
    ];

    let local = reproject_day(events, &window);
    let local = DayEvents {
        solar: local.solar.at_offset(offset),
        moon: local.moon.at_offset(offset),
    };
    log::debug!(
        "local day {date} at {offset}: sun {:?}, moon {:?}",
        local.solar.sunrise_sunset.status,
        local.moon.status
    );
    Ok(assemble(instant, offset, position, local, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 3, d).unwrap()
    }

    fn at(d: u32, h: u32) -> Option<DateTime<FixedOffset>> {
        Some(Utc.with_ymd_and_hms(2018, 3, d, h, 0, 0).unwrap().fixed_offset())
    }

    fn plus9() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    #[test]
    fn offset_validation() {
        assert_eq!(utc_offset(5.5).unwrap().local_minus_utc(), 19_800);
        assert_eq!(utc_offset(-3.75).unwrap().local_minus_utc(), -13_500);
        for bad in [24.0, -24.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(utc_offset(bad), Err(AlmanacError::InvalidOffset(_))));
        }
    }

    #[test]
    fn local_day_window() {
        let w = LocalDay::new(date(15), plus9());
        assert_eq!(w.start, Utc.with_ymd_and_hms(2018, 3, 14, 15, 0, 0).unwrap());
        assert!(w.contains(&at(14, 15).unwrap()));
        assert!(!w.contains(&at(15, 15).unwrap()));
    }

    #[test]
    fn events_are_taken_from_the_day_they_fall_on() {
        // Sunrise 21:00 UTC, sunset 09:00 UTC every day; at +9 the local
        // day's sunrise comes from the previous UTC day.
        let day = |d| RiseSetResult::new(at(d, 21), at(d, 9), true);
        let r = reproject([day(14), day(15), day(16)], &LocalDay::new(date(15), plus9()));
        assert_eq!(r.status, RiseSetStatus::RiseAndSet);
        assert_eq!(r.rise, at(14, 21));
        assert_eq!(r.set, at(15, 9));
    }

    #[test]
    fn neighbouring_all_day_beats_rise_and_set() {
        let candidates = [
            RiseSetResult::all_day(false),
            RiseSetResult::new(at(15, 10), at(15, 14), false),
            RiseSetResult::new(at(16, 10), at(16, 14), false),
        ];
        let r = reproject(candidates, &LocalDay::new(date(15), plus9()));
        assert_eq!(r.status, RiseSetStatus::DownAllDay);
        assert!(r.rise.is_none() && r.set.is_none());
    }

    #[test]
    fn next_day_all_day_counts_at_zero_offset() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let candidates = [
            RiseSetResult::new(at(14, 3), at(14, 23), false),
            RiseSetResult::new(None, at(15, 2), false),
            RiseSetResult::all_day(true),
        ];
        let r = reproject(candidates, &LocalDay::new(date(15), utc));
        assert_eq!(r, RiseSetResult::all_day(true));
    }

    #[test]
    fn centre_all_day_takes_precedence_over_neighbours() {
        let candidates = [
            RiseSetResult::all_day(false),
            RiseSetResult::all_day(true),
            RiseSetResult::all_day(false),
        ];
        let r = reproject(candidates, &LocalDay::new(date(15), plus9()));
        assert_eq!(r.status, RiseSetStatus::UpAllDay);
    }

    #[test]
    fn no_crossings_uses_state_at_local_midnight() {
        // Local day at +9 covers 14 15:00 .. 15 15:00 UTC; every crossing
        // falls outside it.
        let window = LocalDay::new(date(15), plus9());
        let risen_before = [
            RiseSetResult::new(at(14, 12), None, true),
            RiseSetResult::new(None, at(15, 20), false),
            RiseSetResult::new(at(16, 3), at(16, 22), false),
        ];
        assert_eq!(reproject(risen_before, &window), RiseSetResult::all_day(true));

        let set_before = [
            RiseSetResult::new(at(14, 12), at(14, 13), false),
            RiseSetResult::new(at(15, 18), None, true),
            RiseSetResult::new(None, at(16, 2), false),
        ];
        assert_eq!(reproject(set_before, &window), RiseSetResult::all_day(false));
    }

    #[test]
    fn zero_offset_matches_utc_pass() {
        let pos = GeoPosition::new(42.3601, -71.0589);
        let t = Utc.with_ymd_and_hms(2018, 3, 15, 17, 0, 0).unwrap();
        let config = AlmanacConfig::default();
        let utc = crate::compute(&pos, &t, &config).unwrap();
        let local = compute_local(&pos, &t, 0.0, &config).unwrap();
        assert_eq!(utc, local);
    }
}
