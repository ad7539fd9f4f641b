//! Local-day re-projection against reference rise/set times.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use proptest::prelude::*;

use almanac_rs::*;

const TOKYO: GeoPosition = GeoPosition::new(35.68, 139.69);
const TROMSO: GeoPosition = GeoPosition::new(69.65, 18.96);

fn clock_minutes(t: DateTime<FixedOffset>) -> i64 {
    i64::from(t.hour() * 60 + t.minute())
}

fn assert_near(t: Option<DateTime<FixedOffset>>, date: NaiveDate, h: u32, m: u32, tol: i64) {
    let t = t.expect("event expected");
    assert_eq!(t.date_naive(), date, "{t}");
    let diff = (clock_minutes(t) - i64::from(h * 60 + m)).abs();
    assert!(diff <= tol, "{t} vs {h:02}:{m:02}");
}

fn tokyo_noon() -> DateTime<Utc> {
    // 12:00 JST
    Utc.with_ymd_and_hms(2018, 3, 15, 3, 0, 0).unwrap()
}

/// Tokyo, 2018-03-15 JST: sunrise 05:53 falls on the previous UTC day.
#[test]
fn tokyo_sunrise_comes_from_previous_utc_day() {
    let c = compute_local(&TOKYO, &tokyo_noon(), 9.0, &AlmanacConfig::default()).unwrap();
    let day = NaiveDate::from_ymd_opt(2018, 3, 15).unwrap();
    let sun = c.sun.events.sunrise_sunset;
    assert_eq!(sun.status, RiseSetStatus::RiseAndSet);
    assert_near(sun.rise, day, 5, 53, 5);
    assert_near(sun.set, day, 17, 47, 5);
    assert_eq!(c.instant.offset().local_minus_utc(), 9 * 3600);
    assert!(c.is_sun_up());
}

#[test]
fn plain_offset_shift_lands_on_the_wrong_day() {
    let config = AlmanacConfig::default();
    let jst = utc_offset(9.0).unwrap();
    let shifted = compute(&TOKYO, &tokyo_noon(), &config).unwrap().at_offset(jst);
    let rise = shifted.sun.events.sunrise_sunset.rise.unwrap();
    assert_eq!(rise.date_naive(), NaiveDate::from_ymd_opt(2018, 3, 16).unwrap());
}

/// Moonrise 03:57 JST (previous UTC day) and moonset 14:37 JST.
#[test]
fn tokyo_moon_local_day() {
    let c = compute_local(&TOKYO, &tokyo_noon(), 9.0, &AlmanacConfig::default()).unwrap();
    let day = NaiveDate::from_ymd_opt(2018, 3, 15).unwrap();
    assert_eq!(c.moon.rise_set.status, RiseSetStatus::RiseAndSet);
    assert_near(c.moon.rise_set.rise, day, 3, 57, 15);
    assert_near(c.moon.rise_set.set, day, 14, 37, 15);
    assert!(c.is_moon_up());
}

#[test]
fn tromso_midnight_sun_survives_reprojection() {
    let t = Utc.with_ymd_and_hms(2018, 6, 21, 10, 0, 0).unwrap();
    let c = compute_local(&TROMSO, &t, 2.0, &AlmanacConfig::default()).unwrap();
    let sun = c.sun.events.sunrise_sunset;
    assert_eq!(sun.status, RiseSetStatus::UpAllDay);
    assert!(sun.rise.is_none() && sun.set.is_none());
    assert!(c.is_sun_up());
}

#[test]
fn tromso_polar_night() {
    let t = Utc.with_ymd_and_hms(2018, 12, 21, 11, 0, 0).unwrap();
    let c = compute_local(&TROMSO, &t, 1.0, &AlmanacConfig::default()).unwrap();
    assert_eq!(c.sun.events.sunrise_sunset.status, RiseSetStatus::DownAllDay);
    assert_eq!(c.sun.events.civil.status, RiseSetStatus::RiseAndSet);
    assert!(!c.is_sun_up());
}

/// Longyearbyen, 2025-06-24 CEST: the Moon stays up through the local day
/// and its neighbours.
#[test]
fn svalbard_moon_up_all_local_day() {
    let svalbard = GeoPosition::new(78.22, 15.65);
    let t = Utc.with_ymd_and_hms(2025, 6, 24, 10, 0, 0).unwrap();
    let c = compute_local(&svalbard, &t, 2.0, &AlmanacConfig::default()).unwrap();
    let moon = c.moon.rise_set;
    assert_eq!(moon.status, RiseSetStatus::UpAllDay);
    assert!(moon.rise.is_none() && moon.set.is_none());
    assert!(c.is_moon_up());
}

#[test]
fn eclipse_and_apsis_instants_follow_the_offset() {
    let c = compute_local(&TOKYO, &tokyo_noon(), 9.0, &AlmanacConfig::default()).unwrap();
    let lunar = c.eclipses.lunar.last.expect("2018-01-31 is visible from Tokyo");
    let first = lunar.penumbral_begin.unwrap();
    assert_eq!(first.offset().local_minus_utc(), 9 * 3600);
    assert_eq!(lunar.date, first.date_naive());
    let next = c.moon.perigee.next.instant.unwrap();
    assert_eq!(next.offset().local_minus_utc(), 9 * 3600);
    assert!(next > c.instant);
}

#[test]
fn invalid_offset_is_an_error() {
    let r = compute_local(&TOKYO, &tokyo_noon(), 25.0, &AlmanacConfig::default());
    assert_eq!(r, Err(AlmanacError::InvalidOffset(25.0)));
}

#[test]
fn convenience_functions_agree_with_aggregate() {
    let t = Utc.with_ymd_and_hms(2018, 3, 15, 17, 0, 0).unwrap();
    let boston = GeoPosition::new(42.3601, -71.0589);
    let c = compute(&boston, &t, &AlmanacConfig::default()).unwrap();
    let day = t.date_naive();
    assert_eq!(sun_times(&boston, day).unwrap(), c.sun.events);
    assert_eq!(moon_times(&boston, day).unwrap(), c.moon.rise_set);
    assert_eq!(moon_illumination(&t), c.moon.illumination);
    assert_eq!(perigee(&t), c.moon.perigee);
    assert_eq!(apogee(&t), c.moon.apogee);
    assert_eq!(lunar_eclipses(&boston, &t).unwrap(), c.eclipses.lunar);
    assert!(sun_times(&GeoPosition::new(0.0, 200.0), day).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn local_sunrise_and_sunset_fall_on_local_date(
        latitude in -45.0f64..45.0,
        longitude in -179.0f64..179.0,
        day_of_year in 0i64..365,
        skew in -2i32..=2,
    ) {
        let position = GeoPosition::new(latitude, longitude);
        let offset_hours = f64::from((longitude / 15.0).round() as i32 + skew);
        let t = Utc.with_ymd_and_hms(2021, 1, 1, 12, 0, 0).unwrap()
            + chrono::TimeDelta::days(day_of_year);
        let c = compute_local(&position, &t, offset_hours, &AlmanacConfig::default()).unwrap();
        let local_date = c.instant.date_naive();
        let sun = c.sun.events.sunrise_sunset;
        prop_assert_eq!(sun.status, RiseSetStatus::RiseAndSet);
        prop_assert_eq!(sun.rise.unwrap().date_naive(), local_date);
        prop_assert_eq!(sun.set.unwrap().date_naive(), local_date);
        prop_assert!(sun.rise.unwrap() < sun.set.unwrap());
    }
}

#[cfg(feature = "serde")]
#[test]
fn aggregate_round_trips_through_json() {
    let c = compute_local(&TOKYO, &tokyo_noon(), 9.0, &AlmanacConfig::default()).unwrap();
    let json = serde_json::to_string(&c).unwrap();
    assert!(json.contains("+09:00"));
    let back: Celestial = serde_json::from_str(&json).unwrap();
    assert_eq!(back.sun.events, c.sun.events);
    assert_eq!(back.instant, c.instant);
}
