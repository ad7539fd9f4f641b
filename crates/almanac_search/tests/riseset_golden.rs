//! Golden-value integration tests for rise/set scanning.
//!
//! Reference times from the USNO and timeanddate.com tables.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, TimeZone, Utc};
use proptest::prelude::*;

use almanac_core::{AlmanacConfig, GeoPosition};
use almanac_search::{
    Horizon, RiseSetStatus, moon_rise_set, scan_crossings, solar_day_events, sun_rise_set,
};

const BOSTON: GeoPosition = GeoPosition {
    latitude_deg: 42.36,
    longitude_deg: -71.06,
};
const TROMSO: GeoPosition = GeoPosition {
    latitude_deg: 69.65,
    longitude_deg: 18.96,
};
const LONGYEARBYEN: GeoPosition = GeoPosition {
    latitude_deg: 78.22,
    longitude_deg: 15.65,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn near(actual: Option<DateTime<FixedOffset>>, h: u32, min: u32, day: NaiveDate, tol_min: i64) {
    let actual = actual.expect("event should exist");
    let expected = Utc.from_utc_datetime(&day.and_hms_opt(h, min, 0).unwrap());
    let diff = (actual.to_utc() - expected).num_minutes().abs();
    assert!(diff <= tol_min, "got {actual}, expected {expected}");
}

/// 2018-Mar-15 Boston: sunrise 06:55 EDT, sunset 18:53 EDT.
#[test]
fn boston_sunrise_sunset() {
    let day = date(2018, 3, 15);
    let config = AlmanacConfig::default();
    let r = sun_rise_set(day, &BOSTON, Horizon::Apparent, &config, None).unwrap();
    assert_eq!(r.status, RiseSetStatus::RiseAndSet);
    near(r.rise, 10, 55, day, 4);
    near(r.set, 22, 53, day, 4);
}

#[test]
fn boston_solar_day_is_nested() {
    let day = date(2018, 3, 15);
    let config = AlmanacConfig::default();
    let ev = solar_day_events(day, &BOSTON, &config, None).unwrap();
    let order = [
        ev.astronomical.rise,
        ev.nautical.rise,
        ev.civil.rise,
        ev.sunrise_sunset.rise,
        ev.bottom_of_disc.rise,
        ev.solar_noon,
        ev.bottom_of_disc.set,
        ev.sunrise_sunset.set,
        ev.civil.set,
        ev.nautical.set,
        ev.astronomical.set,
    ];
    let times: Vec<_> = order.iter().map(|t| t.expect("event on equinox-ish day")).collect();
    assert!(times.windows(2).all(|w| w[0] < w[1]), "{times:?}");
    near(ev.civil.rise, 10, 28, day, 4);
    near(ev.solar_noon, 16, 53, day, 3);
}

#[test]
fn tromso_midnight_sun_and_polar_night() {
    let config = AlmanacConfig::default();
    let summer =
        sun_rise_set(date(2018, 6, 21), &TROMSO, Horizon::Apparent, &config, None).unwrap();
    assert_eq!(summer.status, RiseSetStatus::UpAllDay);
    assert!(summer.rise.is_none() && summer.set.is_none());

    let winter =
        sun_rise_set(date(2018, 12, 21), &TROMSO, Horizon::Apparent, &config, None).unwrap();
    assert_eq!(winter.status, RiseSetStatus::DownAllDay);

    // Civil twilight still comes and goes in the polar night.
    let civil = sun_rise_set(date(2018, 12, 21), &TROMSO, Horizon::Civil, &config, None).unwrap();
    assert_eq!(civil.status, RiseSetStatus::RiseAndSet);
    assert!(civil.rise < civil.set);
}

/// Summer 2025 Longyearbyen: the high-declination Moon circles above the
/// horizon for several days each month, lowest near 15 degrees.
#[test]
fn longyearbyen_moon_up_all_day() {
    let config = AlmanacConfig::default();
    for day in [date(2025, 6, 24), date(2025, 7, 21)] {
        let r = moon_rise_set(day, &LONGYEARBYEN, &config, None).unwrap();
        assert_eq!(r.status, RiseSetStatus::UpAllDay, "{day}");
        assert!(r.rise.is_none() && r.set.is_none(), "{day}");
    }
}

/// 2018-Jan-31 Boston: the full Moon sets in the morning and rises at dusk.
#[test]
fn boston_moon_on_eclipse_day() {
    let day = date(2018, 1, 31);
    let r = moon_rise_set(day, &BOSTON, &AlmanacConfig::default(), None).unwrap();
    assert_eq!(r.status, RiseSetStatus::RiseAndSet);
    assert!(r.set < r.rise);
    near(r.set, 11, 58, day, 15);
    near(r.rise, 22, 18, day, 15);
}

#[test]
fn is_up_follows_events() {
    let day = date(2018, 3, 15);
    let r = sun_rise_set(day, &BOSTON, Horizon::Apparent, &AlmanacConfig::default(), None).unwrap();
    let rise = r.rise.unwrap();
    assert!(!r.is_up_at(&(rise - TimeDelta::minutes(5))));
    assert!(r.is_up_at(&(rise + TimeDelta::minutes(5))));
}

proptest! {
    #[test]
    fn status_matches_crossings(
        amplitude in 0.5f64..60.0,
        offset in -70.0f64..70.0,
        phase in 0.0f64..std::f64::consts::TAU,
    ) {
        let day = date(2020, 1, 1);
        let start = day.and_hms_opt(0, 0, 0).unwrap().and_utc();
        let curve = |t: DateTime<Utc>| {
            let hours = (t - start).num_milliseconds() as f64 / 3_600_000.0;
            offset + amplitude * (hours / 24.0 * std::f64::consts::TAU + phase).sin()
        };
        let r = scan_crossings(day, 0.0, curve, None).unwrap();
        match r.status {
            RiseSetStatus::RiseAndSet => prop_assert!(r.rise.is_some() && r.set.is_some()),
            RiseSetStatus::NoSet => prop_assert!(r.rise.is_some() && r.set.is_none()),
            RiseSetStatus::NoRise => prop_assert!(r.rise.is_none() && r.set.is_some()),
            RiseSetStatus::UpAllDay | RiseSetStatus::DownAllDay => {
                prop_assert!(r.rise.is_none() && r.set.is_none())
            }
        }
        if offset.abs() > amplitude {
            prop_assert!(r.status.is_all_day());
            prop_assert_eq!(r.status == RiseSetStatus::UpAllDay, offset > 0.0);
        }
        if let Some(rise) = r.rise {
            prop_assert!(curve(rise.to_utc()).abs() < 0.05 * amplitude.max(1.0));
        }
    }
}
