//! Full almanac at a fixed instant over the western Atlantic.
//!
//! 39°N 72°W at 2018-03-15 00:00 UTC: both bodies are below the horizon,
//! and the UTC day holds a moonrise just before sunrise.

use approx::assert_abs_diff_eq;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use almanac_rs::*;

const SITE: GeoPosition = GeoPosition::new(39.0, -72.0);

fn midnight() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 3, 15, 0, 0, 0).unwrap()
}

fn assert_at(t: Option<DateTime<FixedOffset>>, h: u32, m: u32, s: u32) {
    let t = t.expect("event expected");
    let expected = Utc.with_ymd_and_hms(2018, 3, 15, h, m, s).unwrap();
    let diff = (t.to_utc() - expected).num_seconds().abs();
    assert!(diff <= 60, "{t} vs {expected}");
}

fn almanac() -> Celestial {
    compute(&SITE, &midnight(), &AlmanacConfig::default()).unwrap()
}

/// Sun at altitude -13.60°, azimuth 278.29°.
#[test]
fn sun_position() {
    let c = almanac();
    assert_abs_diff_eq!(c.sun.horizontal.altitude_deg, -13.60, epsilon = 0.05);
    assert_abs_diff_eq!(c.sun.horizontal.azimuth_deg, 278.29, epsilon = 0.05);
    assert!(!c.is_sun_up());
}

/// Moon at altitude -42.70°, azimuth 287.86°.
#[test]
fn moon_position() {
    let c = almanac();
    assert_abs_diff_eq!(c.moon.horizontal.altitude_deg, -42.70, epsilon = 0.05);
    assert_abs_diff_eq!(c.moon.horizontal.azimuth_deg, 287.86, epsilon = 0.05);
    assert!(!c.is_moon_up());
}

/// Sunrise 10:58:58, sunset 22:55:06.
#[test]
fn sun_rise_and_set() {
    let sun = almanac().sun.events.sunrise_sunset;
    assert_eq!(sun.status, RiseSetStatus::RiseAndSet);
    assert_at(sun.rise, 10, 58, 58);
    assert_at(sun.set, 22, 55, 6);
}

/// Moonrise 10:08:56, moonset 21:10:02.
#[test]
fn moon_rise_and_set() {
    let c = almanac();
    let moon = c.moon.rise_set;
    assert_eq!(moon.status, RiseSetStatus::RiseAndSet);
    assert_at(moon.rise, 10, 8, 56);
    assert_at(moon.set, 21, 10, 2);
    assert!(moon.rise < c.sun.events.sunrise_sunset.rise);
}
