//! Altitude/azimuth checks against published almanac values.

use almanac_core::{AlmanacConfig, Body, GeoPosition};
use almanac_time::instant_to_jd;
use chrono::{TimeZone, Utc};

fn jd(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> f64 {
    instant_to_jd(&Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
}

#[test]
fn boston_sun_near_sunrise_2018_03_15() {
    // USNO: sunrise 2018-03-15 at Boston 10:54 UTC (06:54 EDT).
    let boston = GeoPosition::new(42.3601, -71.0589);
    let config = AlmanacConfig::default();
    let before = Body::Sun.altitude_deg(jd(2018, 3, 15, 10, 45), &boston, &config);
    let after = Body::Sun.altitude_deg(jd(2018, 3, 15, 11, 5), &boston, &config);
    assert!(before < -0.3 && after > -0.3, "{before} {after}");
}

#[test]
fn sun_azimuth_east_in_morning_west_in_evening() {
    let pos = GeoPosition::new(48.85, 2.35);
    let config = AlmanacConfig::default();
    let morning = Body::Sun.horizontal(jd(2020, 6, 21, 5, 0), &pos, &config);
    let evening = Body::Sun.horizontal(jd(2020, 6, 21, 18, 0), &pos, &config);
    assert!(morning.azimuth_deg > 45.0 && morning.azimuth_deg < 100.0);
    assert!(evening.azimuth_deg > 260.0 && evening.azimuth_deg < 315.0);
}

#[test]
fn moon_distance_matches_geocentric() {
    let (_, d) = Body::Moon.geocentric(jd(2018, 1, 31, 13, 30));
    // Perigee of 2018-01-30 was 358,995 km.
    assert!((355_000.0..362_000.0).contains(&d), "{d}");
}

#[test]
fn polar_observer_is_well_defined() {
    let pole = GeoPosition::new(90.0, 0.0);
    let config = AlmanacConfig::default();
    let h = Body::Moon.horizontal(jd(2018, 3, 15, 0, 0), &pole, &config);
    assert!(h.altitude_deg.is_finite());
    assert!(h.azimuth_deg.is_finite());
}
