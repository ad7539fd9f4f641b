//! Search for the lunar perigee and apogee around an instant.
//!
//! Candidate passages come from the apsis series at sample dates spread
//! over ±45 days; the nearest on each side of the query are kept.

use chrono::{DateTime, Datelike, TimeDelta, Utc};

use almanac_core::Distance;
use almanac_series::{ApsisKind, apsis, apsis_k, distance_from_parallax_km};
use almanac_time::{decimal_year, delta_t_seconds, instant_to_jd, jd_to_instant};

use crate::apsis_types::{ApsisEvent, ApsisPair};

/// Spacing of sample dates, days.
const SAMPLE_STEP_DAYS: i64 = 15;
/// Samples on each side of the query.
const SAMPLES_PER_SIDE: i64 = 3;

/// Passage number `k` converted to a UTC event.
fn event(k: f64, kind: ApsisKind) -> Option<(f64, ApsisEvent)> {
    let terms = apsis(k, kind);
    let year = 2000.0 + (terms.jde - almanac_time::J2000_JD) / 365.25;
    let jd_ut = terms.jde - delta_t_seconds(year) / 86_400.0;
    let instant = jd_to_instant(jd_ut)?;
    Some((
        jd_ut,
        ApsisEvent {
            instant: Some(instant.fixed_offset()),
            horizontal_parallax_arcsec: terms.parallax_arcsec,
            distance: Distance::from_km(distance_from_parallax_km(terms.parallax_arcsec)),
        },
    ))
}

fn events(instant: &DateTime<Utc>, kind: ApsisKind) -> ApsisPair {
    let window = TimeDelta::days(SAMPLE_STEP_DAYS * SAMPLES_PER_SIDE);
    let earliest = instant.checked_sub_signed(window);
    if earliest.is_none_or(|t| t.year() < 1) {
        log::debug!("{kind:?} search before year 1: {instant}");
        return ApsisPair::NONE;
    }

    let mut ks: Vec<f64> = (-SAMPLES_PER_SIDE..=SAMPLES_PER_SIDE)
        .filter_map(|step| instant.checked_add_signed(TimeDelta::days(SAMPLE_STEP_DAYS * step)))
        .map(|t| apsis_k(decimal_year(&t), kind))
        .collect();
    ks.sort_by(f64::total_cmp);
    ks.dedup();

    let query = instant_to_jd(instant);
    let mut pair = ApsisPair::NONE;
    let mut last_jd = f64::NEG_INFINITY;
    let mut next_jd = f64::INFINITY;
    for (jd, ev) in ks.into_iter().filter_map(|k| event(k, kind)) {
        if jd <= query && jd > last_jd {
            last_jd = jd;
            pair.last = ev;
        } else if jd > query && jd < next_jd {
            next_jd = jd;
            pair.next = ev;
        }
    }
    log::trace!("{kind:?} around {instant}: {pair:?}");
    pair
}

/// Perigees before and after `instant`.
pub fn perigee_events(instant: &DateTime<Utc>) -> ApsisPair {
    events(instant, ApsisKind::Perigee)
}

/// Apogees before and after `instant`.
pub fn apogee_events(instant: &DateTime<Utc>) -> ApsisPair {
    events(instant, ApsisKind::Apogee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn perigee_january_2018() {
        let t = Utc.with_ymd_and_hms(2018, 1, 15, 0, 0, 0).unwrap();
        let pair = perigee_events(&t);
        let next = pair.next.instant.unwrap();
        let expected = Utc.with_ymd_and_hms(2018, 1, 30, 9, 54, 0).unwrap();
        assert!((next.to_utc() - expected).num_minutes().abs() < 60, "{next}");
        assert!((pair.next.distance.km() - 358_995.0).abs() < 50.0);
        let last = pair.last.instant.unwrap();
        assert!(last.to_utc() <= t);
        assert!((t - last.to_utc()).num_days() < 32);
    }

    #[test]
    fn apogee_brackets_query() {
        let t = Utc.with_ymd_and_hms(2021, 7, 1, 12, 0, 0).unwrap();
        let pair = apogee_events(&t);
        let last = pair.last.instant.unwrap().to_utc();
        let next = pair.next.instant.unwrap().to_utc();
        assert!(last <= t && t < next);
        let gap = (next - last).num_hours();
        // Anomalistic month varies between about 24.6 and 28.6 days.
        assert!((24 * 24..=29 * 24).contains(&gap), "{gap}");
        assert!(pair.next.distance.km() > 400_000.0);
    }

    #[test]
    fn before_year_one_is_sentinel() {
        let t = Utc.with_ymd_and_hms(1, 2, 1, 0, 0, 0).unwrap();
        let pair = perigee_events(&t);
        assert!(pair.last.is_none() && pair.next.is_none());
        assert_eq!(pair.next.distance, Distance::ZERO);
    }
}
