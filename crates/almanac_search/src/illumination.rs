//! Illuminated fraction, phase and phase names of the Moon.
//!
//! Phase angle from the Sun–Moon elongation, signed by the bright limb's
//! position angle (Meeus ch. 48). Daily naming compares the phase at the
//! start and end of the calendar day.

use std::f64::consts::PI;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Utc};

use almanac_core::{moon_position, sun_position};
use almanac_frames::angular_separation;
use almanac_time::instant_to_jd;

use crate::illumination_types::{FullMoonName, MoonIllumination, MoonPhase};

/// Days before a full moon searched for an earlier one in the same month.
const BLUE_MOON_LOOKBACK_DAYS: std::ops::RangeInclusive<i64> = 27..=31;

/// Geometry of the Moon's illumination at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseGeometry {
    pub fraction: f64,
    pub phase: f64,
    pub angle_rad: f64,
}

/// Illumination geometry at a Julian Date.
pub fn phase_geometry(jd: f64) -> PhaseGeometry {
    let sun = sun_position(jd);
    let moon = moon_position(jd);
    let (s, m) = (sun.equatorial, moon.equatorial);

    let elongation = angular_separation(&s, &m);
    let incidence = (sun.distance_km * elongation.sin())
        .atan2(moon.distance_km - sun.distance_km * elongation.cos());

    let dra = s.ra_rad - m.ra_rad;
    let angle = (s.dec_rad.cos() * dra.sin()).atan2(
        s.dec_rad.sin() * m.dec_rad.cos() - s.dec_rad.cos() * m.dec_rad.sin() * dra.cos(),
    );

    PhaseGeometry {
        fraction: (1.0 + incidence.cos()) / 2.0,
        phase: 0.5 + 0.5 * incidence * angle.signum() / PI,
        angle_rad: angle,
    }
}

/// Name for a day whose phase runs from `start` to `end`.
pub fn phase_name(start: f64, end: f64) -> MoonPhase {
    let straddles = |mark: f64| start < mark && end >= mark;
    if end < start {
        MoonPhase::NewMoon
    } else if straddles(0.25) {
        MoonPhase::FirstQuarter
    } else if straddles(0.5) {
        MoonPhase::FullMoon
    } else if straddles(0.75) {
        MoonPhase::LastQuarter
    } else if start < 0.25 {
        MoonPhase::WaxingCrescent
    } else if start < 0.5 {
        MoonPhase::WaxingGibbous
    } else if start < 0.75 {
        MoonPhase::WaningGibbous
    } else {
        MoonPhase::WaningCrescent
    }
}

/// UTC instant of local midnight starting `day` at `offset`.
fn local_midnight(day: NaiveDate, offset: FixedOffset) -> DateTime<Utc> {
    let local = day.and_time(NaiveTime::MIN);
    (local - TimeDelta::seconds(i64::from(offset.local_minus_utc()))).and_utc()
}

/// Phase name of a local calendar day.
pub fn day_phase(day: NaiveDate, offset: FixedOffset) -> MoonPhase {
    let start = local_midnight(day, offset);
    let end = start + TimeDelta::seconds(86_399);
    phase_name(
        phase_geometry(instant_to_jd(&start)).phase,
        phase_geometry(instant_to_jd(&end)).phase,
    )
}

/// Folk name for a full-moon day, `Blue` when an earlier full moon fell in
/// the same month.
pub fn full_moon_name(day: NaiveDate, offset: FixedOffset) -> Option<FullMoonName> {
    let earlier_in_month = BLUE_MOON_LOOKBACK_DAYS
        .filter_map(|back| day.checked_sub_signed(TimeDelta::days(back)))
        .filter(|d| d.month() == day.month() && d.year() == day.year())
        .any(|d| day_phase(d, offset) == MoonPhase::FullMoon);
    if earlier_in_month {
        Some(FullMoonName::Blue)
    } else {
        FullMoonName::for_month(day.month())
    }
}

/// Illumination at `instant`, named for its calendar day at `offset`.
pub fn moon_illumination(instant: &DateTime<Utc>, offset: FixedOffset) -> MoonIllumination {
    let geometry = phase_geometry(instant_to_jd(instant));
    let day = instant.with_timezone(&offset).date_naive();
    let phase_name = day_phase(day, offset);
    MoonIllumination {
        fraction: geometry.fraction,
        phase: geometry.phase,
        angle_rad: geometry.angle_rad,
        phase_name,
        full_moon_name: (phase_name == MoonPhase::FullMoon)
            .then(|| full_moon_name(day, offset))
            .flatten(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_through_zero_is_new_moon() {
        assert_eq!(phase_name(0.98, 0.01), MoonPhase::NewMoon);
    }

    #[test]
    fn principal_phases_need_a_straddle() {
        assert_eq!(phase_name(0.24, 0.27), MoonPhase::FirstQuarter);
        assert_eq!(phase_name(0.49, 0.5), MoonPhase::FullMoon);
        assert_eq!(phase_name(0.74, 0.76), MoonPhase::LastQuarter);
    }

    #[test]
    fn intermediate_bins() {
        assert_eq!(phase_name(0.05, 0.08), MoonPhase::WaxingCrescent);
        assert_eq!(phase_name(0.3, 0.33), MoonPhase::WaxingGibbous);
        assert_eq!(phase_name(0.55, 0.58), MoonPhase::WaningGibbous);
        assert_eq!(phase_name(0.8, 0.83), MoonPhase::WaningCrescent);
    }

    #[test]
    fn local_midnight_shifts_by_offset() {
        let day = NaiveDate::from_ymd_opt(2018, 3, 15).unwrap();
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        let t = local_midnight(day, est);
        assert_eq!(t.to_rfc3339(), "2018-03-15T05:00:00+00:00");
    }
}
