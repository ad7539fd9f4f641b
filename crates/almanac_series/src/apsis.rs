//! Times and distances of lunar perigee and apogee.
//!
//! Source: Meeus, *Astronomical Algorithms*, 2nd ed., ch. 50.

use crate::apsis_tables::{
    APOGEE_PARALLAX_BASE, APOGEE_PARALLAX_TERMS, APOGEE_TIME_TERMS, PERIGEE_PARALLAX_BASE,
    PERIGEE_PARALLAX_TERMS, PERIGEE_TIME_TERMS,
};
use crate::arguments::FundamentalArguments;
use crate::term::{Trig, sum_terms};

/// Earth equatorial radius used with the apsis parallax, km.
const EARTH_RADIUS_KM: f64 = 6378.14;

/// Closest or farthest point of the lunar orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApsisKind {
    Perigee,
    Apogee,
}

/// Result of the apsis series for one lunation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApsisTerms {
    /// Julian Ephemeris Day (dynamic time) of the passage.
    pub jde: f64,
    /// Equatorial horizontal parallax in arcseconds.
    pub parallax_arcsec: f64,
}

/// Lunation number of the apsis nearest a decimal year.
///
/// Integer for perigee, integer + 0.5 for apogee.
pub fn apsis_k(decimal_year: f64, kind: ApsisKind) -> f64 {
    let k = (decimal_year - 1999.97) * 13.2555;
    match kind {
        ApsisKind::Perigee => k.round(),
        ApsisKind::Apogee => (k - 0.5).round() + 0.5,
    }
}

/// Evaluate the apsis series for lunation `k`.
pub fn apsis(k: f64, kind: ApsisKind) -> ApsisTerms {
    let args = FundamentalArguments::apsides(k);
    let t = args.t;
    let mean_jde = 2_451_534.669_8 + 27.554_549_89 * k - 0.000_669_1 * t * t
        - 0.000_001_098 * t * t * t
        + 0.000_000_005_2 * t * t * t * t;

    let (time_terms, base, parallax_terms) = match kind {
        ApsisKind::Perigee => (
            &PERIGEE_TIME_TERMS[..],
            PERIGEE_PARALLAX_BASE,
            &PERIGEE_PARALLAX_TERMS[..],
        ),
        ApsisKind::Apogee => (
            &APOGEE_TIME_TERMS[..],
            APOGEE_PARALLAX_BASE,
            &APOGEE_PARALLAX_TERMS[..],
        ),
    };

    ApsisTerms {
        jde: mean_jde + sum_terms(time_terms, &args, Trig::Sin),
        parallax_arcsec: base + sum_terms(parallax_terms, &args, Trig::Cos),
    }
}

/// Earth–Moon distance in km from an equatorial horizontal parallax.
pub fn distance_from_parallax_km(parallax_arcsec: f64) -> f64 {
    EARTH_RADIUS_KM / (parallax_arcsec / 3600.0).to_radians().sin()
}
