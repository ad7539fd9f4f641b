//! Geocentric ecliptic position of the Moon.
//!
//! Mean equinox of date, no nutation. Accuracy is about 10″ in longitude
//! and 4″ in latitude.
//!
//! Source: Meeus, *Astronomical Algorithms*, 2nd ed., ch. 47.

use crate::arguments::{FundamentalArguments, lunar_mean_longitude_deg, normalize_degrees};
use crate::lunar_tables::{DISTANCE_TERMS, LATITUDE_TERMS, LONGITUDE_TERMS};
use crate::term::{Trig, sum_terms};

/// Mean Earth–Moon distance in km; Σr is added to it.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Moon's geocentric ecliptic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonEcliptic {
    /// Longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Latitude in degrees.
    pub latitude_deg: f64,
    /// Distance between the centres of Earth and Moon in km.
    pub distance_km: f64,
}

/// Moon's position at `t` Julian centuries of dynamic time since J2000.0.
pub fn moon_ecliptic(t: f64) -> MoonEcliptic {
    let args = FundamentalArguments::lunar(t);
    let l_prime = lunar_mean_longitude_deg(t).to_radians();

    // Venus, Jupiter and flattening perturbations.
    let a1 = normalize_degrees(119.75 + 131.849 * t).to_radians();
    let a2 = normalize_degrees(53.09 + 479_264.290 * t).to_radians();
    let a3 = normalize_degrees(313.45 + 481_266.484 * t).to_radians();

    let sigma_l = sum_terms(&LONGITUDE_TERMS, &args, Trig::Sin)
        + 3958.0 * a1.sin()
        + 1962.0 * (l_prime - args.f).sin()
        + 318.0 * a2.sin();
    let sigma_b = sum_terms(&LATITUDE_TERMS, &args, Trig::Sin) - 2235.0 * l_prime.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - args.f).sin()
        + 175.0 * (a1 + args.f).sin()
        + 127.0 * (l_prime - args.n).sin()
        - 115.0 * (l_prime + args.n).sin();
    let sigma_r = sum_terms(&DISTANCE_TERMS, &args, Trig::Cos);

    MoonEcliptic {
        longitude_deg: normalize_degrees(l_prime.to_degrees() + sigma_l / 1e6),
        latitude_deg: sigma_b / 1e6,
        distance_km: MEAN_DISTANCE_KM + sigma_r / 1000.0,
    }
}
