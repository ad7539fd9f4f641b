//! Besselian elements fitted from sampled Sun and Moon positions.
//!
//! The fundamental plane passes through the Earth's centre perpendicular
//! to the Moon→Sun axis. Coordinates are in equatorial Earth radii and
//! polynomials are in hours from `t0`.

use almanac_core::{moon_position, sun_position};
use almanac_series::normalize_degrees;
use almanac_time::gmst_rad;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Equatorial Earth radius, km.
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// Solar radius in Earth radii.
const SUN_RADIUS: f64 = 109.1222;

/// Lunar radius in Earth radii for the penumbral cone.
const MOON_RADIUS_PENUMBRA: f64 = 0.272_507_6;

/// Lunar radius in Earth radii for the umbral cone (mean of the limb valleys).
const MOON_RADIUS_UMBRA: f64 = 0.272_281;

/// Sample offsets in hours around `t0`.
const SAMPLE_HOURS: [f64; 5] = [-2.0, -1.0, 0.0, 1.0, 2.0];

/// Polynomial elements valid for a few hours around `t0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BesselianElements {
    /// Reference epoch, JDE (TD).
    pub t0: f64,
    /// ΔT at `t0`, seconds.
    pub delta_t: f64,
    /// Shadow axis x, Earth radii.
    pub x: [f64; 4],
    /// Shadow axis y, Earth radii.
    pub y: [f64; 4],
    /// Declination of the axis, degrees.
    pub d: [f64; 3],
    /// Greenwich hour angle of the axis, degrees.
    pub mu: [f64; 3],
    /// Penumbral radius in the fundamental plane.
    pub l1: [f64; 3],
    /// Umbral radius; negative for a total eclipse.
    pub l2: [f64; 3],
    pub tan_f1: f64,
    pub tan_f2: f64,
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    x: f64,
    y: f64,
    d: f64,
    mu: f64,
    l1: f64,
    l2: f64,
    tan_f1: f64,
    tan_f2: f64,
}

fn sample(jd_td: f64, delta_t: f64) -> Sample {
    let sun = sun_position(jd_td);
    let moon = moon_position(jd_td);
    let s = sun.equatorial.to_cartesian(sun.distance_km / EARTH_RADIUS_KM);
    let rm = moon.distance_km / EARTH_RADIUS_KM;
    let m = moon.equatorial.to_cartesian(rm);

    let g = [s[0] - m[0], s[1] - m[1], s[2] - m[2]];
    let g_len = (g[0] * g[0] + g[1] * g[1] + g[2] * g[2]).sqrt();
    let a = g[1].atan2(g[0]);
    let d = (g[2] / g_len).asin();

    let (sin_dm, cos_dm) = moon.equatorial.dec_rad.sin_cos();
    let (sin_d, cos_d) = d.sin_cos();
    let (sin_h, cos_h) = (moon.equatorial.ra_rad - a).sin_cos();
    let x = rm * cos_dm * sin_h;
    let y = rm * (sin_dm * cos_d - cos_dm * sin_d * cos_h);
    let z = rm * (sin_dm * sin_d + cos_dm * cos_d * cos_h);

    let f1 = ((SUN_RADIUS + MOON_RADIUS_PENUMBRA) / g_len).asin();
    let f2 = ((SUN_RADIUS - MOON_RADIUS_UMBRA) / g_len).asin();
    let tan_f1 = f1.tan();
    let tan_f2 = f2.tan();

    let jd_ut = jd_td - delta_t / 86_400.0;
    Sample {
        x,
        y,
        d: d.to_degrees(),
        mu: normalize_degrees((gmst_rad(jd_ut) - a).to_degrees()),
        l1: z * tan_f1 + MOON_RADIUS_PENUMBRA / f1.cos(),
        l2: z * tan_f2 - MOON_RADIUS_UMBRA / f2.cos(),
        tan_f1,
        tan_f2,
    }
}

/// Cubic through five samples one hour apart, centred on the middle one.
pub fn fit_cubic(f: [f64; 5]) -> [f64; 4] {
    let [fm2, fm1, f0, f1, f2] = f;
    [
        f0,
        (8.0 * (f1 - fm1) - (f2 - fm2)) / 12.0,
        (16.0 * (f1 + fm1) - (f2 + fm2) - 30.0 * f0) / 24.0,
        ((f2 - fm2) - 2.0 * (f1 - fm1)) / 12.0,
    ]
}

/// Quadratic through five samples one hour apart.
pub fn fit_quadratic(f: [f64; 5]) -> [f64; 3] {
    let [c0, c1, c2, _] = fit_cubic(f);
    [c0, c1, c2]
}

/// Value of a polynomial at `t`.
pub fn evaluate(coeffs: &[f64], t: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * t + c)
}

/// First derivative of a polynomial at `t`.
pub fn rate(coeffs: &[f64], t: f64) -> f64 {
    coeffs
        .iter()
        .enumerate()
        .skip(1)
        .rev()
        .fold(0.0, |acc, (i, c)| acc * t + i as f64 * c)
}

/// Make a sequence of angles in degrees continuous.
pub fn unwrap_degrees<const N: usize>(mut values: [f64; N]) -> [f64; N] {
    for i in 1..N {
        while values[i] - values[i - 1] > 180.0 {
            values[i] -= 360.0;
        }
        while values[i] - values[i - 1] < -180.0 {
            values[i] += 360.0;
        }
    }
    values
}

/// Fit the elements around `t0` (JDE).
pub fn besselian_elements(t0: f64, delta_t: f64) -> BesselianElements {
    let samples = SAMPLE_HOURS.map(|h| sample(t0 + h / 24.0, delta_t));
    let pick = |f: fn(&Sample) -> f64| samples.each_ref().map(f);
    let centre = samples[2];
    BesselianElements {
        t0,
        delta_t,
        x: fit_cubic(pick(|s| s.x)),
        y: fit_cubic(pick(|s| s.y)),
        d: fit_quadratic(pick(|s| s.d)),
        mu: fit_quadratic(unwrap_degrees(pick(|s| s.mu))),
        l1: fit_quadratic(pick(|s| s.l1)),
        l2: fit_quadratic(pick(|s| s.l2)),
        tan_f1: centre.tan_f1,
        tan_f2: centre.tan_f2,
    }
}
