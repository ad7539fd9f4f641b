//! Eclipse conditions at a syzygy.
//!
//! Source: Meeus, *Astronomical Algorithms*, 2nd ed., ch. 54.

use almanac_series::normalize_degrees;

use super::types::{LunarEclipseType, SolarEclipseType};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Lunations per year, for estimating `k` from a year.
pub const LUNATIONS_PER_YEAR: f64 = 12.3685;

/// Beyond this |sin F| the Moon is too far from a node.
const MAX_SIN_F: f64 = 0.36;

/// |γ| below which the shadow axis meets the Earth.
const CENTRAL_GAMMA: f64 = 0.9972;

/// Penumbral cone radius at the Earth, Earth radii.
const SOLAR_PENUMBRA: f64 = 1.5433;

/// Lunar eclipse shadow radii at the Moon, Earth radii.
const LUNAR_PENUMBRA: f64 = 1.5573;
const LUNAR_UMBRA: f64 = 1.0128;
const LUNAR_TOTAL: f64 = 0.4678;
/// Penumbra − umbra width at the Moon, for magnitudes.
const LUNAR_MAGNITUDE_SCALE: f64 = 0.5450;

/// Mean syzygy instant and the arguments needed to refine it.
#[derive(Debug, Clone, Copy)]
struct Syzygy {
    jde: f64,
    e: f64,
    m: f64,
    mp: f64,
    f1: f64,
    omega: f64,
    a1: f64,
}

/// Shadow geometry at a syzygy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    /// Lunation number: integer for new moon, half-integer for full moon.
    pub k: f64,
    /// Time of maximum eclipse, JDE.
    pub jde: f64,
    /// Least distance of the shadow axis from the Earth's or Moon's centre,
    /// Earth radii. Negative south of the centre.
    pub gamma: f64,
    /// Radius of the umbral cone in the fundamental plane, Earth radii.
    pub u: f64,
    /// Moon's mean anomaly, radians.
    pub moon_anomaly_rad: f64,
}

fn syzygy(k: f64) -> Option<Syzygy> {
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let jde = 2_451_550.097_66 + 29.530_588_861 * k + 0.000_154_37 * t2 - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;
    let m = normalize_degrees(2.5534 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3);
    let mp = normalize_degrees(
        201.5643 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
            - 0.000_000_058 * t4,
    );
    let f = normalize_degrees(
        160.7108 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
            + 0.000_000_011 * t4,
    );
    let omega =
        normalize_degrees(124.7746 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3);

    if f.to_radians().sin().abs() > MAX_SIN_F {
        return None;
    }

    let f1 = f - 0.02665 * omega.to_radians().sin();
    let a1 = 299.77 + 0.107_408 * k - 0.009_173 * t2;
    Some(Syzygy {
        jde,
        e: 1.0 - 0.002_516 * t - 0.000_007_4 * t2,
        m: m.to_radians(),
        mp: mp.to_radians(),
        f1: f1.to_radians(),
        omega: omega.to_radians(),
        a1: a1.to_radians(),
    })
}

/// Conditions at lunation `k`, or `None` if no eclipse is possible.
pub fn conditions(k: f64) -> Option<Conditions> {
    let s = syzygy(k)?;
    let Syzygy {
        e,
        m,
        mp,
        f1,
        omega,
        a1,
        ..
    } = s;
    let solar = k.fract() == 0.0;

    let mut jde = s.jde;
    if solar {
        jde += -0.4075 * mp.sin() + 0.1721 * e * m.sin();
    } else {
        jde += -0.4065 * mp.sin() + 0.1727 * e * m.sin();
    }
    jde += 0.0161 * (2.0 * mp).sin() - 0.0097 * (2.0 * f1).sin()
        + 0.0073 * e * (mp - m).sin()
        - 0.0050 * e * (mp + m).sin()
        - 0.0023 * (mp - 2.0 * f1).sin()
        + 0.0021 * e * (2.0 * m).sin()
        + 0.0012 * (mp + 2.0 * f1).sin()
        + 0.0006 * e * (2.0 * mp + m).sin()
        - 0.0004 * (3.0 * mp).sin()
        - 0.0003 * e * (m + 2.0 * f1).sin()
        + 0.0003 * a1.sin()
        - 0.0002 * e * (m - 2.0 * f1).sin()
        - 0.0002 * e * (2.0 * mp - m).sin()
        - 0.0002 * omega.sin();

    let p = 0.2070 * e * m.sin() + 0.0024 * e * (2.0 * m).sin() - 0.0392 * mp.sin()
        + 0.0116 * (2.0 * mp).sin()
        - 0.0073 * e * (mp + m).sin()
        + 0.0067 * e * (mp - m).sin()
        + 0.0118 * (2.0 * f1).sin();
    let q = 5.2207 - 0.0048 * e * m.cos() + 0.0020 * e * (2.0 * m).cos() - 0.3299 * mp.cos()
        - 0.0060 * e * (mp + m).cos()
        + 0.0041 * e * (mp - m).cos();
    let w = f1.cos().abs();
    let gamma = (p * f1.cos() + q * f1.sin()) * (1.0 - 0.0048 * w);
    let u = 0.0059 + 0.0046 * e * m.cos() - 0.0182 * mp.cos() + 0.0004 * (2.0 * mp).cos()
        - 0.0005 * (m + mp).cos();

    Some(Conditions {
        k,
        jde,
        gamma,
        u,
        moon_anomaly_rad: mp,
    })
}

// ---------------------------------------------------------------------------
// Solar
// ---------------------------------------------------------------------------

/// Global type and geocentric magnitude of a solar eclipse.
///
/// `None` if the penumbra misses the Earth. Central and umbral eclipses
/// report a magnitude of 1.
pub fn solar_classification(c: &Conditions) -> Option<(SolarEclipseType, f64)> {
    let g = c.gamma.abs();
    let u = c.u;
    if g > SOLAR_PENUMBRA + u {
        return None;
    }
    if g < CENTRAL_GAMMA {
        let kind = if u < 0.0 {
            SolarEclipseType::Total
        } else if u > 0.0047 {
            SolarEclipseType::Annular
        } else if u < 0.00464 * (1.0 - c.gamma * c.gamma).sqrt() {
            SolarEclipseType::Hybrid
        } else {
            SolarEclipseType::Annular
        };
        return Some((kind, 1.0));
    }
    if g < CENTRAL_GAMMA + u.abs() {
        let kind = if u < 0.0 {
            SolarEclipseType::Total
        } else {
            SolarEclipseType::Annular
        };
        return Some((kind, 1.0));
    }
    let magnitude = (SOLAR_PENUMBRA + u - g) / (0.5461 + 2.0 * u);
    Some((SolarEclipseType::Partial, magnitude))
}

// ---------------------------------------------------------------------------
// Lunar
// ---------------------------------------------------------------------------

/// Shadow contact geometry of a lunar eclipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarGeometry {
    pub eclipse_type: LunarEclipseType,
    pub penumbral_magnitude: f64,
    pub umbral_magnitude: f64,
    /// Semi-durations in hours: penumbral, partial, total (NaN when absent).
    pub semi_durations_h: [f64; 3],
}

fn semi_duration(x: f64, gamma: f64, n: f64) -> f64 {
    let d = x * x - gamma * gamma;
    if d > 0.0 { d.sqrt() / n } else { f64::NAN }
}

/// Classification of a lunar eclipse, or `None` if the Moon misses the penumbra.
pub fn lunar_geometry(c: &Conditions) -> Option<LunarGeometry> {
    let g = c.gamma.abs();
    let u = c.u;
    let penumbral_magnitude = (LUNAR_PENUMBRA + u - g) / LUNAR_MAGNITUDE_SCALE;
    if penumbral_magnitude <= 0.0 {
        return None;
    }
    let umbral_magnitude = (LUNAR_UMBRA - u - g) / LUNAR_MAGNITUDE_SCALE;

    let n = 0.5458 + 0.0400 * c.moon_anomaly_rad.cos();
    let penumbral = semi_duration(LUNAR_PENUMBRA + u, c.gamma, n);
    let partial = semi_duration(LUNAR_UMBRA - u, c.gamma, n);
    let total = semi_duration(LUNAR_TOTAL - u, c.gamma, n);

    let eclipse_type = if umbral_magnitude >= 1.0 && !total.is_nan() {
        LunarEclipseType::Total
    } else if umbral_magnitude > 0.0 && !partial.is_nan() {
        LunarEclipseType::Partial
    } else {
        LunarEclipseType::Penumbral
    };
    let semi_durations_h = match eclipse_type {
        LunarEclipseType::Total => [penumbral, partial, total],
        LunarEclipseType::Partial => [penumbral, partial, f64::NAN],
        LunarEclipseType::Penumbral => [penumbral, f64::NAN, f64::NAN],
    };
    Some(LunarGeometry {
        eclipse_type,
        penumbral_magnitude,
        umbral_magnitude,
        semi_durations_h,
    })
}
