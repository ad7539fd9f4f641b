//! ΔT = TT − UT, in seconds.
//!
//! Piecewise polynomial fits to historical observations and extrapolation.
//!
//! Source: Espenak & Meeus, *Five Millennium Canon of Solar Eclipses*
//! (NASA/TP-2006-214141), §2.6. Public domain.

use crate::julian::SECONDS_PER_DAY;

/// One fitted segment: valid for `start <= year < end`, evaluated as a
/// polynomial in `(year - origin) / scale`.
struct Segment {
    start: f64,
    end: f64,
    origin: f64,
    scale: f64,
    coeffs: &'static [f64],
}

#[rustfmt::skip]
static SEGMENTS: [Segment; 12] = [
    Segment { start: -500.0, end: 500.0, origin: 0.0, scale: 100.0,
        coeffs: &[10583.6, -1014.41, 33.78311, -5.952053, -0.1798452, 0.022174192, 0.0090316521] },
    Segment { start: 500.0, end: 1600.0, origin: 1000.0, scale: 100.0,
        coeffs: &[1574.2, -556.01, 71.23472, 0.319781, -0.8503463, -0.005050998, 0.0083572073] },
    Segment { start: 1600.0, end: 1700.0, origin: 1600.0, scale: 1.0,
        coeffs: &[120.0, -0.9808, -0.01532, 1.0 / 7129.0] },
    Segment { start: 1700.0, end: 1800.0, origin: 1700.0, scale: 1.0,
        coeffs: &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0] },
    Segment { start: 1800.0, end: 1860.0, origin: 1800.0, scale: 1.0,
        coeffs: &[13.72, -0.332447, 0.0068612, 0.0041116, -0.00037436, 0.0000121272,
                  -0.0000001699, 0.000000000875] },
    Segment { start: 1860.0, end: 1900.0, origin: 1860.0, scale: 1.0,
        coeffs: &[7.62, 0.5737, -0.251754, 0.01680668, -0.0004473624, 1.0 / 233_174.0] },
    Segment { start: 1900.0, end: 1920.0, origin: 1900.0, scale: 1.0,
        coeffs: &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197] },
    Segment { start: 1920.0, end: 1941.0, origin: 1920.0, scale: 1.0,
        coeffs: &[21.20, 0.84493, -0.076100, 0.0020936] },
    Segment { start: 1941.0, end: 1961.0, origin: 1950.0, scale: 1.0,
        coeffs: &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0] },
    Segment { start: 1961.0, end: 1986.0, origin: 1975.0, scale: 1.0,
        coeffs: &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0] },
    Segment { start: 1986.0, end: 2005.0, origin: 2000.0, scale: 1.0,
        coeffs: &[63.86, 0.3345, -0.060374, 0.0017275, 0.000651814, 0.00002373599] },
    Segment { start: 2005.0, end: 2050.0, origin: 2000.0, scale: 1.0,
        coeffs: &[62.92, 0.32217, 0.005589] },
];

/// Horner evaluation, coefficients in ascending powers.
fn horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Long-term parabola used outside the fitted range.
fn long_term(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    if let Some(seg) = SEGMENTS
        .iter()
        .find(|seg| year >= seg.start && year < seg.end)
    {
        return horner(seg.coeffs, (year - seg.origin) / seg.scale);
    }
    if (2050.0..2150.0).contains(&year) {
        return long_term(year) - 0.5628 * (2150.0 - year);
    }
    long_term(year)
}

/// Convert a UT Julian Date to TT given ΔT in seconds.
pub fn ut_to_tt_jd(jd_ut: f64, delta_t: f64) -> f64 {
    jd_ut + delta_t / SECONDS_PER_DAY
}

/// Convert a TT Julian Date to UT given ΔT in seconds.
pub fn tt_to_ut_jd(jd_tt: f64, delta_t: f64) -> f64 {
    jd_tt - delta_t / SECONDS_PER_DAY
}
