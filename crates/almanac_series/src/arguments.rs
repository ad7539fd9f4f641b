//! Fundamental arguments of the lunar theory.

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_degrees(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Evaluated arguments at one epoch. Angles are radians in [0, 2π).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalArguments {
    /// Julian centuries of dynamic time since J2000.0.
    pub t: f64,
    /// Mean elongation of the Moon.
    pub d: f64,
    /// Sun's mean anomaly.
    pub m: f64,
    /// Moon's mean anomaly (M′).
    pub n: f64,
    /// Moon's argument of latitude.
    pub f: f64,
    /// Eccentricity factor of Earth's orbit applied to M-dependent terms.
    pub e: f64,
}

impl FundamentalArguments {
    /// Build from angles in degrees, normalizing each to [0, 360).
    pub fn from_degrees(t: f64, d: f64, m: f64, n: f64, f: f64, e: f64) -> Self {
        Self {
            t,
            d: normalize_degrees(d).to_radians(),
            m: normalize_degrees(m).to_radians(),
            n: normalize_degrees(n).to_radians(),
            f: normalize_degrees(f).to_radians(),
            e,
        }
    }

    /// Lunar-position arguments at `t` centuries (Meeus 47.2–47.6).
    pub fn lunar(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
            - t4 / 113_065_000.0;
        let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
        let n = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
            - t4 / 14_712_000.0;
        let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
            + t4 / 863_310_000.0;
        let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
        Self::from_degrees(t, d, m, n, f, e)
    }

    /// Apsis arguments for lunation number `k` (Meeus 50.1 ff.).
    ///
    /// M′ does not enter the apsis series and is left at zero; the
    /// eccentricity factor is 1.
    pub fn apsides(k: f64) -> Self {
        let t = k / 1325.55;
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        let d = 171.917_9 + 335.910_604_6 * k - 0.010_038_3 * t2 - 0.000_011_56 * t3
            + 0.000_000_055 * t4;
        let m = 347.347_7 + 27.157_772_1 * k - 0.000_813_0 * t2 - 0.000_001_0 * t3;
        let f = 316.610_9 + 364.528_791_1 * k - 0.012_505_3 * t2 - 0.000_014_8 * t3;
        Self::from_degrees(t, d, m, 0.0, f, 1.0)
    }
}

/// Moon's mean longitude L′ in degrees, [0, 360) (Meeus 47.1).
pub fn lunar_mean_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    normalize_degrees(
        218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
            - t3 * t / 65_194_000.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const T_EXAMPLE_47A: f64 = -0.077_221_081_451;

    #[test]
    fn meeus_example_47a_arguments() {
        let a = FundamentalArguments::lunar(T_EXAMPLE_47A);
        assert_abs_diff_eq!(a.d.to_degrees(), 113.842_304, epsilon = 1e-5);
        assert_abs_diff_eq!(a.m.to_degrees(), 97.643_514, epsilon = 1e-5);
        assert_abs_diff_eq!(a.n.to_degrees(), 5.150_833, epsilon = 1e-5);
        assert_abs_diff_eq!(a.f.to_degrees(), 219.889_721, epsilon = 1e-5);
        assert_abs_diff_eq!(a.e, 1.000_194, epsilon = 1e-6);
        assert_abs_diff_eq!(lunar_mean_longitude_deg(T_EXAMPLE_47A), 134.290_182, epsilon = 1e-5);
    }

    #[test]
    fn normalize_handles_negatives_and_wraps() {
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(-1e-17), 0.0);
    }
}
