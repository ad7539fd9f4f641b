//! Atmospheric refraction near the horizon.
//!
//! Source: Sæmundsson (1986), Meeus *Astronomical Algorithms* eq. 16.4,
//! with the pressure/temperature scaling of the same chapter.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Refraction model parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Refraction {
    /// Apply refraction to computed altitudes.
    pub enabled: bool,
    /// Surface pressure in hPa. Default: 1013.25.
    pub pressure_hpa: f64,
    /// Surface temperature in °C. Default: 16.
    pub temperature_c: f64,
}

impl Default for Refraction {
    fn default() -> Self {
        Self {
            enabled: true,
            pressure_hpa: 1013.25,
            temperature_c: 16.0,
        }
    }
}

impl Refraction {
    /// Below this true altitude the formula diverges and no correction is applied.
    pub const LOWEST_ALTITUDE_DEG: f64 = -1.0;

    /// Refraction for a true (airless) altitude, degrees.
    pub fn correction_deg(&self, true_altitude_deg: f64) -> f64 {
        if !self.enabled || true_altitude_deg < Self::LOWEST_ALTITUDE_DEG {
            return 0.0;
        }
        let h = true_altitude_deg;
        let arg = (h + 10.3 / (h + 5.11)).to_radians();
        // Constant term zeroes the correction at the zenith.
        let arcmin = 1.02 / arg.tan() + 0.001_927_9;
        let scale = (self.pressure_hpa / 1010.0) * (283.0 / (273.0 + self.temperature_c));
        arcmin * scale / 60.0
    }

    /// True altitude plus refraction, degrees.
    pub fn apparent_altitude_deg(&self, true_altitude_deg: f64) -> f64 {
        true_altitude_deg + self.correction_deg(true_altitude_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn about_half_a_degree_at_horizon() {
        let r = Refraction::default().correction_deg(0.0);
        assert!(r > 0.45 && r < 0.5, "r = {r}");
    }

    #[test]
    fn vanishes_at_zenith() {
        assert_abs_diff_eq!(Refraction::default().correction_deg(90.0), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn not_applied_well_below_horizon() {
        let r = Refraction::default();
        assert_eq!(r.correction_deg(-1.5), 0.0);
        assert_eq!(r.apparent_altitude_deg(-5.0), -5.0);
    }

    #[test]
    fn disabled_is_identity() {
        let r = Refraction {
            enabled: false,
            ..Refraction::default()
        };
        assert_eq!(r.apparent_altitude_deg(0.2), 0.2);
    }

    #[test]
    fn decreases_with_altitude() {
        let r = Refraction::default();
        let mut prev = r.correction_deg(-1.0);
        for i in 1..90 {
            let cur = r.correction_deg(-1.0 + f64::from(i));
            assert!(cur < prev);
            prev = cur;
        }
    }
}
