//! Equatorial coordinates and the ecliptic → equatorial rotation.

use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::obliquity::{COS_OBL, SIN_OBL};

/// Right ascension and declination, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equatorial {
    /// Right ascension in [0, 2π).
    pub ra_rad: f64,
    /// Declination in [-π/2, π/2].
    pub dec_rad: f64,
}

impl Equatorial {
    /// Unit vector `[x, y, z]` scaled by `distance`.
    pub fn to_cartesian(&self, distance: f64) -> [f64; 3] {
        let (sin_d, cos_d) = self.dec_rad.sin_cos();
        let (sin_a, cos_a) = self.ra_rad.sin_cos();
        [
            distance * cos_d * cos_a,
            distance * cos_d * sin_a,
            distance * sin_d,
        ]
    }
}

/// Rotate ecliptic longitude/latitude (radians) to equatorial coordinates
/// using the J2000 obliquity.
pub fn ecliptic_to_equatorial(lon_rad: f64, lat_rad: f64) -> Equatorial {
    let (sin_l, cos_l) = lon_rad.sin_cos();
    let (sin_b, cos_b) = lat_rad.sin_cos();
    let ra = (sin_l * COS_OBL - (sin_b / cos_b) * SIN_OBL).atan2(cos_l);
    let dec = (sin_b * COS_OBL + cos_b * SIN_OBL * sin_l).clamp(-1.0, 1.0).asin();
    Equatorial {
        ra_rad: ra.rem_euclid(TAU),
        dec_rad: dec,
    }
}

/// Great-circle separation between two equatorial directions, radians.
pub fn angular_separation(a: &Equatorial, b: &Equatorial) -> f64 {
    let cos_sep = a.dec_rad.sin() * b.dec_rad.sin()
        + a.dec_rad.cos() * b.dec_rad.cos() * (a.ra_rad - b.ra_rad).cos();
    cos_sep.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn equinox_maps_to_origin() {
        let eq = ecliptic_to_equatorial(0.0, 0.0);
        assert_abs_diff_eq!(eq.ra_rad, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eq.dec_rad, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn solstice_declination_is_obliquity() {
        let eq = ecliptic_to_equatorial(90f64.to_radians(), 0.0);
        assert_abs_diff_eq!(eq.ra_rad.to_degrees(), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(eq.dec_rad.to_degrees(), 23.439_291_1, epsilon = 1e-9);
    }

    #[test]
    fn ecliptic_pole() {
        let eq = ecliptic_to_equatorial(0.0, 90f64.to_radians() - 1e-12);
        assert_abs_diff_eq!(eq.dec_rad.to_degrees(), 90.0 - 23.439_291_1, epsilon = 1e-6);
        assert_abs_diff_eq!(eq.ra_rad.to_degrees(), 270.0, epsilon = 1e-6);
    }

    #[test]
    fn separation_of_quadrature() {
        let a = Equatorial { ra_rad: 0.0, dec_rad: 0.0 };
        let b = Equatorial { ra_rad: std::f64::consts::FRAC_PI_2, dec_rad: 0.0 };
        assert_abs_diff_eq!(
            angular_separation(&a, &b),
            std::f64::consts::FRAC_PI_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn cartesian_has_requested_length() {
        let eq = Equatorial { ra_rad: 1.2, dec_rad: -0.4 };
        let [x, y, z] = eq.to_cartesian(3.0);
        assert_abs_diff_eq!((x * x + y * y + z * z).sqrt(), 3.0, epsilon = 1e-12);
    }
}
