//! Equatorial → horizontal conversion and the parallactic angle.

use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position of a body in the observer's sky.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalCoords {
    /// Altitude above the horizon in degrees, refraction included when enabled.
    pub altitude_deg: f64,
    /// Azimuth in degrees, measured from north through east, [0, 360).
    pub azimuth_deg: f64,
    /// Altitude lost to topocentric parallax, degrees. Zero for the Sun.
    pub parallax_deg: f64,
    /// Refraction added to the true altitude, degrees.
    pub refraction_deg: f64,
    /// Angle between the direction to the zenith and to the celestial
    /// north pole at the body, radians.
    pub parallactic_angle_rad: f64,
}

/// Altitude and azimuth (from north) in radians.
///
/// `hour_angle_rad` is local hour angle, positive westward.
pub fn equatorial_to_horizontal(
    hour_angle_rad: f64,
    dec_rad: f64,
    latitude_rad: f64,
) -> (f64, f64) {
    let (sin_h, cos_h) = hour_angle_rad.sin_cos();
    let (sin_d, cos_d) = dec_rad.sin_cos();
    let (sin_p, cos_p) = latitude_rad.sin_cos();

    let altitude = (sin_p * sin_d + cos_p * cos_d * cos_h).clamp(-1.0, 1.0).asin();
    // Meeus 13.5 measures from south; rotate to north.
    let azimuth_south = sin_h.atan2(cos_h * sin_p - (sin_d / cos_d) * cos_p);
    let azimuth = (azimuth_south + PI).rem_euclid(2.0 * PI);
    (altitude, azimuth)
}

/// Parallactic angle q in radians (Meeus 14.1).
///
/// Undefined for an observer at a geographic pole or a body at a celestial
/// pole; 0.0 is returned there.
pub fn parallactic_angle(hour_angle_rad: f64, dec_rad: f64, latitude_rad: f64) -> f64 {
    if latitude_rad.cos().abs() < 1e-12 || dec_rad.cos().abs() < 1e-12 {
        log::warn!(
            "parallactic angle undefined (latitude {:.6}°, declination {:.6}°)",
            latitude_rad.to_degrees(),
            dec_rad.to_degrees()
        );
        return 0.0;
    }
    let (sin_h, cos_h) = hour_angle_rad.sin_cos();
    sin_h.atan2(latitude_rad.tan() * dec_rad.cos() - dec_rad.sin() * cos_h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn meridian_transit_altitude() {
        let lat = 40f64.to_radians();
        let dec = 10f64.to_radians();
        let (alt, az) = equatorial_to_horizontal(0.0, dec, lat);
        assert_abs_diff_eq!(alt.to_degrees(), 60.0, epsilon = 1e-9);
        assert_abs_diff_eq!(az.to_degrees(), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn rising_body_is_east() {
        let lat = 40f64.to_radians();
        let (alt, az) = equatorial_to_horizontal(-std::f64::consts::FRAC_PI_2, 0.0, lat);
        assert_abs_diff_eq!(alt, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(az.to_degrees(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn zenith_at_equal_dec_and_latitude() {
        let lat = 35f64.to_radians();
        let (alt, _) = equatorial_to_horizontal(0.0, lat, lat);
        assert_abs_diff_eq!(alt.to_degrees(), 90.0, epsilon = 1e-6);
    }

    #[test]
    fn parallactic_angle_zero_on_meridian() {
        let q = parallactic_angle(0.0, 10f64.to_radians(), 40f64.to_radians());
        assert_abs_diff_eq!(q, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn parallactic_angle_sign_follows_hour_angle() {
        let lat = 40f64.to_radians();
        let dec = 10f64.to_radians();
        assert!(parallactic_angle(0.5, dec, lat) > 0.0);
        assert!(parallactic_angle(-0.5, dec, lat) < 0.0);
    }

    #[test]
    fn parallactic_angle_at_pole_is_zero() {
        assert_eq!(parallactic_angle(0.3, 0.2, std::f64::consts::FRAC_PI_2), 0.0);
    }
}
