//! Topocentric parallax on a reference ellipsoid.
//!
//! Source: Meeus, *Astronomical Algorithms*, 2nd ed., ch. 11 and 40.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::equatorial::Equatorial;

/// Reference ellipsoid for the observer's position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ellipsoid {
    /// Equatorial radius in km.
    pub equatorial_radius_km: f64,
    /// Flattening f = (a − b) / a.
    pub flattening: f64,
}

impl Ellipsoid {
    /// WGS 84.
    pub const WGS84: Self = Self {
        equatorial_radius_km: 6378.137,
        flattening: 1.0 / 298.257_223_563,
    };

    /// Geocentric position of an observer, in equatorial radii.
    pub fn figure(&self, latitude_rad: f64, height_m: f64) -> ObserverFigure {
        let b_over_a = 1.0 - self.flattening;
        let u = (b_over_a * latitude_rad.tan()).atan();
        let h = height_m / (self.equatorial_radius_km * 1000.0);
        ObserverFigure {
            rho_sin_phi: b_over_a * u.sin() + h * latitude_rad.sin(),
            rho_cos_phi: u.cos() + h * latitude_rad.cos(),
        }
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

/// ρ sin φ′ and ρ cos φ′ of an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverFigure {
    pub rho_sin_phi: f64,
    pub rho_cos_phi: f64,
}

/// Topocentric place of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Topocentric {
    pub equatorial: Equatorial,
    /// Topocentric hour angle, radians.
    pub hour_angle_rad: f64,
}

/// Shift a geocentric place to the observer (Meeus 40.2, 40.3).
///
/// `distance_km` is the body's geocentric distance; `radius_km` the
/// ellipsoid's equatorial radius.
pub fn topocentric(
    geocentric: &Equatorial,
    distance_km: f64,
    hour_angle_rad: f64,
    figure: &ObserverFigure,
    radius_km: f64,
) -> Topocentric {
    let sin_pi = radius_km / distance_km;
    let (sin_h, cos_h) = hour_angle_rad.sin_cos();
    let (sin_d, cos_d) = geocentric.dec_rad.sin_cos();

    let denom = cos_d - figure.rho_cos_phi * sin_pi * cos_h;
    if denom.abs() < 1e-12 {
        log::warn!(
            "topocentric correction degenerate near the celestial pole (dec {:.6}°)",
            geocentric.dec_rad.to_degrees()
        );
    }
    let delta_ra = (-figure.rho_cos_phi * sin_pi * sin_h).atan2(denom);
    let dec = ((sin_d - figure.rho_sin_phi * sin_pi) * delta_ra.cos()).atan2(denom);

    Topocentric {
        equatorial: Equatorial {
            ra_rad: (geocentric.ra_rad + delta_ra).rem_euclid(std::f64::consts::TAU),
            dec_rad: dec,
        },
        hour_angle_rad: hour_angle_rad - delta_ra,
    }
}
