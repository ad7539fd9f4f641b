//! Engine configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use almanac_frames::{Ellipsoid, Refraction};

use crate::error::ConfigError;

/// Tunable constants of the position and search computations.
///
/// `Default` gives the standard almanac values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlmanacConfig {
    /// Atmospheric refraction model applied to apparent altitudes.
    pub refraction: Refraction,
    /// Altitude of a body's centre at ordinary rise/set, degrees. Default: −0.3.
    pub apparent_horizon_deg: f64,
    /// Reference ellipsoid for the observer's position.
    pub ellipsoid: Ellipsoid,
    /// Observer height above the ellipsoid, metres. Default: 0.
    pub observer_altitude_m: f64,
    /// Observer height used for local eclipse circumstances, metres. Default: 100.
    pub eclipse_observer_altitude_m: f64,
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self {
            refraction: Refraction::default(),
            apparent_horizon_deg: -0.3,
            ellipsoid: Ellipsoid::WGS84,
            observer_altitude_m: 0.0,
            eclipse_observer_altitude_m: 100.0,
        }
    }
}

impl AlmanacConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.refraction;
        if !r.pressure_hpa.is_finite() || r.pressure_hpa <= 0.0 {
            return Err(ConfigError::Invalid("refraction pressure must be positive"));
        }
        if !r.temperature_c.is_finite() || r.temperature_c <= -273.15 {
            return Err(ConfigError::Invalid(
                "refraction temperature must be above absolute zero",
            ));
        }
        if !(-90.0..=90.0).contains(&self.apparent_horizon_deg) {
            return Err(ConfigError::Invalid(
                "apparent_horizon_deg must be within [-90, 90]",
            ));
        }
        let e = &self.ellipsoid;
        if !e.equatorial_radius_km.is_finite() || e.equatorial_radius_km <= 0.0 {
            return Err(ConfigError::Invalid("ellipsoid radius must be positive"));
        }
        if !(0.0..1.0).contains(&e.flattening) {
            return Err(ConfigError::Invalid("ellipsoid flattening must be in [0, 1)"));
        }
        if !self.observer_altitude_m.is_finite() || !self.eclipse_observer_altitude_m.is_finite() {
            return Err(ConfigError::Invalid("observer altitudes must be finite"));
        }
        Ok(())
    }
}
