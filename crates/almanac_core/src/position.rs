//! Observer position and distance quantities.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Geographic position on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPosition {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoPosition {
    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if (-90.0..=90.0).contains(&self.latitude_deg)
            && (-180.0..=180.0).contains(&self.longitude_deg)
        {
            Ok(())
        } else {
            Err(ConfigError::InvalidPosition {
                latitude_deg: self.latitude_deg,
                longitude_deg: self.longitude_deg,
            })
        }
    }
}

const METERS_PER_KM: f64 = 1000.0;
const KM_PER_MILE: f64 = 1.609_344;
const KM_PER_NAUTICAL_MILE: f64 = 1.852;
const METERS_PER_FOOT: f64 = 0.3048;

/// A length, stored in kilometres.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Distance {
    km: f64,
}

impl Distance {
    /// Sentinel for "no distance available".
    pub const ZERO: Self = Self { km: 0.0 };

    pub const fn from_km(km: f64) -> Self {
        Self { km }
    }

    pub fn km(self) -> f64 {
        self.km
    }

    pub fn meters(self) -> f64 {
        self.km * METERS_PER_KM
    }

    /// Statute miles.
    pub fn miles(self) -> f64 {
        self.km / KM_PER_MILE
    }

    pub fn nautical_miles(self) -> f64 {
        self.km / KM_PER_NAUTICAL_MILE
    }

    pub fn feet(self) -> f64 {
        self.meters() / METERS_PER_FOOT
    }
}
