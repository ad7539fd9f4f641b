//! Sun and Moon positions for an Earth-bound observer.
//!
//! The position layer of the almanac: geocentric ecliptic and equatorial
//! places, topocentric altitude/azimuth with refraction, and the shared
//! `GeoPosition`, `Distance` and `AlmanacConfig` types used by the search
//! and orchestration crates.

pub mod config;
pub mod error;
pub mod moon;
pub mod position;
pub mod sun;

pub use almanac_frames::{Ellipsoid, Equatorial, HorizontalCoords, Refraction};
pub use config::AlmanacConfig;
pub use error::ConfigError;
pub use moon::{MoonPosition, moon_altitude_deg, moon_horizontal, moon_position};
pub use position::{Distance, GeoPosition};
pub use sun::{AU_KM, SunPosition, sun_altitude_deg, sun_horizontal, sun_position};

/// Bodies handled by the almanac.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    /// Apparent altitude of the body's centre, degrees.
    pub fn altitude_deg(self, jd: f64, position: &GeoPosition, config: &AlmanacConfig) -> f64 {
        match self {
            Self::Sun => sun_altitude_deg(jd, position, config),
            Self::Moon => moon_altitude_deg(jd, position, config),
        }
    }

    /// Horizontal coordinates of the body.
    pub fn horizontal(
        self,
        jd: f64,
        position: &GeoPosition,
        config: &AlmanacConfig,
    ) -> HorizontalCoords {
        match self {
            Self::Sun => sun_horizontal(jd, position, config),
            Self::Moon => moon_horizontal(jd, position, config),
        }
    }

    /// Geocentric equatorial place and distance (km).
    pub fn geocentric(self, jd: f64) -> (Equatorial, f64) {
        match self {
            Self::Sun => {
                let s = sun_position(jd);
                (s.equatorial, s.distance_km)
            }
            Self::Moon => {
                let m = moon_position(jd);
                (m.equatorial, m.distance_km)
            }
        }
    }
}
