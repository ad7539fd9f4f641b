//! Event search over the Sun and Moon positions.
//!
//! This crate provides:
//! - Hourly rise/set scanning with interpolated crossings, for any horizon
//! - Solar day events: sunrise/sunset, twilights, solar noon
//! - Lunar illumination, phase names and full-moon names
//! - Solar and lunar eclipses visible from a location (1601–2600)
//! - Lunar perigee and apogee around an instant

pub mod apsis;
pub mod apsis_types;
pub mod cancel;
pub mod eclipse;
pub mod error;
pub mod illumination;
pub mod illumination_types;
pub mod riseset;
pub mod riseset_types;

pub use apsis::{apogee_events, perigee_events};
pub use apsis_types::{ApsisEvent, ApsisPair};
pub use cancel::CancellationToken;
pub use eclipse::{
    EclipsePair, LunarEclipseDetails, LunarEclipseType, SolarEclipseDetails, SolarEclipseType,
    last_lunar_eclipse, last_solar_eclipse, lunar_eclipses, next_lunar_eclipse, next_solar_eclipse,
    solar_eclipses,
};
pub use error::SearchError;
pub use illumination::{day_phase, full_moon_name, moon_illumination, phase_geometry};
pub use illumination_types::{FullMoonName, MoonIllumination, MoonPhase};
pub use riseset::{
    body_rise_set, moon_rise_set, scan_crossings, solar_day_events, solar_noon, sun_rise_set,
};
pub use riseset_types::{Horizon, RiseSetResult, RiseSetStatus, SolarDayEvents};
