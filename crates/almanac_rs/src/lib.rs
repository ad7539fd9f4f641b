//! Sun and Moon almanac for a position and instant.
//!
//! Combines the position, rise/set, illumination, eclipse and apsis
//! searches into one [`Celestial`] value, either on the UTC day or
//! re-projected onto a local calendar day at a fixed UTC offset.
//!
//! # Quick start
//!
//! ```rust
//! use almanac_rs::*;
//! use chrono::{TimeZone, Utc};
//!
//! let boston = GeoPosition::new(42.3601, -71.0589);
//! let instant = Utc.with_ymd_and_hms(2018, 3, 15, 17, 0, 0).unwrap();
//! let local = compute_local(&boston, &instant, -4.0, &AlmanacConfig::default()).unwrap();
//! if let Some(rise) = local.sun.events.sunrise_sunset.rise {
//!     println!("sunrise {}", rise.format("%H:%M"));
//! }
//! println!("moon {:.0}% lit", local.moon.illumination.fraction * 100.0);
//! ```

pub mod celestial;
pub mod compute;
pub mod convenience;
pub mod error;
pub mod local;
pub mod shift;

pub use celestial::{Celestial, EclipseSummary, MoonInfo, SunInfo};
pub use compute::{DayEvents, compute, compute_with_cancel, day_events};
pub use convenience::{
    apogee, lunar_eclipses, moon_illumination, moon_times, perigee, solar_eclipses, sun_times,
};
pub use error::AlmanacError;
pub use local::{compute_local, compute_local_with_cancel, utc_offset};
pub use shift::InstantFields;

// Re-export the result and input types so callers need only this crate.
pub use almanac_core::{
    AlmanacConfig, ConfigError, Distance, Ellipsoid, GeoPosition, HorizontalCoords, Refraction,
};
pub use almanac_search::{
    ApsisEvent, ApsisPair, CancellationToken, EclipsePair, FullMoonName, Horizon,
    LunarEclipseDetails, LunarEclipseType, MoonIllumination, MoonPhase, RiseSetResult,
    RiseSetStatus, SearchError, SolarDayEvents, SolarEclipseDetails, SolarEclipseType,
};
