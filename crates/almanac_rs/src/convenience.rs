//! One-call helpers over the default configuration, for callers that need
//! a single quantity rather than the whole almanac.

use chrono::{DateTime, NaiveDate, Offset, Utc};

use almanac_core::{AlmanacConfig, GeoPosition};
use almanac_search::{
    ApsisPair, EclipsePair, LunarEclipseDetails, MoonIllumination, RiseSetResult, SolarDayEvents,
    SolarEclipseDetails,
};
use almanac_time::normalize_instant;

use crate::error::AlmanacError;

/// Sunrise, sunset, twilights and solar noon for a UTC day, default config.
pub fn sun_times(position: &GeoPosition, day: NaiveDate) -> Result<SolarDayEvents, AlmanacError> {
    position.validate()?;
    Ok(almanac_search::solar_day_events(
        day,
        position,
        &AlmanacConfig::default(),
        None,
    )?)
}

/// Moonrise and moonset for a UTC day, default config.
pub fn moon_times(position: &GeoPosition, day: NaiveDate) -> Result<RiseSetResult, AlmanacError> {
    position.validate()?;
    Ok(almanac_search::moon_rise_set(
        day,
        position,
        &AlmanacConfig::default(),
        None,
    )?)
}

/// Moon illumination at `instant`, phase names judged on the UTC day.
pub fn moon_illumination(instant: &DateTime<Utc>) -> MoonIllumination {
    almanac_search::moon_illumination(&normalize_instant(*instant), Utc.fix())
}

/// Last and next solar eclipses visible from `position`.
pub fn solar_eclipses(
    position: &GeoPosition,
    instant: &DateTime<Utc>,
) -> Result<EclipsePair<SolarEclipseDetails>, AlmanacError> {
    position.validate()?;
    Ok(almanac_search::solar_eclipses(
        &normalize_instant(*instant),
        position,
        &AlmanacConfig::default(),
    ))
}

/// Last and next lunar eclipses visible from `position`.
pub fn lunar_eclipses(
    position: &GeoPosition,
    instant: &DateTime<Utc>,
) -> Result<EclipsePair<LunarEclipseDetails>, AlmanacError> {
    position.validate()?;
    Ok(almanac_search::lunar_eclipses(
        &normalize_instant(*instant),
        position,
        &AlmanacConfig::default(),
    ))
}

/// Lunar perigees either side of `instant`.
pub fn perigee(instant: &DateTime<Utc>) -> ApsisPair {
    almanac_search::perigee_events(&normalize_instant(*instant))
}

/// Lunar apogees either side of `instant`.
pub fn apogee(instant: &DateTime<Utc>) -> ApsisPair {
    almanac_search::apogee_events(&normalize_instant(*instant))
}
