//! The UTC almanac pass.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

use almanac_core::{
    AlmanacConfig, Distance, GeoPosition, moon_horizontal, moon_position, sun_horizontal,
    sun_position,
};
use almanac_search::{
    CancellationToken, RiseSetResult, SolarDayEvents, apogee_events, lunar_eclipses,
    moon_illumination, moon_rise_set, perigee_events, solar_day_events, solar_eclipses,
};
use almanac_time::{instant_to_jd, normalize_instant};

use crate::celestial::{Celestial, EclipseSummary, MoonInfo, SunInfo};
use crate::error::AlmanacError;

/// Rise/set results that depend only on the calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayEvents {
    pub solar: SolarDayEvents,
    pub moon: RiseSetResult,
}

/// Day-dependent events for one UTC day.
pub fn day_events(
    day: NaiveDate,
    position: &GeoPosition,
    config: &AlmanacConfig,
    cancel: Option<&CancellationToken>,
) -> Result<DayEvents, AlmanacError> {
    Ok(DayEvents {
        solar: solar_day_events(day, position, config, cancel)?,
        moon: moon_rise_set(day, position, config, cancel)?,
    })
}

pub(crate) fn validate(position: &GeoPosition, config: &AlmanacConfig) -> Result<(), AlmanacError> {
    config.validate()?;
    position.validate()?;
    Ok(())
}

/// Combine day events with the instant-dependent parts of the aggregate.
///
/// `day` must already be expressed at `offset`; instant-dependent
/// timestamps are converted to it here.
pub(crate) fn assemble(
    instant: DateTime<Utc>,
    offset: FixedOffset,
    position: &GeoPosition,
    day: DayEvents,
    config: &AlmanacConfig,
) -> Celestial {
    use crate::shift::InstantFields;

    let jd = instant_to_jd(&instant);
    let sun = SunInfo {
        events: day.solar,
        horizontal: sun_horizontal(jd, position, config),
        distance: Distance::from_km(sun_position(jd).distance_km),
        is_up: day.solar.sunrise_sunset.is_up_at(&instant),
    };
    let moon = MoonInfo {
        rise_set: day.moon,
        horizontal: moon_horizontal(jd, position, config),
        distance: Distance::from_km(moon_position(jd).distance_km),
        illumination: moon_illumination(&instant, offset),
        is_up: day.moon.is_up_at(&instant),
        perigee: perigee_events(&instant).at_offset(offset),
        apogee: apogee_events(&instant).at_offset(offset),
    };
    let eclipses = EclipseSummary {
        solar: solar_eclipses(&instant, position, config),
        lunar: lunar_eclipses(&instant, position, config),
    }
    .at_offset(offset);

    Celestial {
        instant: instant.with_timezone(&offset),
        position: *position,
        sun,
        moon,
        eclipses,
    }
}

/// Almanac for `position` at `instant`, with day events for the UTC day.
pub fn compute(
    position: &GeoPosition,
    instant: &DateTime<Utc>,
    config: &AlmanacConfig,
) -> Result<Celestial, AlmanacError> {
    compute_with_cancel(position, instant, config, None)
}

/// [`compute`] with a cancellation token checked between scan steps.
pub fn compute_with_cancel(
    position: &GeoPosition,
    instant: &DateTime<Utc>,
    config: &AlmanacConfig,
    cancel: Option<&CancellationToken>,
) -> Result<Celestial, AlmanacError> {
    validate(position, config)?;
    let instant = normalize_instant(*instant);
    let day = day_events(instant.date_naive(), position, config, cancel)?;
    Ok(assemble(instant, Utc.fix(), position, day, config))
}
