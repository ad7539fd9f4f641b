//! Aggregate result of one almanac query.

use chrono::{DateTime, FixedOffset};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use almanac_core::{Distance, GeoPosition, HorizontalCoords};
use almanac_search::{
    ApsisPair, EclipsePair, LunarEclipseDetails, MoonIllumination, RiseSetResult, SolarDayEvents,
    SolarEclipseDetails,
};

use crate::shift::InstantFields;

/// The Sun as seen from the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunInfo {
    /// Sunrise, sunset, twilights and solar noon for the query day.
    pub events: SolarDayEvents,
    /// Position at the query instant.
    pub horizontal: HorizontalCoords,
    pub distance: Distance,
    /// Above the apparent horizon at the query instant, judged from `events`.
    pub is_up: bool,
}

/// The Moon as seen from the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoonInfo {
    pub rise_set: RiseSetResult,
    pub horizontal: HorizontalCoords,
    pub distance: Distance,
    pub illumination: MoonIllumination,
    /// Above the apparent horizon at the query instant, judged from `rise_set`.
    pub is_up: bool,
    pub perigee: ApsisPair,
    pub apogee: ApsisPair,
}

/// Visible eclipses around the query instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EclipseSummary {
    pub solar: EclipsePair<SolarEclipseDetails>,
    pub lunar: EclipsePair<LunarEclipseDetails>,
}

/// Everything the almanac knows about one position and instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Celestial {
    /// Query instant, whole seconds, at the offset results are expressed in.
    pub instant: DateTime<FixedOffset>,
    pub position: GeoPosition,
    pub sun: SunInfo,
    pub moon: MoonInfo,
    pub eclipses: EclipseSummary,
}

impl Celestial {
    pub fn is_sun_up(&self) -> bool {
        self.sun.is_up
    }

    pub fn is_moon_up(&self) -> bool {
        self.moon.is_up
    }
}

impl InstantFields for EclipseSummary {
    fn for_each_instant(&mut self, f: &mut dyn FnMut(&mut DateTime<FixedOffset>)) {
        self.solar.for_each_instant(f);
        self.lunar.for_each_instant(f);
    }
}

impl InstantFields for SunInfo {
    fn for_each_instant(&mut self, f: &mut dyn FnMut(&mut DateTime<FixedOffset>)) {
        self.events.for_each_instant(f);
    }
}

impl InstantFields for MoonInfo {
    fn for_each_instant(&mut self, f: &mut dyn FnMut(&mut DateTime<FixedOffset>)) {
        self.rise_set.for_each_instant(f);
        self.perigee.for_each_instant(f);
        self.apogee.for_each_instant(f);
    }
}

/// Re-expresses every timestamp without re-selecting day events; use
/// [`compute_local`](crate::compute_local) for calendar-day-correct results.
impl InstantFields for Celestial {
    fn for_each_instant(&mut self, f: &mut dyn FnMut(&mut DateTime<FixedOffset>)) {
        f(&mut self.instant);
        self.sun.for_each_instant(f);
        self.moon.for_each_instant(f);
        self.eclipses.for_each_instant(f);
    }
}
