//! Types for rise/set and twilight scans.

use chrono::{DateTime, FixedOffset, TimeZone};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use almanac_core::AlmanacConfig;

/// Mean angular diameter of the Sun in degrees (twice 0.2666°).
pub const SUN_ANGULAR_DIAMETER_DEG: f64 = 2.0 * 0.2666;

/// Altitude threshold a body's centre is compared against.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Horizon {
    /// Ordinary rise/set at the configured apparent horizon (−0.3° by default).
    Apparent,
    /// Lower limb on the apparent horizon: end of sunrise, start of sunset.
    BottomOfDisc,
    /// Centre 6° below the horizon.
    Civil,
    /// Centre 12° below the horizon.
    Nautical,
    /// Centre 18° below the horizon.
    Astronomical,
    /// Any altitude in degrees.
    Custom(f64),
}

impl Horizon {
    /// Altitude of the body's centre at the crossing, degrees.
    pub fn threshold_deg(self, config: &AlmanacConfig) -> f64 {
        match self {
            Self::Apparent => config.apparent_horizon_deg,
            Self::BottomOfDisc => config.apparent_horizon_deg + SUN_ANGULAR_DIAMETER_DEG,
            Self::Civil => -6.0,
            Self::Nautical => -12.0,
            Self::Astronomical => -18.0,
            Self::Custom(deg) => deg,
        }
    }
}

/// How a body behaved with respect to a threshold over one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RiseSetStatus {
    /// Both a rise and a set occurred.
    RiseAndSet,
    /// Below the threshold for the whole day.
    DownAllDay,
    /// Above the threshold for the whole day.
    UpAllDay,
    /// A set but no rise.
    NoRise,
    /// A rise but no set.
    NoSet,
}

impl RiseSetStatus {
    /// Status implied by which crossings were found.
    ///
    /// `above_at_end` decides between the all-day variants when neither was.
    pub fn from_crossings(has_rise: bool, has_set: bool, above_at_end: bool) -> Self {
        match (has_rise, has_set) {
            (true, true) => Self::RiseAndSet,
            (true, false) => Self::NoSet,
            (false, true) => Self::NoRise,
            (false, false) if above_at_end => Self::UpAllDay,
            (false, false) => Self::DownAllDay,
        }
    }

    pub fn is_all_day(self) -> bool {
        matches!(self, Self::UpAllDay | Self::DownAllDay)
    }
}

/// First rise and first set of a body within one day.
///
/// `rise` is present exactly for `RiseAndSet`/`NoSet`, `set` exactly for
/// `RiseAndSet`/`NoRise`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RiseSetResult {
    pub rise: Option<DateTime<FixedOffset>>,
    pub set: Option<DateTime<FixedOffset>>,
    pub status: RiseSetStatus,
}

impl RiseSetResult {
    pub fn new(
        rise: Option<DateTime<FixedOffset>>,
        set: Option<DateTime<FixedOffset>>,
        above_at_end: bool,
    ) -> Self {
        Self {
            rise,
            set,
            status: RiseSetStatus::from_crossings(rise.is_some(), set.is_some(), above_at_end),
        }
    }

    /// Result with no crossings.
    pub fn all_day(up: bool) -> Self {
        Self::new(None, None, up)
    }

    /// Whether the body is above the threshold at `instant`, judged from
    /// this day's crossings.
    pub fn is_up_at<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        match (self.status, self.rise, self.set) {
            (RiseSetStatus::UpAllDay, _, _) => true,
            (RiseSetStatus::DownAllDay, _, _) => false,
            (RiseSetStatus::RiseAndSet, Some(rise), Some(set)) => {
                if rise < set {
                    *instant >= rise && *instant < set
                } else {
                    *instant < set || *instant >= rise
                }
            }
            (RiseSetStatus::NoRise, _, Some(set)) => *instant < set,
            (RiseSetStatus::NoSet, Some(rise), _) => *instant >= rise,
            _ => false,
        }
    }
}

/// Sunrise, sunset and twilight for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolarDayEvents {
    /// Sunrise and sunset at the apparent horizon.
    pub sunrise_sunset: RiseSetResult,
    /// Lower limb crossings: `rise` is sunrise end, `set` is sunset start.
    pub bottom_of_disc: RiseSetResult,
    /// Civil dawn (`rise`) and dusk (`set`).
    pub civil: RiseSetResult,
    /// Nautical dawn and dusk.
    pub nautical: RiseSetResult,
    /// Astronomical dawn and dusk.
    pub astronomical: RiseSetResult,
    /// Sun's transit of the local meridian, when it falls within the day.
    pub solar_noon: Option<DateTime<FixedOffset>>,
}
