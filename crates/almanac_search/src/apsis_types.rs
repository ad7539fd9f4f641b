//! Lunar perigee and apogee results.

use chrono::{DateTime, FixedOffset};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use almanac_core::Distance;

/// One passage of the Moon through perigee or apogee.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ApsisEvent {
    /// Instant of the passage; `None` for the out-of-range sentinel.
    pub instant: Option<DateTime<FixedOffset>>,
    /// Equatorial horizontal parallax, arcseconds.
    pub horizontal_parallax_arcsec: f64,
    /// Earth–Moon distance at the passage.
    pub distance: Distance,
}

impl ApsisEvent {
    /// Placeholder for dates before year 1.
    pub const NONE: Self = Self {
        instant: None,
        horizontal_parallax_arcsec: 0.0,
        distance: Distance::ZERO,
    };

    pub fn is_none(&self) -> bool {
        self.instant.is_none()
    }
}

/// Passages on either side of a query instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ApsisPair {
    /// Latest passage at or before the query.
    pub last: ApsisEvent,
    /// Earliest passage after the query.
    pub next: ApsisEvent,
}

impl ApsisPair {
    pub const NONE: Self = Self {
        last: ApsisEvent::NONE,
        next: ApsisEvent::NONE,
    };
}
