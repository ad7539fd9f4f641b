//! Eclipse result types.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a lunar eclipse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LunarEclipseType {
    /// Moon enters only the penumbra.
    Penumbral,
    /// Part of the Moon enters the umbra.
    Partial,
    /// The whole Moon enters the umbra.
    Total,
}

impl LunarEclipseType {
    /// Numeric code used in the eclipse tables.
    pub const fn code(self) -> u8 {
        match self {
            Self::Penumbral => 1,
            Self::Partial => 2,
            Self::Total => 3,
        }
    }

    pub fn from_code(code: f64) -> Option<Self> {
        match code {
            c if c == 1.0 => Some(Self::Penumbral),
            c if c == 2.0 => Some(Self::Partial),
            c if c == 3.0 => Some(Self::Total),
            _ => None,
        }
    }
}

/// Classification of a solar eclipse, globally or for one observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolarEclipseType {
    Partial,
    Annular,
    Total,
    /// Annular along part of the path and total along the rest.
    /// Only occurs as a global classification.
    Hybrid,
}

impl SolarEclipseType {
    /// Numeric code used in the eclipse tables.
    pub const fn code(self) -> u8 {
        match self {
            Self::Partial => 1,
            Self::Annular => 2,
            Self::Total => 3,
            Self::Hybrid => 4,
        }
    }

    pub fn from_code(code: f64) -> Option<Self> {
        match code {
            c if c == 1.0 => Some(Self::Partial),
            c if c == 2.0 => Some(Self::Annular),
            c if c == 3.0 => Some(Self::Total),
            c if c == 4.0 => Some(Self::Hybrid),
            _ => None,
        }
    }
}

/// A lunar eclipse as seen from one location.
///
/// Contacts that do not occur for the eclipse's type are `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LunarEclipseDetails {
    /// Calendar date of the first contact.
    pub date: NaiveDate,
    pub eclipse_type: LunarEclipseType,
    /// P1: Moon enters the penumbra.
    pub penumbral_begin: Option<DateTime<FixedOffset>>,
    /// U1: Moon enters the umbra.
    pub partial_begin: Option<DateTime<FixedOffset>>,
    /// U2: Moon wholly inside the umbra.
    pub total_begin: Option<DateTime<FixedOffset>>,
    /// Greatest eclipse.
    pub maximum: Option<DateTime<FixedOffset>>,
    /// U3: Moon starts leaving the umbra.
    pub total_end: Option<DateTime<FixedOffset>>,
    /// U4: Moon leaves the umbra.
    pub partial_end: Option<DateTime<FixedOffset>>,
    /// P4: Moon leaves the penumbra.
    pub penumbral_end: Option<DateTime<FixedOffset>>,
    pub penumbral_magnitude: f64,
    /// Negative for penumbral eclipses.
    pub umbral_magnitude: f64,
}

impl LunarEclipseDetails {
    /// P1 to P4.
    pub fn duration(&self) -> Option<TimeDelta> {
        Some(self.penumbral_end? - self.penumbral_begin?)
    }

    /// U2 to U3.
    pub fn totality(&self) -> Option<TimeDelta> {
        Some(self.total_end? - self.total_begin?)
    }
}

/// A solar eclipse as seen from one location.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolarEclipseDetails {
    /// Calendar date of the first contact.
    pub date: NaiveDate,
    /// What the observer sees: partial, annular or total.
    pub eclipse_type: SolarEclipseType,
    /// Classification of the eclipse as a whole.
    pub global_type: SolarEclipseType,
    /// C1: first contact.
    pub partial_begin: Option<DateTime<FixedOffset>>,
    /// C2: annularity or totality begins.
    pub central_begin: Option<DateTime<FixedOffset>>,
    /// Local maximum.
    pub maximum: Option<DateTime<FixedOffset>>,
    /// C3: annularity or totality ends.
    pub central_end: Option<DateTime<FixedOffset>>,
    /// C4: last contact.
    pub partial_end: Option<DateTime<FixedOffset>>,
    /// Fraction of the Sun's diameter covered at maximum.
    pub magnitude: f64,
    /// Sun's altitude at maximum, degrees.
    pub sun_altitude_deg: f64,
}

impl SolarEclipseDetails {
    /// C1 to C4.
    pub fn duration(&self) -> Option<TimeDelta> {
        Some(self.partial_end? - self.partial_begin?)
    }

    /// C2 to C3: duration of annularity or totality.
    pub fn central_duration(&self) -> Option<TimeDelta> {
        Some(self.central_end? - self.central_begin?)
    }
}

/// Most recent and next locally visible eclipse around a query instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EclipsePair<T> {
    pub last: Option<T>,
    pub next: Option<T>,
}

impl<T> Default for EclipsePair<T> {
    fn default() -> Self {
        Self {
            last: None,
            next: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_round_trip() {
        for t in [LunarEclipseType::Penumbral, LunarEclipseType::Partial, LunarEclipseType::Total] {
            assert_eq!(LunarEclipseType::from_code(f64::from(t.code())), Some(t));
        }
        for t in [
            SolarEclipseType::Partial,
            SolarEclipseType::Annular,
            SolarEclipseType::Total,
            SolarEclipseType::Hybrid,
        ] {
            assert_eq!(SolarEclipseType::from_code(f64::from(t.code())), Some(t));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(LunarEclipseType::from_code(0.0), None);
        assert_eq!(LunarEclipseType::from_code(f64::NAN), None);
        assert_eq!(SolarEclipseType::from_code(5.0), None);
        assert_eq!(SolarEclipseType::from_code(2.5), None);
    }
}
